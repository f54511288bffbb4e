//! Removal by name, with confirmation and disambiguation.
//!
//! Removal is split into a plan and a commit so the caller owns the
//! interaction:
//!
//! ```text
//! plan(name) ─┬─ NotFound ───────────────────────────────▶ (nothing to do)
//!             ├─ Single   ── confirm(answer) ──┬─ Chosen ──▶ commit
//!             │                                └─ Cancelled
//!             └─ Multiple ── select(input) ────┬─ Chosen ──▶ commit
//!                                              └─ Cancelled
//! ```
//!
//! [`run`] wires the two together with a decision callback. The commit
//! targets the record by its email and full field equality and removes only
//! the first such entry.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Record;
use crate::store::{RecordStore, StorageBackend};
use std::fmt;

use super::helpers::{is_affirmative, load_records};

/// Records matching a name, case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemovalPlan {
    NotFound { name: String },
    Single(Record),
    /// Candidates in stored order; selections are 1-based.
    Multiple(Vec<Record>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CancelReason {
    Declined,
    ZeroSelected,
    OutOfRange(i64),
    NotANumber(String),
}

impl fmt::Display for CancelReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CancelReason::Declined | CancelReason::ZeroSelected => {
                write!(f, "Operation cancelled.")
            }
            CancelReason::OutOfRange(_) => write!(f, "Invalid number. Operation cancelled."),
            CancelReason::NotANumber(_) => write!(f, "Invalid input. Operation cancelled."),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Chosen(Record),
    Cancelled(CancelReason),
}

impl RemovalPlan {
    pub fn from_records(records: Vec<Record>, name: &str) -> Self {
        let name = name.trim();
        let mut matches: Vec<Record> = records.into_iter().filter(|r| r.has_name(name)).collect();
        match matches.len() {
            0 => RemovalPlan::NotFound {
                name: name.to_string(),
            },
            1 => RemovalPlan::Single(matches.remove(0)),
            _ => RemovalPlan::Multiple(matches),
        }
    }

    pub fn candidates(&self) -> &[Record] {
        match self {
            RemovalPlan::NotFound { .. } => &[],
            RemovalPlan::Single(record) => std::slice::from_ref(record),
            RemovalPlan::Multiple(records) => records,
        }
    }

    /// Resolves a yes/no answer for a single match.
    pub fn confirm(&self, answer: &str) -> Selection {
        match self {
            RemovalPlan::Single(record) if is_affirmative(answer) => {
                Selection::Chosen(record.clone())
            }
            _ => Selection::Cancelled(CancelReason::Declined),
        }
    }

    /// Resolves a 1-based pick among the candidates. `0` cancels, as does
    /// anything out of range or not a number.
    pub fn select(&self, input: &str) -> Selection {
        let input = input.trim();
        let choice: i64 = match input.parse() {
            Ok(n) => n,
            Err(_) => return Selection::Cancelled(CancelReason::NotANumber(input.to_string())),
        };
        if choice == 0 {
            return Selection::Cancelled(CancelReason::ZeroSelected);
        }

        let candidates = self.candidates();
        match usize::try_from(choice) {
            Ok(n) if n <= candidates.len() => Selection::Chosen(candidates[n - 1].clone()),
            _ => Selection::Cancelled(CancelReason::OutOfRange(choice)),
        }
    }
}

/// Finds the records that a removal of `name` would consider.
pub fn plan<B: StorageBackend>(store: &RecordStore<B>, name: &str) -> Result<RemovalPlan> {
    Ok(RemovalPlan::from_records(store.load()?, name))
}

/// Removes `target` from the store and persists the rest.
pub fn commit<B: StorageBackend>(store: &RecordStore<B>, target: &Record) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut records = load_records(store, &mut result)?;

    let Some(pos) = records
        .iter()
        .position(|r| r.email == target.email && r == target)
    else {
        tracing::warn!(email = %target.email, "record vanished before removal");
        result.add_message(CmdMessage::info("User not found."));
        return Ok(result);
    };

    let removed = records.remove(pos);
    store.save(&records)?;

    result.add_message(CmdMessage::success(format!(
        "User removed: {} ({})",
        removed.name, removed.email
    )));
    Ok(result.with_affected_records(vec![removed]))
}

/// Plans a removal, asks `decide` to confirm or pick, then commits.
///
/// `decide` is only called when there is at least one match.
pub fn run<B, F>(store: &RecordStore<B>, name: &str, decide: F) -> Result<CmdResult>
where
    B: StorageBackend,
    F: FnOnce(&RemovalPlan) -> Result<Selection>,
{
    let mut result = CmdResult::default();
    let records = load_records(store, &mut result)?;
    let plan = RemovalPlan::from_records(records, name);

    if let RemovalPlan::NotFound { .. } = plan {
        result.add_message(CmdMessage::info("User not found."));
        return Ok(result);
    }

    match decide(&plan)? {
        Selection::Chosen(target) => {
            let committed = commit(store, &target)?;
            result.messages.extend(committed.messages);
            result.affected_records = committed.affected_records;
            Ok(result)
        }
        Selection::Cancelled(reason) => {
            tracing::debug!(?reason, "removal cancelled");
            result.cancelled = true;
            result.add_message(CmdMessage::info(reason.to_string()));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;

    fn two_anas() -> RecordStore<MemBackend> {
        let store = RecordStore::new(MemBackend::new());
        store
            .save(&[
                Record::new("Ana", 20, "ana@x.com"),
                Record::new("ana", 22, "ana2@x.com"),
            ])
            .unwrap();
        store
    }

    #[test]
    fn name_match_is_case_insensitive_and_exact() {
        let store = two_anas();
        let found = plan(&store, "ANA").unwrap();
        assert_eq!(found.candidates().len(), 2);

        let found = plan(&store, "An").unwrap();
        assert!(matches!(found, RemovalPlan::NotFound { .. }));
    }

    #[test]
    fn selecting_second_candidate_removes_only_it() {
        let store = two_anas();
        let result = run(&store, "ANA", |plan| {
            assert!(matches!(plan, RemovalPlan::Multiple(_)));
            Ok(plan.select("2"))
        })
        .unwrap();

        assert!(!result.cancelled);
        assert_eq!(result.affected_records, vec![Record::new("ana", 22, "ana2@x.com")]);
        assert_eq!(store.load().unwrap(), vec![Record::new("Ana", 20, "ana@x.com")]);
    }

    #[test]
    fn zero_out_of_range_and_garbage_cancel() {
        let store = two_anas();
        for input in ["0", "3", "-1", "two", ""] {
            let result = run(&store, "ana", |plan| Ok(plan.select(input))).unwrap();
            assert!(result.cancelled, "input {:?} should cancel", input);
            assert_eq!(store.load().unwrap().len(), 2);
        }
        assert_eq!(store.backend().write_count(), 1);
    }

    #[test]
    fn cancel_messages_follow_reason() {
        let plan = RemovalPlan::Multiple(vec![
            Record::new("Ana", 20, "ana@x.com"),
            Record::new("ana", 22, "ana2@x.com"),
        ]);
        assert_eq!(
            plan.select("0"),
            Selection::Cancelled(CancelReason::ZeroSelected)
        );
        assert_eq!(
            plan.select("9"),
            Selection::Cancelled(CancelReason::OutOfRange(9))
        );
        assert_eq!(
            CancelReason::NotANumber("x".into()).to_string(),
            "Invalid input. Operation cancelled."
        );
    }

    #[test]
    fn single_match_requires_confirmation() {
        let store = RecordStore::new(MemBackend::new());
        store.save(&[Record::new("Bruno", 31, "b@x.com")]).unwrap();

        let result = run(&store, "bruno", |plan| Ok(plan.confirm("n"))).unwrap();
        assert!(result.cancelled);
        assert_eq!(store.load().unwrap().len(), 1);

        let result = run(&store, "bruno", |plan| Ok(plan.confirm("y"))).unwrap();
        assert!(!result.cancelled);
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn missing_name_does_not_ask() {
        let store = two_anas();
        let result = run(&store, "Carla", |_| panic!("should not be asked")).unwrap();
        assert_eq!(result.messages[0].content, "User not found.");
        assert_eq!(store.backend().write_count(), 1);
    }

    #[test]
    fn commit_removes_only_first_identical_record() {
        let store = RecordStore::new(MemBackend::new());
        let dup = Record::new("Ana", 20, "ana@x.com");
        store.save(&[dup.clone(), dup.clone()]).unwrap();

        commit(&store, &dup).unwrap();
        assert_eq!(store.load().unwrap(), vec![dup]);
    }

    #[test]
    fn commit_of_vanished_record_does_not_write() {
        let store = two_anas();
        let result = commit(&store, &Record::new("Ana", 99, "ana@x.com")).unwrap();
        assert!(result.affected_records.is_empty());
        assert_eq!(store.backend().write_count(), 1);
    }
}
