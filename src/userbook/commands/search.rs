use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{RecordStore, StorageBackend};

use super::helpers::load_records;

/// Case-insensitive substring search over name and email, keeping stored order.
pub fn run<B: StorageBackend>(store: &RecordStore<B>, term: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let records = load_records(store, &mut result)?;
    let term_lower = term.trim().to_lowercase();

    let matches: Vec<_> = records
        .into_iter()
        .filter(|r| r.matches_term(&term_lower))
        .collect();

    if matches.is_empty() {
        result.add_message(CmdMessage::info("No users found."));
    }
    Ok(result.with_listed_records(matches))
}
