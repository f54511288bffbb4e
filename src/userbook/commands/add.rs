use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ValidationError};
use crate::model::Record;
use crate::store::{RecordStore, StorageBackend};
use crate::validation::validate_new_record;

use super::helpers::load_records;

/// Validates raw input against the current records.
///
/// The email uniqueness check is an exact, case-sensitive comparison.
pub fn validate(
    existing: &[Record],
    name: &str,
    age: &str,
    email: &str,
) -> std::result::Result<Record, ValidationError> {
    let record = validate_new_record(name, age, email)?;
    if existing.iter().any(|r| r.email == record.email) {
        return Err(ValidationError::DuplicateEmail(record.email));
    }
    Ok(record)
}

/// Appends a new record. Invalid input is reported as an error message and
/// leaves the store untouched.
pub fn run<B: StorageBackend>(
    store: &RecordStore<B>,
    name: &str,
    age: &str,
    email: &str,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut records = load_records(store, &mut result)?;

    let record = match validate(&records, name, age, email) {
        Ok(record) => record,
        Err(e) => {
            tracing::debug!(error = %e, "rejected new record");
            result.add_message(CmdMessage::error(e.to_string()));
            return Ok(result);
        }
    };

    records.push(record.clone());
    store.save(&records)?;

    result.add_message(CmdMessage::success(format!(
        "User added: {} ({})",
        record.name, record.email
    )));
    Ok(result.with_affected_records(vec![record]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;

    fn store_with_ana() -> RecordStore<MemBackend> {
        let store = RecordStore::new(MemBackend::new());
        store.save(&[Record::new("Ana", 20, "ana@x.com")]).unwrap();
        store
    }

    fn assert_rejected(store: &RecordStore<MemBackend>, result: &CmdResult, before: &[Record]) {
        assert!(result.has_errors());
        assert!(result.affected_records.is_empty());
        assert_eq!(store.load().unwrap(), before);
    }

    #[test]
    fn appends_valid_record() {
        let store = store_with_ana();
        let result = run(&store, "Bruno", "31", "bruno@x.com").unwrap();

        assert!(!result.has_errors());
        let records = store.load().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1], Record::new("Bruno", 31, "bruno@x.com"));
    }

    #[test]
    fn rejects_empty_name() {
        let store = store_with_ana();
        let before = store.load().unwrap();
        let result = run(&store, "", "25", "a@b.com").unwrap();
        assert_rejected(&store, &result, &before);
        assert_eq!(result.messages[0].content, "Name cannot be empty.");
    }

    #[test]
    fn rejects_age_out_of_range() {
        let store = store_with_ana();
        let before = store.load().unwrap();
        let result = run(&store, "X", "200", "a@b.com").unwrap();
        assert_rejected(&store, &result, &before);
    }

    #[test]
    fn rejects_bad_email() {
        let store = store_with_ana();
        let before = store.load().unwrap();
        let result = run(&store, "X", "25", "bad-email").unwrap();
        assert_rejected(&store, &result, &before);
    }

    #[test]
    fn rejects_duplicate_email() {
        let store = store_with_ana();
        let before = store.load().unwrap();
        let result = run(&store, "Other", "40", "ana@x.com").unwrap();
        assert_rejected(&store, &result, &before);
        assert_eq!(store.backend().write_count(), 1);
    }

    #[test]
    fn duplicate_check_is_case_sensitive() {
        let store = store_with_ana();
        let result = run(&store, "Other", "40", "ANA@x.com").unwrap();
        assert!(!result.has_errors());
        assert_eq!(store.load().unwrap().len(), 2);
    }

    #[test]
    fn adds_to_empty_store_after_corruption() {
        let store = RecordStore::new(MemBackend::with_content("not json"));
        let result = run(&store, "Ana", "20", "ana@x.com").unwrap();

        assert!(!result.has_errors());
        assert_eq!(
            result.messages[0].level,
            crate::commands::MessageLevel::Warning
        );
        assert_eq!(store.load().unwrap(), vec![Record::new("Ana", 20, "ana@x.com")]);
    }

    #[test]
    fn write_failure_propagates() {
        let store = store_with_ana();
        store.backend().set_simulate_write_error(true);
        assert!(run(&store, "Bruno", "31", "bruno@x.com").is_err());
    }

    #[test]
    fn unreadable_records_abort_without_writing() {
        let content = r#"[{"nome": "Ana", "idade": 20.0, "email": "ana@x.com"},
            {"nome": "Bia", "idade": "30", "email": "bia@x.com"}]"#;
        let store = RecordStore::new(MemBackend::with_content(content));

        assert!(run(&store, "Caio", "40", "caio@x.com").is_err());
        assert_eq!(store.backend().write_count(), 0);
        assert_eq!(store.backend().content().unwrap(), content);
    }
}
