use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{RecordStore, StorageBackend};

use super::helpers::load_records;

pub fn run<B: StorageBackend>(store: &RecordStore<B>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let records = load_records(store, &mut result)?;
    if records.is_empty() {
        result.add_message(CmdMessage::info("No users registered."));
    }
    Ok(result.with_listed_records(records))
}
