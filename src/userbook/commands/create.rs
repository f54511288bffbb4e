use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::seed_records;
use crate::store::{RecordStore, StorageBackend};

/// Writes the seed dataset. An existing file is only replaced when
/// `overwrite_confirmed` is set; otherwise nothing is written.
pub fn run<B: StorageBackend>(
    store: &RecordStore<B>,
    overwrite_confirmed: bool,
) -> Result<CmdResult> {
    if store.exists() && !overwrite_confirmed {
        tracing::debug!("data file exists and overwrite was not confirmed");
        return Ok(CmdResult::cancelled("Operation cancelled."));
    }

    let records = seed_records();
    store.save(&records)?;

    let mut result = CmdResult::default().with_affected_records(records);
    result.add_message(CmdMessage::success(format!(
        "Data file created at {}",
        store.location().display()
    )));
    Ok(result)
}
