use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Record;
use crate::store::{RecordStore, StorageBackend};

pub const CORRUPT_FILE_MESSAGE: &str =
    "Data file is corrupt; starting from an empty list. It will be replaced on the next save.";

/// Loads the records, noting a corrupt backing file on `result`.
pub fn load_records<B: StorageBackend>(
    store: &RecordStore<B>,
    result: &mut CmdResult,
) -> Result<Vec<Record>> {
    let loaded = store.load_checked()?;
    if loaded.corrupt {
        result.add_message(CmdMessage::warning(CORRUPT_FILE_MESSAGE));
    }
    Ok(loaded.records)
}

/// Whether a yes/no answer means yes.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
