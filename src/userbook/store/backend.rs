use crate::error::Result;
use std::path::PathBuf;

/// Abstract interface for raw storage I/O of the backing file.
///
/// This trait handles where the bytes live (filesystem vs memory), while
/// `RecordStore` handles what they mean.
pub trait StorageBackend {
    /// Read the full content. Returns `Ok(None)` when the file does not exist.
    fn read(&self) -> Result<Option<String>>;

    /// Replace the full content.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write(&self, content: &str) -> Result<()>;

    /// Whether the backing file currently exists.
    fn exists(&self) -> bool;

    /// Location of the backing file. For `MemBackend`, a virtual path.
    fn location(&self) -> PathBuf;
}
