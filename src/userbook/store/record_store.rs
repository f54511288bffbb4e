use super::backend::StorageBackend;
use crate::error::{Result, UserbookError};
use crate::model::Record;
use serde::Serialize;
use std::path::PathBuf;

pub const DEFAULT_INDENT: usize = 4;

/// Result of reading the backing file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Loaded {
    pub records: Vec<Record>,
    /// The file existed but could not be decoded; `records` is empty.
    pub corrupt: bool,
}

/// Typed access to the record list on top of a raw [`StorageBackend`].
pub struct RecordStore<B: StorageBackend> {
    backend: B,
    indent: usize,
}

impl<B: StorageBackend> RecordStore<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            indent: DEFAULT_INDENT,
        }
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn exists(&self) -> bool {
        self.backend.exists()
    }

    pub fn location(&self) -> PathBuf {
        self.backend.location()
    }

    /// Reads the records, reporting whether the file was corrupt.
    ///
    /// Only content that is not JSON at all counts as corruption: a warning is
    /// logged and an empty list is returned. Valid JSON that is not a list of
    /// users is an error, so the file is never replaced by a later save.
    pub fn load_checked(&self) -> Result<Loaded> {
        let Some(content) = self.backend.read()? else {
            tracing::debug!(path = %self.location().display(), "no data file, starting empty");
            return Ok(Loaded::default());
        };

        let value: serde_json::Value = match serde_json::from_str(&content) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(
                    path = %self.location().display(),
                    error = %e,
                    "data file is corrupt, treating it as empty"
                );
                return Ok(Loaded {
                    records: Vec::new(),
                    corrupt: true,
                });
            }
        };

        let records: Vec<Record> =
            serde_json::from_value(value).map_err(|source| UserbookError::UnexpectedData {
                path: self.location(),
                source,
            })?;
        tracing::debug!(count = records.len(), "loaded records");
        Ok(Loaded {
            records,
            corrupt: false,
        })
    }

    pub fn load(&self) -> Result<Vec<Record>> {
        Ok(self.load_checked()?.records)
    }

    /// Overwrites the backing file with `records`.
    pub fn save(&self, records: &[Record]) -> Result<()> {
        let content = self.encode(records)?;
        self.backend.write(&content)?;
        tracing::debug!(count = records.len(), "saved records");
        Ok(())
    }

    fn encode(&self, records: &[Record]) -> Result<String> {
        let indent = " ".repeat(self.indent);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
        let mut buf = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        records
            .serialize(&mut serializer)
            .map_err(UserbookError::Serialization)?;
        String::from_utf8(buf).map_err(|e| UserbookError::Store(e.to_string()))
    }
}
