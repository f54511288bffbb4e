//! # Storage Layer
//!
//! Persistence for the record list is split in two:
//!
//! - [`backend::StorageBackend`]: raw text I/O for the backing file (the "how").
//!   [`fs_backend::FsBackend`] writes to disk, [`mem_backend::MemBackend`] keeps
//!   the text in memory for tests.
//! - [`record_store::RecordStore`]: JSON encoding, pretty-printing and the
//!   corrupt-file policy (the "what"). Commands only ever talk to this type.
//!
//! ## Storage Format
//!
//! ```text
//! usuarios.json        # JSON array of {"nome", "idade", "email"} objects
//! .userbook.json       # Scope configuration (see config.rs)
//! ```
//!
//! A missing backing file reads as an empty list. A file that does not parse
//! also reads as an empty list (with a warning) and is replaced by the next
//! save.

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod record_store;

pub use backend::StorageBackend;
pub use record_store::{Loaded, RecordStore};
