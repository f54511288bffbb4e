//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for every userbook operation, whichever UI drives it.
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`, [`RemovalPlan`])
//!
//! It never prompts, prints, or formats. Interactive decisions (overwrite
//! confirmation, picking among same-named users) are made by the caller and
//! passed back in.
//!
//! `UserbookApi<B: StorageBackend>` is generic over the storage backend:
//! `FsBackend` in production, `MemBackend` in tests.

use crate::commands;
use crate::error::Result;
use crate::model::{Record, Scope};
use crate::store::{RecordStore, StorageBackend};

pub struct UserbookApi<B: StorageBackend> {
    store: RecordStore<B>,
    paths: commands::UserbookPaths,
}

impl<B: StorageBackend> UserbookApi<B> {
    pub fn new(store: RecordStore<B>, paths: commands::UserbookPaths) -> Self {
        Self { store, paths }
    }

    /// Whether the backing file exists, so callers know to ask before `create`.
    pub fn data_file_exists(&self) -> bool {
        self.store.exists()
    }

    pub fn create(&self, overwrite_confirmed: bool) -> Result<commands::CmdResult> {
        commands::create::run(&self.store, overwrite_confirmed)
    }

    pub fn add(&self, name: &str, age: &str, email: &str) -> Result<commands::CmdResult> {
        commands::add::run(&self.store, name, age, email)
    }

    pub fn list(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn search(&self, term: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, term)
    }

    pub fn plan_removal(&self, name: &str) -> Result<RemovalPlan> {
        commands::remove::plan(&self.store, name)
    }

    pub fn commit_removal(&self, target: &Record) -> Result<commands::CmdResult> {
        commands::remove::commit(&self.store, target)
    }

    pub fn remove<F>(&self, name: &str, decide: F) -> Result<commands::CmdResult>
    where
        F: FnOnce(&RemovalPlan) -> Result<Selection>,
    {
        commands::remove::run(&self.store, name, decide)
    }

    pub fn data_path(&self) -> Result<commands::CmdResult> {
        commands::paths::run(&self.store)
    }

    pub fn config(&self, scope: Scope, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, scope, action)
    }

    pub fn store(&self) -> &RecordStore<B> {
        &self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::remove::{CancelReason, RemovalPlan, Selection};
pub use commands::{CmdMessage, CmdResult, MessageLevel, UserbookPaths};
