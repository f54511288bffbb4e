use crate::config::UserbookConfig;
use crate::error::{Result, UserbookError};
use crate::model::{Record, Scope};
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod create;
pub mod helpers;
pub mod list;
pub mod paths;
pub mod remove;
pub mod search;

#[derive(Debug, Clone)]
pub struct UserbookPaths {
    pub project: Option<PathBuf>,
    /// `None` when no per-user data directory could be determined.
    pub global: Option<PathBuf>,
}

impl UserbookPaths {
    pub fn scope_dir(&self, scope: Scope) -> Result<PathBuf> {
        match scope {
            Scope::Project => self
                .project
                .clone()
                .ok_or_else(|| UserbookError::Store("Project scope is not available".to_string())),
            Scope::Global => self.global.clone().ok_or_else(|| {
                UserbookError::Store("Global scope is not available (no data directory)".to_string())
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_records: Vec<Record>,
    pub listed_records: Vec<Record>,
    pub paths: Vec<PathBuf>,
    pub config: Option<UserbookConfig>,
    /// The operation stopped without side effects (declined or invalid choice).
    pub cancelled: bool,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_records(mut self, records: Vec<Record>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_listed_records(mut self, records: Vec<Record>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = paths;
        self
    }

    pub fn with_config(mut self, config: UserbookConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn cancelled(message: impl Into<String>) -> Self {
        let mut result = Self {
            cancelled: true,
            ..Self::default()
        };
        result.add_message(CmdMessage::info(message));
        result
    }

    /// Whether any message was reported at error level.
    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}
