use crate::api::{UserbookApi, UserbookPaths};
use crate::config::UserbookConfig;
use crate::error::{Result, UserbookError};
use crate::model::Scope;
use crate::store::fs_backend::FsBackend;
use crate::store::RecordStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Overrides the per-user data directory used by the global scope.
pub const GLOBAL_DATA_ENV: &str = "USERBOOK_GLOBAL_DATA";

pub struct UserbookContext {
    pub api: UserbookApi<FsBackend>,
    pub scope: Scope,
    pub config: UserbookConfig,
}

/// Resolves the global data directory: `$USERBOOK_GLOBAL_DATA`, then the
/// platform data dir.
pub fn global_data_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(GLOBAL_DATA_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "userbook", "userbook")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| UserbookError::Store("Could not determine a data directory".to_string()))
}

/// Builds the API for a scope. The backing file is `file_override` when
/// given, otherwise the configured data file inside the scope directory.
///
/// The global directory is only required when `use_global` is set.
pub fn initialize(
    cwd: &Path,
    use_global: bool,
    file_override: Option<PathBuf>,
) -> Result<UserbookContext> {
    let global = match global_data_dir() {
        Ok(dir) => Some(dir),
        Err(e) if !use_global => {
            tracing::debug!(error = %e, "no global data directory");
            None
        }
        Err(e) => return Err(e),
    };
    let paths = UserbookPaths {
        project: Some(cwd.to_path_buf()),
        global,
    };
    initialize_with_paths(paths, use_global, file_override)
}

pub fn initialize_with_paths(
    paths: UserbookPaths,
    use_global: bool,
    file_override: Option<PathBuf>,
) -> Result<UserbookContext> {
    let scope = if use_global {
        Scope::Global
    } else {
        Scope::Project
    };

    let scope_dir = paths.scope_dir(scope)?;
    let config = match UserbookConfig::load(&scope_dir) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "ignoring unreadable config, using defaults");
            UserbookConfig::default()
        }
    };

    let data_file = file_override.unwrap_or_else(|| scope_dir.join(&config.data_file));
    tracing::debug!(?scope, path = %data_file.display(), "using data file");

    let store = RecordStore::new(FsBackend::new(data_file)).with_indent(config.indent);
    let api = UserbookApi::new(store, paths);

    Ok(UserbookContext { api, scope, config })
}
