//! # Startup
//!
//! [`initialize`] wires a ready-to-use [`ShelfApi`] from configuration:
//!
//! 1. Load [`ShelfConfig`] from the environment and `shelf.toml` in the OS
//!    config directory.
//! 2. Resolve the data directory (see [`resolve_data_dir`]).
//! 3. Open the [`ProductStore`] over an [`FsBackend`] rooted there and
//!    rehydrate the collection saved under `storage_key`.
//!
//! A malformed saved document does not stop startup. The session begins with
//! an empty collection and the problem is reported through
//! [`ShelfContext::warnings`]. The first successful write replaces the bad
//! document.

use crate::api::ShelfApi;
use crate::commands::CmdMessage;
use crate::config::ShelfConfig;
use crate::error::{Result, ShelfError};
use crate::store::fs_backend::FsBackend;
use crate::store::ProductStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub struct ShelfContext {
    pub api: ShelfApi<FsBackend>,
    pub config: ShelfConfig,
    pub data_dir: PathBuf,
    /// Problems found while loading that did not prevent startup.
    pub warnings: Vec<CmdMessage>,
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "shelf", "shelf")
}

/// The OS config directory holding `shelf.toml`, if the platform has one.
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Pick the data directory, first match wins:
/// 1. `data_override` (the `--data` flag)
/// 2. `data_dir` from config (file or `SHELF_DATA_DIR`)
/// 3. the OS data directory for shelf
pub fn resolve_data_dir(data_override: Option<PathBuf>, config: &ShelfConfig) -> Result<PathBuf> {
    if let Some(path) = data_override.or_else(|| config.data_dir.clone()) {
        return Ok(path);
    }
    project_dirs()
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ShelfError::Config("could not determine a data directory".to_string()))
}

pub fn initialize(data_override: Option<PathBuf>) -> Result<ShelfContext> {
    initialize_with(config_dir().as_deref(), data_override)
}

/// Like [`initialize`], reading `shelf.toml` from `config_dir` instead of the
/// OS location.
pub fn initialize_with(
    config_dir: Option<&Path>,
    data_override: Option<PathBuf>,
) -> Result<ShelfContext> {
    let config = ShelfConfig::load(config_dir)?;
    let data_dir = resolve_data_dir(data_override, &config)?;
    tracing::debug!(data_dir = %data_dir.display(), key = %config.storage_key, "initializing shelf");

    let opened = ProductStore::open(FsBackend::new(data_dir.clone()), config.storage_key.clone())?;
    let warnings = opened
        .warning
        .map(|err| {
            vec![CmdMessage::warning(format!(
                "{}; starting with an empty collection",
                err
            ))]
        })
        .unwrap_or_default();

    Ok(ShelfContext {
        api: ShelfApi::new(opened.store),
        config,
        data_dir,
        warnings,
    })
}
