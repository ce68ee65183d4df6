//! # Configuration
//!
//! Shelf configuration is managed by [`confique`], which handles layered
//! loading from a TOML file, environment variables and compiled defaults.
//!
//! ## Resolution Order
//!
//! 1. **Environment variables**: `SHELF_DATA_DIR`, `SHELF_STORAGE_KEY`.
//! 2. **Config file**: `shelf.toml` in the OS config directory
//!    (via the `directories` crate).
//! 3. **Compiled defaults**: `#[config(default = ...)]`.
//!
//! A `--data` override given to [`crate::init::initialize`] beats all three.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_dir` | OS data directory | Where the product document lives |
//! | `storage_key` | `root` | Key (file stem) the collection is saved under |

use crate::error::{Result, ShelfError};
use crate::store::snapshot::DEFAULT_STORAGE_KEY;
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "shelf.toml";

/// Configuration for shelf, stored in `shelf.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ShelfConfig {
    /// Directory holding the persisted product document.
    #[config(env = "SHELF_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Key the product collection is saved under.
    #[config(env = "SHELF_STORAGE_KEY", default = "root")]
    pub storage_key: String,
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl ShelfConfig {
    /// Load from the environment and, when given, `shelf.toml` in `config_dir`.
    /// A missing file is not an error.
    pub fn load(config_dir: Option<&Path>) -> Result<Self> {
        let mut builder = ShelfConfig::builder().env();
        if let Some(dir) = config_dir {
            builder = builder.file(dir.join(CONFIG_FILENAME));
        }
        builder
            .load()
            .map_err(|e| ShelfError::Config(e.to_string()))
    }
}
