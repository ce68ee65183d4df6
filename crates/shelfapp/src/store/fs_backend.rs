use super::backend::StorageBackend;
use crate::error::{Result, ShelfError};
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

/// File-backed storage: one `<key>.json` file per key inside a data directory.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn document_path(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(format!("{}.json", key)))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(ShelfError::Io)?;
        }
        Ok(())
    }
}

fn validate_key(key: &str) -> Result<()> {
    let usable = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.');
    if usable {
        Ok(())
    } else {
        Err(ShelfError::Persistence(format!(
            "Storage key '{}' cannot be used as a file name",
            key
        )))
    }
}

impl StorageBackend for FsBackend {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let path = self.document_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let bytes = fs::read(path).map_err(ShelfError::Io)?;
        // Undecodable bytes are a bad document, not a failing disk.
        let content = String::from_utf8(bytes).map_err(|e| ShelfError::MalformedState {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Some(content))
    }

    fn save(&self, key: &str, document: &str) -> Result<()> {
        let target = self.document_path(key)?;
        self.ensure_dir()?;

        // Atomic write
        let tmp = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp, document).map_err(ShelfError::Io)?;
        if let Err(e) = fs::rename(&tmp, &target) {
            let _ = fs::remove_file(&tmp);
            return Err(ShelfError::Io(e));
        }
        Ok(())
    }
}
