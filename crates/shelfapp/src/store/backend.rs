use crate::error::Result;

/// Abstract key-value storage the product store persists into.
///
/// The store serializes its whole collection into a single document and
/// hands it to the backend under a stable key. Backends only move strings;
/// they know nothing about products.
pub trait StorageBackend {
    /// Load the document saved under `key`.
    /// Returns Ok(None) when nothing was ever saved.
    /// Returns Err only on actual I/O errors (permissions, disk failure), or
    /// `MalformedState` when the stored bytes cannot be a document at all.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the document under `key`.
    /// MUST be atomic (e.g. write to tmp then rename) so a crash never leaves
    /// a half-written document behind.
    fn save(&self, key: &str, document: &str) -> Result<()>;
}

impl<B: StorageBackend + ?Sized> StorageBackend for &B {
    fn load(&self, key: &str) -> Result<Option<String>> {
        (**self).load(key)
    }

    fn save(&self, key: &str, document: &str) -> Result<()> {
        (**self).save(key, document)
    }
}
