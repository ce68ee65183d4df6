//! # Storage Layer
//!
//! The [`ProductStore`] is the single source of truth for the product
//! collection. It owns the ordered `Vec<Product>`, enforces id uniqueness,
//! derives prices before committing, and persists after every mutation.
//!
//! ## Store vs Backend
//!
//! Persistence is split in two:
//! 1. **What**: [`ProductStore`] decides what the state is and when it is
//!    written (after every committed create, update or delete).
//! 2. **How**: a [`StorageBackend`] moves one string document in and out of
//!    key-value storage. It knows nothing about products.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: Production storage, one `<key>.json` per key,
//!   written atomically (tmp file + rename).
//! - [`mem_backend::MemBackend`]: In-memory storage for testing, with
//!   simulated read/write failures.
//!
//! ## Write Failures
//!
//! The in-memory collection is authoritative for the running session. A failed
//! write does not roll the mutation back; it comes back as
//! [`Commit::persist_error`] and the next successful write brings the backend
//! up to date.
//!
//! ## Rehydration
//!
//! [`ProductStore::open`] loads the document under the storage key:
//! - absent → empty collection
//! - malformed (not UTF-8, bad JSON, unknown category, duplicate ids) → empty
//!   collection
//!   plus a [`crate::error::ShelfError::MalformedState`] warning
//! - backend read failure → error
//!
//! Derived prices are recomputed for every rehydrated product.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! └── root.json           # {"products": [...]}, key configurable
//! ```

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod product_store;
pub mod snapshot;

pub use backend::StorageBackend;
pub use product_store::{ChangeCallback, Commit, OpenedStore, ProductStore, Subscription};
