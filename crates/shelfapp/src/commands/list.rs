use crate::commands::CmdResult;
use crate::store::{ProductStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &ProductStore<B>) -> CmdResult {
    CmdResult::default().with_listed_products(store.list().to_vec())
}
