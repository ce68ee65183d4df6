use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::ProductId;
use crate::store::{ProductStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &ProductStore<B>, ids: &[ProductId]) -> Result<CmdResult> {
    let products = ids
        .iter()
        .map(|id| store.get(*id).cloned())
        .collect::<Result<Vec<_>>>()?;
    Ok(CmdResult::default().with_listed_products(products))
}
