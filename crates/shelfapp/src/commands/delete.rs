use crate::commands::{CmdMessage, CmdResult};
use crate::model::ProductId;
use crate::store::{ProductStore, StorageBackend};

/// Removes every listed product. Ids that are not present are skipped
/// without error, so a single-item delete and a "delete selected" batch go
/// through the same path.
pub fn run<B: StorageBackend>(store: &mut ProductStore<B>, ids: &[ProductId]) -> CmdResult {
    let removed_products: Vec<_> = store
        .list()
        .iter()
        .filter(|p| ids.contains(&p.id))
        .cloned()
        .collect();
    let commit = store.delete(ids);

    let mut result = CmdResult::default();
    for product in &removed_products {
        result.add_message(CmdMessage::success(format!(
            "Product deleted ({}): {}",
            product.id, product.name
        )));
    }
    if commit.value == 0 {
        result.add_message(CmdMessage::info("No matching products to delete"));
    }
    result.removed = commit.value;
    result.note_persist_error(commit.persist_error);
    result.with_affected_products(removed_products)
}
