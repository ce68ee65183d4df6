use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Product;
use crate::store::{ProductStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &mut ProductStore<B>, product: Product) -> Result<CmdResult> {
    let commit = store.create(product)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Product created ({}): {}",
        commit.value.id, commit.value.name
    )));
    result.note_persist_error(commit.persist_error);
    result.affected_products.push(commit.value);
    Ok(result)
}
