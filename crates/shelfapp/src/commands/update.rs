use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{ProductId, ProductPatch};
use crate::store::{ProductStore, StorageBackend};

pub fn run<B: StorageBackend>(
    store: &mut ProductStore<B>,
    id: ProductId,
    patch: &ProductPatch,
) -> Result<CmdResult> {
    let commit = store.update(id, patch)?;

    let mut result = CmdResult::default();
    if patch.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "Nothing to change ({}): {}",
            id, commit.value.name
        )));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Product updated ({}): {}",
            id, commit.value.name
        )));
    }
    result.note_persist_error(commit.persist_error);
    result.affected_products.push(commit.value);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{create, view};
    use crate::error::ShelfError;
    use crate::model::{Category, Product, ProductDraft};
    use crate::store::mem_backend::MemBackend;
    use crate::store::snapshot::DEFAULT_STORAGE_KEY;

    fn open(backend: &MemBackend) -> ProductStore<&MemBackend> {
        ProductStore::open(backend, DEFAULT_STORAGE_KEY).unwrap().store
    }

    #[test]
    fn updates_discount_and_reprices() {
        let backend = MemBackend::new();
        let mut store = open(&backend);
        let draft = ProductDraft::new("Milk", Category::Food)
            .with_sell_price("10".parse().unwrap())
            .with_discount("10".parse().unwrap());
        create::run(&mut store, Product::new(ProductId(1), draft)).unwrap();

        let patch = ProductPatch {
            discount: Some("50".parse().unwrap()),
            ..Default::default()
        };
        let result = run(&mut store, ProductId(1), &patch).unwrap();
        assert_eq!(result.messages[0].content, "Product updated (1): Milk");

        let viewed = view::run(&store, &[ProductId(1)]).unwrap();
        assert_eq!(
            viewed.listed_products[0]
                .discounted_sell_price()
                .to_string(),
            "5.00"
        );
    }

    #[test]
    fn empty_patch_reports_nothing_to_change() {
        let backend = MemBackend::new();
        let mut store = open(&backend);
        let draft = ProductDraft::new("Desk", Category::Furniture);
        create::run(&mut store, Product::new(ProductId(3), draft)).unwrap();

        let result = run(&mut store, ProductId(3), &ProductPatch::default()).unwrap();
        assert_eq!(result.messages[0].content, "Nothing to change (3): Desk");
    }

    #[test]
    fn missing_product_is_not_found() {
        let backend = MemBackend::new();
        let mut store = open(&backend);
        assert!(matches!(
            run(&mut store, ProductId(1), &ProductPatch::default()),
            Err(ShelfError::NotFound(ProductId(1)))
        ));
    }
}
