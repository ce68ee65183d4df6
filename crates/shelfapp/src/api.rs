//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the
//! single entry point for every shelf operation, whatever the UI.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Assigns ids** for new products (creation timestamp in milliseconds)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no business logic, no I/O and no presentation.
//!
//! ## Id Assignment
//!
//! New products get `now` in milliseconds as their id. When that id is already
//! taken (two creates within the same millisecond, or a clock that went
//! backwards) the next free id above it is used. Callers that need a specific
//! id use [`ShelfApi::create_product_with_id`], which fails on duplicates.
//!
//! ## Generic Over StorageBackend
//!
//! `ShelfApi<B: StorageBackend>` is generic over the storage backend:
//! - Production: `ShelfApi<FsBackend>`
//! - Testing: `ShelfApi<MemBackend>`

use crate::commands::{self, CmdResult};
use crate::error::{Result, ShelfError};
use crate::model::{Product, ProductDraft, ProductId, ProductPatch};
use crate::store::{ProductStore, StorageBackend, Subscription};
use chrono::{DateTime, Utc};

/// The main API facade for shelf operations.
///
/// Owns the store for the lifetime of the application. All UI clients
/// interact through this API.
pub struct ShelfApi<B: StorageBackend> {
    store: ProductStore<B>,
}

impl<B: StorageBackend> ShelfApi<B> {
    pub fn new(store: ProductStore<B>) -> Self {
        Self { store }
    }

    pub fn create_product(&mut self, draft: ProductDraft) -> Result<CmdResult> {
        let id = self.next_product_id(Utc::now())?;
        self.create_product_with_id(id, draft)
    }

    pub fn create_product_with_id(
        &mut self,
        id: ProductId,
        draft: ProductDraft,
    ) -> Result<CmdResult> {
        commands::create::run(&mut self.store, Product::new(id, draft))
    }

    pub fn update_product(&mut self, id: ProductId, patch: &ProductPatch) -> Result<CmdResult> {
        commands::update::run(&mut self.store, id, patch)
    }

    pub fn delete_products(&mut self, ids: &[ProductId]) -> CmdResult {
        commands::delete::run(&mut self.store, ids)
    }

    pub fn list_products(&self) -> CmdResult {
        commands::list::run(&self.store)
    }

    pub fn view_products(&self, ids: &[ProductId]) -> Result<CmdResult> {
        commands::view::run(&self.store, ids)
    }

    pub fn preview_pricing(&self, sell_price: Option<&str>, discount: Option<&str>) -> CmdResult {
        commands::preview::run(sell_price, discount)
    }

    /// Receive the committed collection after every mutation.
    pub fn on_change(&mut self, callback: impl FnMut(&[Product]) + 'static) -> Subscription {
        self.store.subscribe(callback)
    }

    pub fn remove_listener(&mut self, subscription: Subscription) -> bool {
        self.store.unsubscribe(subscription)
    }

    /// First unused id at or after `now`.
    pub fn next_product_id(&self, now: DateTime<Utc>) -> Result<ProductId> {
        self.next_free_id(ProductId::from_timestamp(now))
    }

    /// First unused id at or after `start`. Fails with `DuplicateId` when
    /// every id from `start` up to `i64::MAX` is taken.
    pub fn next_free_id(&self, start: ProductId) -> Result<ProductId> {
        let mut id = start;
        while self.store.contains(id) {
            id = id.next().ok_or(ShelfError::DuplicateId(id))?;
        }
        Ok(id)
    }

    pub fn store(&self) -> &ProductStore<B> {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use crate::store::mem_backend::MemBackend;
    use crate::store::snapshot::DEFAULT_STORAGE_KEY;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn api() -> ShelfApi<MemBackend> {
        ShelfApi::new(
            ProductStore::open(MemBackend::new(), DEFAULT_STORAGE_KEY)
                .unwrap()
                .store,
        )
    }

    #[test]
    fn create_assigns_timestamp_ids() {
        let mut api = api();
        let before = Utc::now().timestamp_millis();
        let result = api
            .create_product(ProductDraft::new("Tea", Category::Food))
            .unwrap();
        let id = result.affected_products[0].id;
        assert!(id.0 >= before);
        assert!(api.store().contains(id));
    }

    #[test]
    fn rapid_creates_never_collide() {
        let mut api = api();
        for _ in 0..50 {
            api.create_product(ProductDraft::new("Tea", Category::Food))
                .unwrap();
        }
        assert_eq!(api.list_products().listed_products.len(), 50);
    }

    #[test]
    fn next_id_skips_taken_ids() {
        let mut api = api();
        let now = DateTime::from_timestamp_millis(1_000).unwrap();
        api.create_product_with_id(ProductId(1_000), ProductDraft::new("A", Category::Food))
            .unwrap();
        api.create_product_with_id(ProductId(1_001), ProductDraft::new("B", Category::Food))
            .unwrap();
        assert_eq!(api.next_product_id(now).unwrap(), ProductId(1_002));
    }

    #[test]
    fn next_id_fails_when_range_is_exhausted() {
        let mut api = api();
        let last = ProductId(i64::MAX);
        api.create_product_with_id(last, ProductDraft::new("Z", Category::Food))
            .unwrap();

        assert!(matches!(
            api.next_free_id(last),
            Err(ShelfError::DuplicateId(id)) if id == last
        ));
        assert_eq!(
            api.next_free_id(ProductId(i64::MAX - 1)).unwrap(),
            ProductId(i64::MAX - 1)
        );
    }

    #[test]
    fn explicit_duplicate_id_fails() {
        let mut api = api();
        let draft = ProductDraft::new("A", Category::Food);
        api.create_product_with_id(ProductId(1), draft.clone())
            .unwrap();
        assert!(matches!(
            api.create_product_with_id(ProductId(1), draft),
            Err(ShelfError::DuplicateId(_))
        ));
    }

    #[test]
    fn dispatches_update_view_delete() {
        let mut api = api();
        api.create_product_with_id(ProductId(1), ProductDraft::new("A", Category::Food))
            .unwrap();
        let patch = ProductPatch {
            sell_price: Some("4".parse().unwrap()),
            ..Default::default()
        };
        api.update_product(ProductId(1), &patch).unwrap();

        let viewed = api.view_products(&[ProductId(1)]).unwrap();
        assert_eq!(viewed.listed_products[0].final_price().to_string(), "4.00");

        assert_eq!(api.delete_products(&[ProductId(1), ProductId(2)]).removed, 1);
        assert!(api.list_products().listed_products.is_empty());
    }

    #[test]
    fn preview_does_not_touch_store() {
        let api = api();
        let result = api.preview_pricing(Some("10"), Some("10"));
        assert_eq!(result.preview.unwrap().final_price.to_string(), "9.00");
        assert!(api.store().is_empty());
        assert_eq!(api.store().backend().save_count(), 0);
    }

    #[test]
    fn listeners_follow_mutations() {
        let mut api = api();
        let sizes = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&sizes);
        let subscription = api.on_change(move |products| sink.borrow_mut().push(products.len()));

        api.create_product_with_id(ProductId(1), ProductDraft::new("A", Category::Food))
            .unwrap();
        api.delete_products(&[ProductId(1)]);
        assert_eq!(*sizes.borrow(), vec![1, 0]);

        assert!(api.remove_listener(subscription));
    }
}
