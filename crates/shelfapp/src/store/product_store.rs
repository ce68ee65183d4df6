use super::backend::StorageBackend;
use super::snapshot;
use crate::error::{Result, ShelfError};
use crate::model::{Product, ProductId, ProductPatch};
use std::collections::HashSet;

/// Callback invoked with the committed collection after every mutation.
pub type ChangeCallback = Box<dyn FnMut(&[Product])>;

/// Handle returned by [`ProductStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

/// Outcome of a committed mutation.
///
/// The in-memory change always stands. `persist_error` is set when the
/// following write to the backend failed; the session keeps working from
/// memory and the next successful write catches the backend up.
#[derive(Debug)]
pub struct Commit<T> {
    pub value: T,
    pub persist_error: Option<ShelfError>,
}

impl<T> Commit<T> {
    pub fn is_persisted(&self) -> bool {
        self.persist_error.is_none()
    }

    pub fn into_value(self) -> T {
        self.value
    }
}

/// A freshly opened store plus the warning raised while rehydrating, if any.
pub struct OpenedStore<B: StorageBackend> {
    pub store: ProductStore<B>,
    pub warning: Option<ShelfError>,
}

/// The single owner of the product collection.
///
/// Every mutation takes `&mut self` and runs to completion: validate, derive
/// prices, commit in memory, write the full snapshot to the backend, notify
/// observers. Reads hand out borrowed snapshots.
pub struct ProductStore<B: StorageBackend> {
    backend: B,
    key: String,
    products: Vec<Product>,
    observers: Vec<(Subscription, ChangeCallback)>,
    next_subscription: u64,
}

impl<B: StorageBackend> ProductStore<B> {
    /// Rehydrate the collection saved under `key`.
    ///
    /// A missing document gives an empty store. A malformed one also gives an
    /// empty store, with the `MalformedState` error returned as a warning.
    /// Only a failing backend read is an error.
    pub fn open(backend: B, key: impl Into<String>) -> Result<OpenedStore<B>> {
        let key = key.into();
        let decoded = match backend.load(&key) {
            Ok(None) => Ok(Vec::new()),
            Ok(Some(document)) => snapshot::decode(&key, &document),
            Err(err @ ShelfError::MalformedState { .. }) => Err(err),
            Err(err) => return Err(err),
        };
        let (products, warning) = match decoded {
            Ok(products) => (products, None),
            Err(err) => {
                tracing::warn!(key = %key, error = %err, "discarding malformed product state");
                (Vec::new(), Some(err))
            }
        };
        tracing::debug!(key = %key, products = products.len(), "product store opened");

        Ok(OpenedStore {
            store: Self {
                backend,
                key,
                products,
                observers: Vec::new(),
                next_subscription: 0,
            },
            warning,
        })
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// The full ordered collection.
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: ProductId) -> Result<&Product> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or(ShelfError::NotFound(id))
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.products.iter().any(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Append a new product. Its id must not be in use.
    pub fn create(&mut self, mut product: Product) -> Result<Commit<Product>> {
        if self.contains(product.id) {
            return Err(ShelfError::DuplicateId(product.id));
        }
        product.reprice();
        self.products.push(product.clone());
        tracing::debug!(id = %product.id, "product created");

        let persist_error = self.commit();
        Ok(Commit {
            value: product,
            persist_error,
        })
    }

    /// Merge `patch` into the product with `id`, keeping its position.
    pub fn update(&mut self, id: ProductId, patch: &ProductPatch) -> Result<Commit<Product>> {
        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(ShelfError::NotFound(id))?;
        patch.apply_to(product);
        let updated = product.clone();
        tracing::debug!(id = %id, "product updated");

        let persist_error = self.commit();
        Ok(Commit {
            value: updated,
            persist_error,
        })
    }

    /// Remove every product whose id is in `ids`. Unknown ids are ignored.
    /// The value is the number of products removed.
    pub fn delete(&mut self, ids: &[ProductId]) -> Commit<usize> {
        let doomed: HashSet<ProductId> = ids.iter().copied().collect();
        let before = self.products.len();
        self.products.retain(|p| !doomed.contains(&p.id));
        let removed = before - self.products.len();
        tracing::debug!(requested = doomed.len(), removed, "products deleted");

        let persist_error = self.commit();
        Commit {
            value: removed,
            persist_error,
        }
    }

    /// Register `callback` to receive the collection after every mutation.
    pub fn subscribe(&mut self, callback: impl FnMut(&[Product]) + 'static) -> Subscription {
        let subscription = Subscription(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((subscription, Box::new(callback)));
        subscription
    }

    /// Returns false if the subscription was already gone.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(s, _)| *s != subscription);
        self.observers.len() != before
    }

    /// Write the committed collection, then notify observers.
    fn commit(&mut self) -> Option<ShelfError> {
        let persist_error = self.persist().err();
        if let Some(err) = &persist_error {
            tracing::warn!(key = %self.key, error = %err, "failed to persist products; keeping in-memory state");
        }
        for (_, callback) in self.observers.iter_mut() {
            callback(&self.products);
        }
        persist_error
    }

    fn persist(&self) -> Result<()> {
        let document = snapshot::encode(&self.products)?;
        self.backend.save(&self.key, &document)
    }
}
