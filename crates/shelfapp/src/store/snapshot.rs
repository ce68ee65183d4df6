//! The persisted document: the whole ordered collection as one JSON object.
//!
//! ```json
//! {
//!   "products": [
//!     { "id": 1700000000000, "name": "Milk", "category": "Food", ... }
//!   ]
//! }
//! ```

use crate::error::{Result, ShelfError};
use crate::model::Product;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const DEFAULT_STORAGE_KEY: &str = "root";

#[derive(Serialize)]
struct PersistedStateRef<'a> {
    products: &'a [Product],
}

#[derive(Deserialize)]
struct PersistedState {
    products: Vec<Product>,
}

pub fn encode(products: &[Product]) -> Result<String> {
    serde_json::to_string_pretty(&PersistedStateRef { products }).map_err(ShelfError::Serialization)
}

/// Parses a saved document and re-derives every product's prices.
///
/// Anything that is not a well-formed collection with unique ids is
/// `MalformedState`.
pub fn decode(key: &str, document: &str) -> Result<Vec<Product>> {
    let malformed = |reason: String| ShelfError::MalformedState {
        key: key.to_string(),
        reason,
    };

    let state: PersistedState =
        serde_json::from_str(document).map_err(|e| malformed(e.to_string()))?;

    let mut seen = HashSet::with_capacity(state.products.len());
    for product in &state.products {
        if !seen.insert(product.id) {
            return Err(malformed(format!("duplicate product id {}", product.id)));
        }
    }

    let mut products = state.products;
    for product in &mut products {
        product.reprice();
    }
    Ok(products)
}
