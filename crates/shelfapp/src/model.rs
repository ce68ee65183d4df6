use crate::error::{Result, ShelfError};
use crate::pricing;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identity of a product.
///
/// Assigned by the caller at creation time, conventionally the creation
/// timestamp in milliseconds. Immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl ProductId {
    pub fn from_timestamp(at: DateTime<Utc>) -> Self {
        Self(at.timestamp_millis())
    }

    /// The id right after this one, or `None` at `i64::MAX`.
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<i64>()
            .map(ProductId)
            .map_err(|_| ShelfError::validation("id", format!("'{}' is not a product id", s)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Clothing,
    Electronics,
    Furniture,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Food,
        Category::Clothing,
        Category::Electronics,
        Category::Furniture,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Clothing => "Clothing",
            Category::Electronics => "Electronics",
            Category::Furniture => "Furniture",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ShelfError;

    /// Case-insensitive match against the fixed category set.
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                let names: Vec<_> = Category::ALL.iter().map(Category::as_str).collect();
                ShelfError::validation(
                    "category",
                    format!("'{}' is not one of {}", wanted, names.join(", ")),
                )
            })
    }
}

/// The editable fields of a product, as submitted by a form.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub category: Category,
    pub description: Option<String>,
    pub expiry_date: Option<NaiveDate>,
    pub cost_price: Decimal,
    pub sell_price: Decimal,
    pub discount: Decimal,
}

impl ProductDraft {
    pub fn new(name: impl Into<String>, category: Category) -> Self {
        Self {
            name: name.into(),
            category,
            description: None,
            expiry_date: None,
            cost_price: Decimal::ZERO,
            sell_price: Decimal::ZERO,
            discount: Decimal::ZERO,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_expiry_date(mut self, date: NaiveDate) -> Self {
        self.expiry_date = Some(date);
        self
    }

    pub fn with_cost_price(mut self, price: Decimal) -> Self {
        self.cost_price = price;
        self
    }

    pub fn with_sell_price(mut self, price: Decimal) -> Self {
        self.sell_price = price;
        self
    }

    pub fn with_discount(mut self, discount: Decimal) -> Self {
        self.discount = discount;
        self
    }
}

/// A product record.
///
/// `discounted_sell_price` and `final_price` are derived from `sell_price`
/// and `discount` and have no setters. The store re-derives them on every
/// create, update and rehydration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub expiry_date: Option<NaiveDate>,
    pub cost_price: Decimal,
    pub sell_price: Decimal,
    #[serde(default)]
    pub discount: Decimal,
    #[serde(default)]
    discounted_sell_price: Decimal,
    #[serde(default)]
    final_price: Decimal,
}

impl Product {
    pub fn new(id: ProductId, draft: ProductDraft) -> Self {
        let mut product = Self {
            id,
            name: draft.name,
            category: draft.category,
            description: draft.description,
            expiry_date: draft.expiry_date,
            cost_price: draft.cost_price,
            sell_price: draft.sell_price,
            discount: draft.discount,
            discounted_sell_price: Decimal::ZERO,
            final_price: Decimal::ZERO,
        };
        product.reprice();
        product
    }

    pub fn discounted_sell_price(&self) -> Decimal {
        self.discounted_sell_price
    }

    pub fn final_price(&self) -> Decimal {
        self.final_price
    }

    /// The editable fields, e.g. to prefill an edit form.
    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            category: self.category,
            description: self.description.clone(),
            expiry_date: self.expiry_date,
            cost_price: self.cost_price,
            sell_price: self.sell_price,
            discount: self.discount,
        }
    }

    pub(crate) fn reprice(&mut self) {
        let prices = pricing::derive(self.sell_price, self.discount);
        self.discounted_sell_price = prices.discounted_sell_price;
        self.final_price = prices.final_price;
    }
}

/// A full or partial set of field replacements for an existing product.
///
/// `None` leaves a field untouched. For the optional fields, `Some(None)`
/// clears the value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub category: Option<Category>,
    pub description: Option<Option<String>>,
    pub expiry_date: Option<Option<NaiveDate>>,
    pub cost_price: Option<Decimal>,
    pub sell_price: Option<Decimal>,
    pub discount: Option<Decimal>,
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn touches_pricing(&self) -> bool {
        self.sell_price.is_some() || self.discount.is_some()
    }

    pub(crate) fn apply_to(&self, product: &mut Product) {
        if let Some(name) = &self.name {
            product.name = name.clone();
        }
        if let Some(category) = self.category {
            product.category = category;
        }
        if let Some(description) = &self.description {
            product.description = description.clone();
        }
        if let Some(expiry_date) = self.expiry_date {
            product.expiry_date = expiry_date;
        }
        if let Some(cost_price) = self.cost_price {
            product.cost_price = cost_price;
        }
        if let Some(sell_price) = self.sell_price {
            product.sell_price = sell_price;
        }
        if let Some(discount) = self.discount {
            product.discount = discount;
        }
        product.reprice();
    }
}

impl From<ProductDraft> for ProductPatch {
    fn from(draft: ProductDraft) -> Self {
        Self {
            name: Some(draft.name),
            category: Some(draft.category),
            description: Some(draft.description),
            expiry_date: Some(draft.expiry_date),
            cost_price: Some(draft.cost_price),
            sell_price: Some(draft.sell_price),
            discount: Some(draft.discount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn milk() -> Product {
        Product::new(
            ProductId(1),
            ProductDraft::new("Milk", Category::Food)
                .with_sell_price(d("10"))
                .with_discount(d("10")),
        )
    }

    #[test]
    fn new_product_is_priced() {
        let product = milk();
        assert_eq!(product.discounted_sell_price(), d("9.00"));
        assert_eq!(product.final_price(), d("9.00"));
    }

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!("food".parse::<Category>().unwrap(), Category::Food);
        assert_eq!(" Electronics ".parse::<Category>().unwrap(), Category::Electronics);
        let err = "Toys".parse::<Category>().unwrap_err();
        assert!(err.to_string().contains("Food, Clothing, Electronics, Furniture"));
    }

    #[test]
    fn product_id_parsing() {
        assert_eq!("1700000000000".parse::<ProductId>().unwrap(), ProductId(1_700_000_000_000));
        assert!("p1".parse::<ProductId>().is_err());
    }

    #[test]
    fn next_id_stops_at_the_end_of_the_range() {
        assert_eq!(ProductId(7).next(), Some(ProductId(8)));
        assert_eq!(ProductId(i64::MAX).next(), None);
    }

    #[test]
    fn id_from_timestamp_uses_millis() {
        let at = DateTime::from_timestamp_millis(1_700_000_000_123).unwrap();
        assert_eq!(ProductId::from_timestamp(at), ProductId(1_700_000_000_123));
    }

    #[test]
    fn patch_reprices_and_keeps_untouched_fields() {
        let mut product = milk();
        let patch = ProductPatch {
            discount: Some(d("50")),
            ..Default::default()
        };
        assert!(patch.touches_pricing());
        patch.apply_to(&mut product);
        assert_eq!(product.name, "Milk");
        assert_eq!(product.final_price(), d("5.00"));
    }

    #[test]
    fn patch_can_clear_optional_fields() {
        let mut product = Product::new(
            ProductId(2),
            ProductDraft::new("Chair", Category::Furniture).with_description("Oak"),
        );
        let patch = ProductPatch {
            description: Some(None),
            ..Default::default()
        };
        patch.apply_to(&mut product);
        assert_eq!(product.description, None);
    }

    #[test]
    fn full_patch_from_draft() {
        let patch = ProductPatch::from(milk().to_draft());
        assert!(!patch.is_empty());
        assert!(ProductPatch::default().is_empty());
    }

    #[test]
    fn serializes_prices_as_strings() {
        let json = serde_json::to_value(milk()).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["category"], "Food");
        assert_eq!(json["final_price"], "9.00");
        assert!(json.get("description").is_none());
    }
}
