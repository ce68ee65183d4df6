//! Form validation for `add` and `edit`.
//!
//! Raw flag values come in as strings and leave as a [`ProductDraft`] or a
//! [`ProductPatch`]. The store never sees unvalidated input.
//!
//! The discount is the one lenient field: missing or unreadable means 0, and
//! a value outside `[0, 100]` is passed through unchanged.

use super::setup::ProductFields;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use shelfapp::error::{Result, ShelfError};
use shelfapp::model::{Category, ProductDraft, ProductPatch};
use shelfapp::pricing;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A complete new product. Everything but description and discount is required.
pub fn parse_draft(fields: &ProductFields, today: NaiveDate) -> Result<ProductDraft> {
    let name = required("name", fields.name.as_deref())?;
    let category: Category = required("category", fields.category.as_deref())?.parse()?;
    let cost_price = parse_price("cost price", required("cost price", fields.cost_price.as_deref())?)?;
    let sell_price = parse_price("sell price", required("sell price", fields.sell_price.as_deref())?)?;
    let expiry_date = parse_expiry(required("expiry date", fields.expiry_date.as_deref())?, today)?;

    let mut draft = ProductDraft::new(name, category)
        .with_cost_price(cost_price)
        .with_sell_price(sell_price)
        .with_discount(pricing::parse_lenient(fields.discount.as_deref()))
        .with_expiry_date(expiry_date);
    draft.description = description(fields.description.as_deref());
    Ok(draft)
}

/// Only the flags that were given. Each is validated the same way as in
/// [`parse_draft`].
pub fn parse_patch(fields: &ProductFields, today: NaiveDate) -> Result<ProductPatch> {
    let mut patch = ProductPatch::default();

    if let Some(name) = fields.name.as_deref() {
        patch.name = Some(required("name", Some(name))?.to_string());
    }
    if let Some(category) = fields.category.as_deref() {
        patch.category = Some(category.parse()?);
    }
    if let Some(text) = fields.description.as_deref() {
        patch.description = Some(description(Some(text)));
    }
    if let Some(expiry) = fields.expiry_date.as_deref() {
        patch.expiry_date = Some(Some(parse_expiry(expiry, today)?));
    }
    if let Some(cost) = fields.cost_price.as_deref() {
        patch.cost_price = Some(parse_price("cost price", cost)?);
    }
    if let Some(sell) = fields.sell_price.as_deref() {
        patch.sell_price = Some(parse_price("sell price", sell)?);
    }
    if let Some(discount) = fields.discount.as_deref() {
        patch.discount = Some(pricing::parse_lenient(Some(discount)));
    }

    Ok(patch)
}

fn required<'a>(field: &'static str, value: Option<&'a str>) -> Result<&'a str> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ShelfError::validation(field, "is required")),
    }
}

fn parse_price(field: &'static str, input: &str) -> Result<Decimal> {
    let price = pricing::parse_decimal(input)
        .ok_or_else(|| ShelfError::validation(field, format!("'{}' is not a number", input.trim())))?;
    if price.is_sign_negative() && !price.is_zero() {
        return Err(ShelfError::validation(field, "must not be negative"));
    }
    Ok(price)
}

fn parse_expiry(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    let date = NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|_| {
        ShelfError::validation(
            "expiry date",
            format!("'{}' is not a date (expected YYYY-MM-DD)", input.trim()),
        )
    })?;
    if date < today {
        return Err(ShelfError::validation(
            "expiry date",
            format!("{} is before today ({})", date, today),
        ));
    }
    Ok(date)
}

fn description(input: Option<&str>) -> Option<String> {
    input
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
