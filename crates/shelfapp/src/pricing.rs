//! # Pricing
//!
//! Derived price fields are never stored independently: they are recomputed
//! from `sell_price` and `discount` whenever a product is created, updated or
//! rehydrated, and on demand for live previews.
//!
//! ## Formula
//!
//! ```text
//! discounted_sell_price = round(sell_price - sell_price * discount / 100, 2)
//! final_price           = discounted_sell_price
//! ```
//!
//! ## Rounding
//!
//! Arithmetic is exact ([`rust_decimal::Decimal`]), so there is no binary
//! floating point drift. The result is rounded to [`PRICE_SCALE`] places with
//! round-half-up ([`RoundingStrategy::MidpointAwayFromZero`]): `1.005` becomes
//! `1.01`, `2.675` becomes `2.68`. The result always carries exactly two
//! decimal places, so it displays as currency (`9` is returned as `9.00`).
//!
//! ## Lenient Input
//!
//! [`derive_from_input`] accepts raw text as typed into a form. Absent, empty
//! or unparsable values count as zero, so a half-typed form still previews.
//!
//! Discounts are expected in `[0, 100]` but are not clamped: a discount above
//! 100 yields a negative price and a negative discount raises it.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::str::FromStr;

/// Number of decimal places every derived price carries.
pub const PRICE_SCALE: u32 = 2;

/// Rounding applied to derived prices.
pub const ROUNDING: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;

/// The derived pricing outputs of a product.
///
/// `final_price` equals `discounted_sell_price` today. They are separate
/// outputs so a later pricing step (taxes, surcharges) only has to change
/// [`derive`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PriceBreakdown {
    pub discounted_sell_price: Decimal,
    pub final_price: Decimal,
}

/// Computes the derived prices for a sell price and a discount percentage.
pub fn derive(sell_price: Decimal, discount: Decimal) -> PriceBreakdown {
    let discounted = round_price(apply_discount(sell_price, discount));
    PriceBreakdown {
        discounted_sell_price: discounted,
        final_price: discounted,
    }
}

/// Same as [`derive`], starting from raw form input.
pub fn derive_from_input(sell_price: Option<&str>, discount: Option<&str>) -> PriceBreakdown {
    derive(parse_lenient(sell_price), parse_lenient(discount))
}

/// Parses a decimal in plain (`12.5`) or scientific (`1.25e1`) notation.
pub fn parse_decimal(input: &str) -> Option<Decimal> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

/// Parses a decimal, falling back to zero when absent or unparsable.
pub fn parse_lenient(input: Option<&str>) -> Decimal {
    input.and_then(parse_decimal).unwrap_or(Decimal::ZERO)
}

/// Rounds to [`PRICE_SCALE`] places and pins the scale so `9` renders `9.00`.
pub fn round_price(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(PRICE_SCALE, ROUNDING);
    rounded.rescale(PRICE_SCALE);
    rounded
}

fn apply_discount(sell_price: Decimal, discount: Decimal) -> Decimal {
    // sell * (1 - d/100) is the same exact value as sell - sell * d / 100 and
    // cannot overflow for discounts in [0, 100].
    let factor = Decimal::ONE - discount / Decimal::ONE_HUNDRED;
    match sell_price.checked_mul(factor) {
        Some(value) => value,
        None if sell_price.is_sign_negative() != factor.is_sign_negative() => Decimal::MIN,
        None => Decimal::MAX,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn ten_percent_off_ten() {
        let prices = derive(d("10"), d("10"));
        assert_eq!(prices.discounted_sell_price, d("9.00"));
        assert_eq!(prices.final_price, d("9.00"));
        assert_eq!(prices.final_price.to_string(), "9.00");
    }

    #[test]
    fn no_discount_keeps_price() {
        let prices = derive(d("19.99"), Decimal::ZERO);
        assert_eq!(prices.discounted_sell_price.to_string(), "19.99");
    }

    #[test]
    fn full_discount_is_free() {
        let prices = derive(d("250"), d("100"));
        assert_eq!(prices.final_price.to_string(), "0.00");
    }

    #[test]
    fn rounds_half_up() {
        // 1.005 would be 1.00 with binary floats; exact decimals round up.
        assert_eq!(round_price(d("1.005")).to_string(), "1.01");
        assert_eq!(round_price(d("2.675")).to_string(), "2.68");
        assert_eq!(round_price(d("2.674")).to_string(), "2.67");
        // 33.33 * 0.85 = 28.3305
        assert_eq!(derive(d("33.33"), d("15")).final_price.to_string(), "28.33");
        // 0.15 * 0.5 = 0.075
        assert_eq!(derive(d("0.15"), d("50")).final_price.to_string(), "0.08");
    }

    #[test]
    fn out_of_range_discount_passes_through() {
        assert_eq!(derive_from_input(Some("10"), Some("150")).final_price.to_string(), "-5.00");
        assert_eq!(derive(d("10"), d("-10")).final_price.to_string(), "11.00");
    }

    #[test]
    fn fractional_discount() {
        // 100 * (1 - 0.125) = 87.5
        assert_eq!(derive(d("100"), d("12.5")).final_price.to_string(), "87.50");
    }

    #[test]
    fn lenient_input_defaults_to_zero() {
        assert_eq!(derive_from_input(None, None), derive(Decimal::ZERO, Decimal::ZERO));
        assert_eq!(
            derive_from_input(Some("10"), Some("")).final_price,
            d("10.00")
        );
        assert_eq!(
            derive_from_input(Some("10"), Some("abc")).final_price,
            d("10.00")
        );
        assert_eq!(
            derive_from_input(Some("oops"), Some("10")).final_price,
            d("0.00")
        );
    }

    #[test]
    fn parses_plain_and_scientific() {
        assert_eq!(parse_decimal(" 12.50 "), Some(d("12.50")));
        assert_eq!(parse_decimal("1.25e1"), Some(d("12.5")));
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("12,5"), None);
    }

    #[test]
    fn huge_values_saturate_instead_of_panicking() {
        let prices = derive(Decimal::MAX, d("-100"));
        assert_eq!(prices.final_price, round_price(Decimal::MAX));
    }

    proptest! {
        #[test]
        fn matches_rounded_formula(cents in 0i64..=10_000_000, discount_hundredths in 0i64..=10_000) {
            let sell = Decimal::new(cents, 2);
            let discount = Decimal::new(discount_hundredths, 2);
            let prices = derive(sell, discount);

            let expected = (sell - sell * discount / Decimal::ONE_HUNDRED)
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            prop_assert_eq!(prices.discounted_sell_price, expected);
            prop_assert_eq!(prices.final_price, prices.discounted_sell_price);
            prop_assert_eq!(prices.final_price.scale(), PRICE_SCALE);
            prop_assert!(prices.final_price <= sell);
            prop_assert!(prices.final_price >= Decimal::ZERO);
        }
    }
}
