use crate::commands::CmdResult;
use crate::pricing;

/// Derived prices for form input that has not been submitted. Never touches
/// the store.
pub fn run(sell_price: Option<&str>, discount: Option<&str>) -> CmdResult {
    CmdResult::default().with_preview(pricing::derive_from_input(sell_price, discount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn previews_partial_input() {
        let preview = run(Some("80"), Some("25")).preview.unwrap();
        assert_eq!(preview.discounted_sell_price.to_string(), "60.00");
        assert_eq!(preview.final_price.to_string(), "60.00");

        let preview = run(Some("80"), None).preview.unwrap();
        assert_eq!(preview.final_price.to_string(), "80.00");

        let preview = run(None, Some("25")).preview.unwrap();
        assert_eq!(preview.final_price.to_string(), "0.00");
    }
}
