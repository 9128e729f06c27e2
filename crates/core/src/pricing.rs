//! Prices
//!
//! Catalog and order amounts are whole currency units (the retailer prices in
//! rupees without paisa), stored as `u64`. Conversion to [`Money`] is only
//! needed for display.

use rusty_money::{
    Money,
    iso::{self, Currency},
};
use thiserror::Error;

/// Currency every catalog price and order total is denominated in.
pub const STORE_CURRENCY: &Currency = iso::PKR;

/// Errors raised while turning a stored amount into [`Money`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PriceError {
    /// The amount does not fit the signed representation used by `rusty_money`.
    #[error("amount {0} is out of range")]
    OutOfRange(u64),

    /// The currency code is not a known ISO 4217 code.
    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),
}

/// Look up an ISO currency by its alpha code (e.g. `"PKR"`).
///
/// # Errors
///
/// Returns [`PriceError::UnknownCurrency`] for codes `rusty_money` does not know.
pub fn currency(code: &str) -> Result<&'static Currency, PriceError> {
    iso::find(code).ok_or_else(|| PriceError::UnknownCurrency(code.to_string()))
}

/// Convert a whole-unit amount into [`Money`] in the store currency.
///
/// # Errors
///
/// Returns [`PriceError::OutOfRange`] when the amount exceeds `i64::MAX`.
pub fn to_money(amount: u64) -> Result<Money<'static, Currency>, PriceError> {
    let major = i64::try_from(amount).map_err(|_overflow| PriceError::OutOfRange(amount))?;

    Ok(Money::from_major(major, STORE_CURRENCY))
}

/// Format a whole-unit amount for display, e.g. `₨25,000.00`.
///
/// # Errors
///
/// Returns [`PriceError::OutOfRange`] when the amount exceeds `i64::MAX`.
pub fn format_price(amount: u64) -> Result<String, PriceError> {
    Ok(to_money(amount)?.to_string())
}

/// Line total for `quantity` units at `price`, saturating instead of wrapping.
pub fn line_total(price: u64, quantity: u32) -> u64 {
    price.saturating_mul(u64::from(quantity))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn format_price_groups_thousands() -> TestResult {
        let formatted = format_price(25_000)?;

        assert!(
            formatted.contains("25,000"),
            "expected grouped digits, got {formatted}"
        );

        Ok(())
    }

    #[test]
    fn to_money_rejects_amounts_beyond_i64() {
        assert_eq!(to_money(u64::MAX), Err(PriceError::OutOfRange(u64::MAX)));
    }

    #[test]
    fn currency_lookup_is_case_sensitive_iso_code() -> TestResult {
        assert_eq!(currency("PKR")?.iso_alpha_code, "PKR");
        assert!(currency("rupees").is_err());

        Ok(())
    }

    #[test]
    fn line_total_multiplies_price_by_quantity() {
        assert_eq!(line_total(1_000, 2), 2_000);
        assert_eq!(line_total(u64::MAX, 2), u64::MAX);
    }
}
