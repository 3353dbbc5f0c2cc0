//! Type-safe price representation using decimal arithmetic.
//!
//! Catalog prices arrive as bare JSON numbers in pounds sterling; they are
//! held as [`Decimal`] so bag totals never pick up binary floating point
//! noise.

use core::fmt;

use rust_decimal::Decimal;

/// Symbol printed in front of every amount. The storefront only sells in
/// pounds sterling.
const CURRENCY_SYMBOL: &str = "£";

/// An amount in pounds sterling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Price(Decimal);

impl Price {
    /// Create a price from an amount in pounds (not pence).
    #[must_use]
    pub const fn gbp(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Format with exactly two decimal places (e.g. `£30.00`).
    ///
    /// Used for totals; catalog prices use [`Display`](fmt::Display), which
    /// prints the amount as listed.
    #[must_use]
    pub fn display_fixed(&self) -> String {
        format!("{CURRENCY_SYMBOL}{:.2}", self.0.round_dp(2))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{CURRENCY_SYMBOL}{}", self.0.normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prints_listed_amount() {
        assert_eq!(Price::gbp(Decimal::new(20, 0)).to_string(), "£20");
        assert_eq!(Price::gbp(Decimal::new(1999, 2)).to_string(), "£19.99");
        assert_eq!(Price::gbp(Decimal::new(1500, 2)).to_string(), "£15");
    }

    #[test]
    fn test_display_fixed_uses_two_decimals() {
        assert_eq!(Price::gbp(Decimal::new(30, 0)).display_fixed(), "£30.00");
        assert_eq!(Price::gbp(Decimal::new(4597, 2)).display_fixed(), "£45.97");
        assert_eq!(Price::gbp(Decimal::ZERO).display_fixed(), "£0.00");
    }
}
