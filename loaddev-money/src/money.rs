//! MonetaryAmount value object

use std::fmt;

use rust_decimal::Decimal;

/// An exact amount of money in a single currency.
///
/// Immutable value object; equality is by amount and code. The currency is
/// never converted (component costs are recorded in whatever currency they
/// were paid in).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonetaryAmount {
    pub amount: Decimal,
    pub currency: String,
}

impl MonetaryAmount {
    pub fn new(amount: Decimal, currency: impl Into<String>) -> Self {
        MonetaryAmount { amount, currency: currency.into() }
    }
}

impl fmt::Display for MonetaryAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.currency, self.amount)
    }
}

/// Check that a code has the ISO-4217 alphabetic shape: exactly three ASCII
/// uppercase letters. Shape only - there is no currency table, since any
/// well-formed code must round-trip through the codec unchanged.
pub fn is_valid_currency(code: &str) -> bool {
    code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase())
}

/// True iff the amount is zero or more. Costs may be zero (free components)
/// but never negative.
pub fn is_non_negative(money: &MonetaryAmount) -> bool {
    money.amount >= Decimal::ZERO
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_currency_shape() {
        assert!(is_valid_currency("USD"));
        assert!(is_valid_currency("CAD"));
        assert!(is_valid_currency("XAU"));
        assert!(!is_valid_currency("usd"));
        assert!(!is_valid_currency("US"));
        assert!(!is_valid_currency("USDT"));
        assert!(!is_valid_currency("U5D"));
        assert!(!is_valid_currency(""));
    }

    #[test]
    fn test_non_negative() {
        assert!(is_non_negative(&MonetaryAmount::new(dec!(0), "USD")));
        assert!(is_non_negative(&MonetaryAmount::new(dec!(45.99), "USD")));
        assert!(!is_non_negative(&MonetaryAmount::new(dec!(-0.01), "USD")));
    }

    #[test]
    fn test_display() {
        let m = MonetaryAmount::new(dec!(45.99), "USD");
        assert_eq!(m.to_string(), "USD 45.99");
    }
}
