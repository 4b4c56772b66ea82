//! Lossless Decimal <-> JSON number bridging
//!
//! JSON numbers are kept in their literal textual form (serde_json's
//! `arbitrary_precision` representation), so a stored `26.0` decodes back to
//! a `Decimal` with the same digits and re-encodes as `26.0`, not `26` or
//! `26.000000000000004`.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::Number;

/// Parse a decimal from its textual form.
///
/// Accepts plain notation (`"26.0"`, `"-3.5"`) and scientific notation
/// (`"2.8e3"`), since both are legal JSON number literals.
pub fn parse_decimal(text: &str) -> Result<Decimal, rust_decimal::Error> {
    let text = text.trim();
    if text.contains(['e', 'E']) {
        Decimal::from_scientific(text)
    } else {
        Decimal::from_str(text)
    }
}

/// Render a decimal as a JSON number without digit loss.
pub fn decimal_to_number(value: &Decimal) -> Number {
    // Decimal's Display output is always a valid JSON number literal
    Number::from_string_unchecked(value.to_string())
}

/// Recover a decimal from a JSON number.
pub fn number_to_decimal(number: &Number) -> Result<Decimal, rust_decimal::Error> {
    parse_decimal(&number.to_string())
}
