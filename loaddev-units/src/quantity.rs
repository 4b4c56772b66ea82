//! Quantity type - a decimal value tagged with a unit and a scale

use std::fmt;

use rust_decimal::Decimal;

use crate::unit::{convert, UnitError};
use crate::{Dimension, Unit};

/// Measurement scale metadata carried on every quantity.
///
/// The wire format always includes it and round-trips it verbatim, but
/// nothing in conversion or aggregation reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scale {
    Absolute,
    Relative,
}

impl Scale {
    /// The wire literal for this scale.
    pub fn as_str(&self) -> &'static str {
        match self {
            Scale::Absolute => "ABSOLUTE",
            Scale::Relative => "RELATIVE",
        }
    }

    /// Parse a wire literal.
    pub fn parse(text: &str) -> Option<Scale> {
        match text {
            "ABSOLUTE" => Some(Scale::Absolute),
            "RELATIVE" => Some(Scale::Relative),
            _ => None,
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A physical quantity: a decimal value with a unit and scale.
///
/// Immutable value object; conversion returns a new instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantity {
    pub value: Decimal,
    pub unit: Unit,
    pub scale: Scale,
}

impl Quantity {
    /// Create an absolute-scale quantity.
    pub fn new(value: Decimal, unit: Unit) -> Self {
        Quantity { value, unit, scale: Scale::Absolute }
    }

    /// Create a quantity with an explicit scale.
    pub fn with_scale(value: Decimal, unit: Unit, scale: Scale) -> Self {
        Quantity { value, unit, scale }
    }

    pub fn dimension(&self) -> Dimension {
        self.unit.dimension()
    }

    /// Check if two quantities have compatible dimensions.
    pub fn is_compatible(&self, other: &Quantity) -> bool {
        self.unit.is_compatible(&other.unit)
    }

    /// Convert to another unit, preserving the scale tag.
    pub fn convert_to(&self, target: Unit) -> Result<Quantity, UnitError> {
        let value = convert(self.value, &self.unit, &target)?;
        Ok(Quantity { value, unit: target, scale: self.scale })
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units;
    use rust_decimal_macros::dec;

    #[test]
    fn test_scale_round_trip() {
        for scale in [Scale::Absolute, Scale::Relative] {
            assert_eq!(Scale::parse(scale.as_str()), Some(scale));
        }
        assert_eq!(Scale::parse("absolute"), None);
    }

    #[test]
    fn test_convert_preserves_scale() {
        let q = Quantity::with_scale(dec!(3), units::foot(), Scale::Relative);
        let converted = q.convert_to(units::inch()).unwrap();
        assert_eq!(converted.value, dec!(36));
        assert_eq!(converted.unit, units::inch());
        assert_eq!(converted.scale, Scale::Relative);
    }

    #[test]
    fn test_convert_incompatible() {
        let q = Quantity::new(dec!(1), units::gram());
        assert!(q.convert_to(units::meter()).is_err());
    }

    #[test]
    fn test_display() {
        let q = Quantity::new(dec!(26.0), units::inch());
        assert_eq!(q.to_string(), "26.0 [in_i]");
    }
}
