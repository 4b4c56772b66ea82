//! The fixed unit table and its registry
//!
//! Tokens are case-sensitive UCUM codes. The table is seeded once at first
//! use and read-only thereafter; `LazyLock` makes concurrent first access
//! from multiple services race-free. There is no runtime registration.

use std::collections::HashMap;
use std::sync::LazyLock;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::unit::UnitError;
use crate::{Dimension, Unit};

/// Global unit registry.
pub static UNITS: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::new);

// Seeded units. Factors are exact decimal definitions against the base unit
// of each dimension (meter, gram, meter-per-second, one).

pub fn meter() -> Unit {
    Unit::new("m", "meter", Dimension::Length, Decimal::ONE)
}

pub fn inch() -> Unit {
    Unit::new("[in_i]", "international inch", Dimension::Length, dec!(0.0254))
}

pub fn foot() -> Unit {
    Unit::new("[ft_i]", "international foot", Dimension::Length, dec!(0.3048))
}

pub fn yard() -> Unit {
    Unit::new("[yd_i]", "international yard", Dimension::Length, dec!(0.9144))
}

pub fn gram() -> Unit {
    Unit::new("g", "gram", Dimension::Mass, Decimal::ONE)
}

pub fn grain() -> Unit {
    Unit::new("[gr]", "grain", Dimension::Mass, dec!(0.06479891))
}

pub fn meters_per_second() -> Unit {
    Unit::new("m/s", "meter per second", Dimension::Speed, Decimal::ONE)
}

pub fn feet_per_second() -> Unit {
    Unit::new("[ft_i]/s", "international foot per second", Dimension::Speed, dec!(0.3048))
}

pub fn one() -> Unit {
    Unit::new("1", "one", Dimension::Dimensionless, Decimal::ONE)
}

/// Registry of all known units, keyed by token.
pub struct UnitRegistry {
    units: HashMap<&'static str, Unit>,
}

impl UnitRegistry {
    fn new() -> Self {
        let mut registry = UnitRegistry { units: HashMap::new() };
        registry.register(meter());
        registry.register(inch());
        registry.register(foot());
        registry.register(yard());
        registry.register(gram());
        registry.register(grain());
        registry.register(meters_per_second());
        registry.register(feet_per_second());
        registry.register(one());
        registry
    }

    fn register(&mut self, unit: Unit) {
        self.units.insert(unit.token(), unit);
    }

    /// Get a unit by token.
    pub fn get(&self, token: &str) -> Option<Unit> {
        self.units.get(token).copied()
    }

    /// All registered tokens.
    pub fn tokens(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.units.keys().copied()
    }
}

/// Parse a UCUM token into a registered unit.
pub fn parse_unit(token: &str) -> Result<Unit, UnitError> {
    UNITS
        .get(token.trim())
        .ok_or_else(|| UnitError::UnknownToken(token.to_string()))
}

/// Format a unit back to the exact token it was registered under.
pub fn format_unit(unit: &Unit) -> &'static str {
    unit.token()
}
