//! Unit representation with conversion factors

use std::fmt;
use std::hash::{Hash, Hasher};

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::units::parse_unit;
use crate::Dimension;

/// A registered unit of measure, identified by its UCUM token.
///
/// Units are interned in the registry and equal by token. `factor` converts
/// a value in this unit to the per-dimension base unit (meter, gram,
/// meter-per-second, one); no registered factor is zero or negative.
#[derive(Debug, Clone, Copy)]
pub struct Unit {
    token: &'static str,
    name: &'static str,
    dimension: Dimension,
    factor: Decimal,
}

impl Unit {
    pub(crate) const fn new(
        token: &'static str,
        name: &'static str,
        dimension: Dimension,
        factor: Decimal,
    ) -> Self {
        Unit { token, name, dimension, factor }
    }

    /// The UCUM token this unit was registered under (e.g. `"[in_i]"`).
    pub fn token(&self) -> &'static str {
        self.token
    }

    /// Human-readable unit name (e.g. `"international inch"`).
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Conversion factor to the base unit of this unit's dimension.
    pub fn factor(&self) -> Decimal {
        self.factor
    }

    /// Check if two units measure the same kind of thing.
    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.dimension == other.dimension
    }
}

/// Convert a value between two units of the same dimension.
///
/// Computed as `value * from.factor / to.factor` entirely in decimal, so
/// repeated conversions do not accumulate binary rounding error. Converting
/// a unit to itself returns the value untouched.
pub fn convert(value: Decimal, from: &Unit, to: &Unit) -> Result<Decimal, UnitError> {
    if !from.is_compatible(to) {
        return Err(UnitError::DimensionMismatch { from: from.token, to: to.token });
    }
    if from.token == to.token {
        return Ok(value);
    }
    Ok(value * from.factor / to.factor)
}

impl PartialEq for Unit {
    fn eq(&self, other: &Self) -> bool {
        self.token == other.token
    }
}

impl Eq for Unit {}

impl Hash for Unit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.token.hash(state);
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token)
    }
}

impl Serialize for Unit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.token)
    }
}

impl<'de> Deserialize<'de> for Unit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        parse_unit(&token).map_err(serde::de::Error::custom)
    }
}

/// Errors from unit lookup and conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    /// The token is not in the registry. Always a client input error.
    #[error("unknown unit token: {0}")]
    UnknownToken(String),

    /// Conversion between incompatible dimensions. This is a programming
    /// error in the caller (a codec or validator applied to the wrong
    /// field), not something user input can trigger on a correct call site.
    #[error("cannot convert {from} to {to}: incompatible dimensions")]
    DimensionMismatch { from: &'static str, to: &'static str },
}
