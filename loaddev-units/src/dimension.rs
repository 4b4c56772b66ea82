//! The closed set of measurement dimensions
//!
//! The record schema only ever carries lengths, masses, and speeds, so the
//! dimension is a plain tag rather than an exponent vector. Units of
//! different dimensions are never interchangeable.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The physical kind of a measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    Length,
    Mass,
    Speed,
    Dimensionless,
}

impl Dimension {
    pub fn is_dimensionless(&self) -> bool {
        matches!(self, Dimension::Dimensionless)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dimension::Length => "length",
            Dimension::Mass => "mass",
            Dimension::Speed => "speed",
            Dimension::Dimensionless => "dimensionless",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Dimension::Length.to_string(), "length");
        assert_eq!(Dimension::Speed.to_string(), "speed");
    }

    #[test]
    fn test_is_dimensionless() {
        assert!(Dimension::Dimensionless.is_dimensionless());
        assert!(!Dimension::Mass.is_dimensionless());
    }
}
