//! Business-range validation for hand-load records.
//!
//! Codec-level checks (unknown unit tokens, malformed payloads) live in
//! `loaddev-units`; everything here assumes a well-formed [`Quantity`] and
//! enforces the physical ranges that make sense for small-arms reloading.
//! Bounds are checked in the rule's canonical unit, so a powder charge
//! expressed in grams is converted to grains before comparison and the
//! reported actual value keeps the caller's original unit.

use chrono::NaiveDate;
use loaddev_money::{is_non_negative, MonetaryAmount};
use loaddev_units::{units, Dimension, Quantity, Unit, UnitError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must be between {min} and {max} {unit_label}, got: {actual}")]
    RangeViolation {
        field: &'static str,
        min: Decimal,
        max: Decimal,
        unit_label: &'static str,
        actual: String,
    },

    #[error("{field} cannot be in the future, got: {date}")]
    FutureDate { field: &'static str, date: NaiveDate },

    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("{field} must be positive, got: {actual}")]
    NotPositive { field: &'static str, actual: String },

    #[error("{field} must not be negative, got: {actual}")]
    Negative { field: &'static str, actual: String },

    #[error(transparent)]
    Unit(#[from] UnitError),
}

/// A bounded physical range with a canonical unit for comparison and a
/// human label for error messages.
struct RangeRule {
    field: &'static str,
    min: Decimal,
    max: Decimal,
    unit: Unit,
    unit_label: &'static str,
}

impl RangeRule {
    fn check(&self, quantity: &Quantity) -> Result<(), ValidationError> {
        let canonical = quantity.convert_to(self.unit)?;
        if canonical.value < self.min || canonical.value > self.max {
            tracing::debug!(
                field = self.field,
                actual = %quantity,
                "range violation"
            );
            return Err(ValidationError::RangeViolation {
                field: self.field,
                min: self.min,
                max: self.max,
                unit_label: self.unit_label,
                actual: quantity.to_string(),
            });
        }
        Ok(())
    }
}

/// Powder charge: 0.1 to 150.0 grains.
pub fn check_powder_charge(quantity: &Quantity) -> Result<(), ValidationError> {
    RangeRule {
        field: "Powder charge",
        min: dec!(0.1),
        max: dec!(150.0),
        unit: units::grain(),
        unit_label: "grains",
    }
    .check(quantity)
}

/// Target range: 10 to 2000 yards.
pub fn check_target_range(quantity: &Quantity) -> Result<(), ValidationError> {
    RangeRule {
        field: "Target range",
        min: dec!(10),
        max: dec!(2000),
        unit: units::yard(),
        unit_label: "yards",
    }
    .check(quantity)
}

/// Group size: 0.01 to 50 inches.
pub fn check_group_size(quantity: &Quantity) -> Result<(), ValidationError> {
    RangeRule {
        field: "Group size",
        min: dec!(0.01),
        max: dec!(50.0),
        unit: units::inch(),
        unit_label: "inches",
    }
    .check(quantity)
}

/// Barrel length: 4 to 50 inches.
pub fn check_barrel_length(quantity: &Quantity) -> Result<(), ValidationError> {
    RangeRule {
        field: "Barrel length",
        min: dec!(4.0),
        max: dec!(50.0),
        unit: units::inch(),
        unit_label: "inches",
    }
    .check(quantity)
}

/// Free bore: 0.001 to 0.5 inches.
pub fn check_free_bore(quantity: &Quantity) -> Result<(), ValidationError> {
    RangeRule {
        field: "Free bore",
        min: dec!(0.001),
        max: dec!(0.5),
        unit: units::inch(),
        unit_label: "inches",
    }
    .check(quantity)
}

/// Muzzle velocity: 500 to 5000 feet per second.
pub fn check_velocity(quantity: &Quantity) -> Result<(), ValidationError> {
    RangeRule {
        field: "Velocity",
        min: dec!(500),
        max: dec!(5000),
        unit: units::feet_per_second(),
        unit_label: "fps",
    }
    .check(quantity)
}

/// Rejects dates after `today`. The clock is passed in so record
/// constructors stay deterministic under test.
pub fn check_not_future(
    field: &'static str,
    date: NaiveDate,
    today: NaiveDate,
) -> Result<(), ValidationError> {
    if date > today {
        return Err(ValidationError::FutureDate { field, date });
    }
    Ok(())
}

/// Rejects missing or blank text fields.
pub fn check_not_blank(field: &'static str, text: &str) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::Required { field });
    }
    Ok(())
}

/// Rejects quantities at or below zero. `None` passes; pair with
/// [`check_not_blank`]-style required checks when the field is mandatory.
pub fn check_positive(
    field: &'static str,
    quantity: Option<&Quantity>,
) -> Result<(), ValidationError> {
    match quantity {
        Some(q) if q.value <= Decimal::ZERO => Err(ValidationError::NotPositive {
            field,
            actual: q.to_string(),
        }),
        _ => Ok(()),
    }
}

/// Rejects quantities whose unit belongs to a different dimension than the
/// field calls for.
pub fn check_dimension(quantity: &Quantity, expected: Dimension) -> Result<(), ValidationError> {
    quantity.convert_to(base_unit(expected))?;
    Ok(())
}

fn base_unit(dimension: Dimension) -> Unit {
    match dimension {
        Dimension::Length => units::meter(),
        Dimension::Mass => units::gram(),
        Dimension::Speed => units::meters_per_second(),
        Dimension::Dimensionless => units::one(),
    }
}

/// Component prices may be zero (free samples) but never negative.
pub fn check_cost(field: &'static str, cost: &MonetaryAmount) -> Result<(), ValidationError> {
    if !is_non_negative(cost) {
        return Err(ValidationError::Negative {
            field,
            actual: cost.to_string(),
        });
    }
    Ok(())
}

/// Box counts start at one.
pub fn check_quantity_per_box(field: &'static str, count: i32) -> Result<(), ValidationError> {
    if count < 1 {
        return Err(ValidationError::NotPositive {
            field,
            actual: count.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use loaddev_units::Quantity;

    fn grains(value: Decimal) -> Quantity {
        Quantity::new(value, units::grain())
    }

    #[test]
    fn test_powder_charge_bounds_inclusive() {
        assert!(check_powder_charge(&grains(dec!(0.1))).is_ok());
        assert!(check_powder_charge(&grains(dec!(150.0))).is_ok());
        assert!(check_powder_charge(&grains(dec!(26.5))).is_ok());
    }

    #[test]
    fn test_powder_charge_below_minimum() {
        let err = check_powder_charge(&grains(dec!(0.099))).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Powder charge must be between 0.1 and 150.0 grains, got: 0.099 [gr]"
        );
    }

    #[test]
    fn test_powder_charge_above_maximum() {
        let err = check_powder_charge(&grains(dec!(150.01))).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Powder charge must be between 0.1 and 150.0 grains, got: 150.01 [gr]"
        );
    }

    #[test]
    fn test_powder_charge_converts_before_comparing() {
        // 2 grams is about 30.9 grains, well inside the range.
        let charge = Quantity::new(dec!(2), units::gram());
        assert!(check_powder_charge(&charge).is_ok());

        // 10 grams is about 154.3 grains, outside it. The message keeps
        // the caller's unit.
        let heavy = Quantity::new(dec!(10), units::gram());
        let err = check_powder_charge(&heavy).unwrap_err();
        assert!(err.to_string().ends_with("got: 10 g"), "{err}");
    }

    #[test]
    fn test_powder_charge_wrong_dimension() {
        let distance = Quantity::new(dec!(26.5), units::inch());
        assert!(matches!(
            check_powder_charge(&distance),
            Err(ValidationError::Unit(UnitError::DimensionMismatch { .. }))
        ));
    }

    #[test]
    fn test_target_range_bounds() {
        let yards = |v| Quantity::new(v, units::yard());
        assert!(check_target_range(&yards(dec!(10))).is_ok());
        assert!(check_target_range(&yards(dec!(2000))).is_ok());
        assert!(check_target_range(&yards(dec!(9.9))).is_err());
        assert!(check_target_range(&yards(dec!(2000.5))).is_err());
    }

    #[test]
    fn test_group_size_bounds() {
        let inches = |v| Quantity::new(v, units::inch());
        assert!(check_group_size(&inches(dec!(0.01))).is_ok());
        assert!(check_group_size(&inches(dec!(50))).is_ok());
        assert!(check_group_size(&inches(dec!(0.009))).is_err());
        let err = check_group_size(&inches(dec!(50.1))).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Group size must be between 0.01 and 50.0 inches, got: 50.1 [in_i]"
        );
    }

    #[test]
    fn test_barrel_length_message_digits() {
        let err = check_barrel_length(&Quantity::new(dec!(3.5), units::inch())).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Barrel length must be between 4.0 and 50.0 inches, got: 3.5 [in_i]"
        );
    }

    #[test]
    fn test_velocity_bounds() {
        let fps = |v| Quantity::new(v, units::feet_per_second());
        assert!(check_velocity(&fps(dec!(500))).is_ok());
        assert!(check_velocity(&fps(dec!(5000))).is_ok());
        let err = check_velocity(&fps(dec!(499))).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Velocity must be between 500 and 5000 fps, got: 499 [ft_i]/s"
        );
    }

    #[test]
    fn test_velocity_in_metric() {
        // 853.44 m/s is exactly 2800 fps.
        let mps = Quantity::new(dec!(853.44), units::meters_per_second());
        assert!(check_velocity(&mps).is_ok());
    }

    #[test]
    fn test_future_date_rejected() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let tomorrow = NaiveDate::from_ymd_opt(2024, 6, 16).unwrap();
        assert!(check_not_future("Group date", today, today).is_ok());
        let err = check_not_future("Group date", tomorrow, today).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Group date cannot be in the future, got: 2024-06-16"
        );
    }

    #[test]
    fn test_blank_text_rejected() {
        assert!(check_not_blank("Name", "Varget").is_ok());
        assert!(check_not_blank("Name", "").is_err());
        assert!(check_not_blank("Name", "   ").is_err());
    }

    #[test]
    fn test_positive_quantity() {
        assert!(check_positive("Bullet weight", None).is_ok());
        assert!(check_positive("Bullet weight", Some(&grains(dec!(168)))).is_ok());
        let err = check_positive("Bullet weight", Some(&grains(dec!(0)))).unwrap_err();
        assert_eq!(err.to_string(), "Bullet weight must be positive, got: 0 [gr]");
    }

    #[test]
    fn test_cost_and_box_count() {
        let free = MonetaryAmount::new(dec!(0), "USD");
        assert!(check_cost("Cost", &free).is_ok());
        let owed = MonetaryAmount::new(dec!(-1.50), "USD");
        assert!(check_cost("Cost", &owed).is_err());

        assert!(check_quantity_per_box("Quantity per box", 1).is_ok());
        assert!(check_quantity_per_box("Quantity per box", 0).is_err());
    }
}
