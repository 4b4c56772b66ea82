//! Velocity statistics accumulator

use rust_decimal::{Decimal, MathematicalOps};

use loaddev_units::{convert, Quantity, Unit, UnitError};

/// Statistics accumulator over same-dimension velocity quantities.
///
/// Every input is converted to `unit` before combining, so the accumulated
/// fields are all expressed in one unit. `add` and `merge` consume the
/// accumulator and return a new one; nothing is mutated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VelocityStats {
    count: u32,
    sum: Decimal,
    min: Decimal,
    max: Decimal,
    sum_of_squares: Decimal,
    unit: Unit,
}

impl VelocityStats {
    /// The empty accumulator, seeded with the unit all inputs normalize to.
    pub fn empty(unit: Unit) -> Self {
        VelocityStats {
            count: 0,
            sum: Decimal::ZERO,
            // Sentinels; never visible through the derived getters
            min: Decimal::MAX,
            max: Decimal::MIN,
            sum_of_squares: Decimal::ZERO,
            unit,
        }
    }

    /// Fold one velocity into the accumulator.
    pub fn add(self, velocity: &Quantity) -> Result<Self, UnitError> {
        let v = convert(velocity.value, &velocity.unit, &self.unit)?;
        Ok(VelocityStats {
            count: self.count + 1,
            sum: self.sum + v,
            min: self.min.min(v),
            max: self.max.max(v),
            sum_of_squares: self.sum_of_squares + v * v,
            unit: self.unit,
        })
    }

    /// Combine two accumulators over disjoint shot sets.
    ///
    /// Counts, sums, and sums of squares add; min and max fold. An
    /// accumulator seeded with a different unit is rescaled first (sums by
    /// the factor ratio, sums of squares by its square), so chunked folds
    /// agree with the sequential fold.
    pub fn merge(self, other: &VelocityStats) -> Result<Self, UnitError> {
        if other.count == 0 {
            // Must not fold the other side's sentinels
            return Ok(self);
        }
        let ratio = convert(Decimal::ONE, &other.unit, &self.unit)?;
        let (sum, min, max, sum_of_squares) = (
            other.sum * ratio,
            other.min * ratio,
            other.max * ratio,
            other.sum_of_squares * ratio * ratio,
        );
        if self.count == 0 {
            return Ok(VelocityStats {
                count: other.count,
                sum,
                min,
                max,
                sum_of_squares,
                unit: self.unit,
            });
        }
        Ok(VelocityStats {
            count: self.count + other.count,
            sum: self.sum + sum,
            min: self.min.min(min),
            max: self.max.max(max),
            sum_of_squares: self.sum_of_squares + sum_of_squares,
            unit: self.unit,
        })
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Mean velocity; zero when the accumulator is empty.
    pub fn average(&self) -> Quantity {
        if self.count == 0 {
            return Quantity::new(Decimal::ZERO, self.unit);
        }
        Quantity::new(self.sum / Decimal::from(self.count), self.unit)
    }

    /// Population standard deviation; zero when the accumulator is empty.
    pub fn standard_deviation(&self) -> Quantity {
        if self.count == 0 {
            return Quantity::new(Decimal::ZERO, self.unit);
        }
        let n = Decimal::from(self.count);
        let average = self.sum / n;
        // Rounding can push the subtraction slightly negative for
        // near-zero-variance inputs; clamp before the square root.
        let variance = (self.sum_of_squares / n - average * average).max(Decimal::ZERO);
        Quantity::new(variance.sqrt().unwrap_or(Decimal::ZERO), self.unit)
    }

    /// Max minus min; zero when the accumulator is empty.
    pub fn extreme_spread(&self) -> Quantity {
        if self.count == 0 {
            return Quantity::new(Decimal::ZERO, self.unit);
        }
        Quantity::new(self.max - self.min, self.unit)
    }
}

/// Compute statistics over a sequence of velocities in a single left fold.
///
/// O(n) time, O(1) extra space; inputs in any speed unit are normalized to
/// `unit` as they are folded.
pub fn compute_stats<'a, I>(velocities: I, unit: Unit) -> Result<VelocityStats, UnitError>
where
    I: IntoIterator<Item = &'a Quantity>,
{
    let mut stats = VelocityStats::empty(unit);
    for velocity in velocities {
        stats = stats.add(velocity)?;
    }
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use loaddev_units::units;
    use rust_decimal_macros::dec;

    fn fps(value: Decimal) -> Quantity {
        Quantity::new(value, units::feet_per_second())
    }

    fn five_shot_group() -> Vec<Quantity> {
        [dec!(2800), dec!(2810), dec!(2790), dec!(2805), dec!(2795)]
            .into_iter()
            .map(fps)
            .collect()
    }

    #[test]
    fn test_known_group() {
        let stats = compute_stats(&five_shot_group(), units::feet_per_second()).unwrap();
        assert_eq!(stats.count(), 5);
        assert_eq!(stats.average().value, dec!(2800));
        assert_eq!(stats.extreme_spread().value, dec!(20));
        // Population standard deviation: sqrt(50)
        let sd = stats.standard_deviation().value;
        let expected = dec!(50).sqrt().unwrap();
        assert!((sd - expected).abs() < dec!(0.0000001), "sd = {}", sd);
    }

    #[test]
    fn test_empty_input_no_sentinel_leakage() {
        let stats = compute_stats(&Vec::new(), units::feet_per_second()).unwrap();
        assert_eq!(stats.count(), 0);
        assert_eq!(stats.average().value, Decimal::ZERO);
        assert_eq!(stats.standard_deviation().value, Decimal::ZERO);
        assert_eq!(stats.extreme_spread().value, Decimal::ZERO);
    }

    #[test]
    fn test_results_are_tagged_with_target_unit() {
        let stats = compute_stats(&five_shot_group(), units::meters_per_second()).unwrap();
        assert_eq!(stats.average().unit, units::meters_per_second());
        assert_eq!(stats.standard_deviation().unit, units::meters_per_second());
        assert_eq!(stats.extreme_spread().unit, units::meters_per_second());
    }

    #[test]
    fn test_mixed_units_normalize() {
        // 853.44 m/s is exactly 2800 fps
        let shots = vec![
            fps(dec!(2800)),
            Quantity::new(dec!(853.44), units::meters_per_second()),
        ];
        let stats = compute_stats(&shots, units::feet_per_second()).unwrap();
        assert_eq!(stats.average().value, dec!(2800));
        assert_eq!(stats.extreme_spread().value, Decimal::ZERO);
    }

    #[test]
    fn test_near_zero_variance_clamped() {
        let shots = vec![fps(dec!(2800.000001)); 3];
        let stats = compute_stats(&shots, units::feet_per_second()).unwrap();
        assert_eq!(stats.standard_deviation().value, Decimal::ZERO);
    }

    #[test]
    fn test_wrong_dimension_input() {
        let not_a_speed = Quantity::new(dec!(100), units::yard());
        let result = compute_stats(std::iter::once(&not_a_speed), units::feet_per_second());
        assert!(result.is_err());
    }

    #[test]
    fn test_chunked_merge_matches_sequential() {
        let shots = five_shot_group();
        let sequential = compute_stats(&shots, units::feet_per_second()).unwrap();

        let left = compute_stats(&shots[..2], units::feet_per_second()).unwrap();
        let right = compute_stats(&shots[2..], units::feet_per_second()).unwrap();
        let merged = left.merge(&right).unwrap();

        assert_eq!(merged, sequential);
    }

    #[test]
    fn test_merge_with_empty_sides() {
        let shots = five_shot_group();
        let full = compute_stats(&shots, units::feet_per_second()).unwrap();
        let empty = VelocityStats::empty(units::feet_per_second());

        assert_eq!(full.clone().merge(&empty).unwrap(), full);
        assert_eq!(empty.merge(&full).unwrap(), full);
    }

    #[test]
    fn test_merge_rescales_foreign_unit() {
        let shots = five_shot_group();
        let in_fps = compute_stats(&shots[..2], units::feet_per_second()).unwrap();
        let in_mps = compute_stats(&shots[2..], units::meters_per_second()).unwrap();
        let merged = in_fps.merge(&in_mps).unwrap();

        let sequential = compute_stats(&shots, units::feet_per_second()).unwrap();
        assert_eq!(merged.count(), sequential.count());
        let diff = (merged.average().value - sequential.average().value).abs();
        assert!(diff < dec!(0.0000000001), "averages diverged by {}", diff);
        let diff = (merged.extreme_spread().value - sequential.extreme_spread().value).abs();
        assert!(diff < dec!(0.0000000001), "spreads diverged by {}", diff);
    }
}
