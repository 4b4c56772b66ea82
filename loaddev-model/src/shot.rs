//! Individual shots and their chronographed velocity

use loaddev_units::Quantity;
use serde::{Deserialize, Serialize};

use crate::validation::{check_velocity, ValidationError};

/// One shot within a group. The velocity is whatever the chronograph
/// reported, in its own unit; aggregation converts as needed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shot {
    pub id: Option<i64>,
    #[serde(skip)]
    pub owner_id: String,
    pub group_id: i64,
    pub velocity: Quantity,
}

impl Shot {
    pub fn new(
        id: Option<i64>,
        owner_id: impl Into<String>,
        group_id: i64,
        velocity: Quantity,
    ) -> Result<Self, ValidationError> {
        let shot = Shot { id, owner_id: owner_id.into(), group_id, velocity };
        shot.validate()?;
        Ok(shot)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_velocity(&self.velocity)
    }
}

impl PartialEq for Shot {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.group_id == other.group_id && self.velocity == other.velocity
    }
}

impl Eq for Shot {}

#[cfg(test)]
mod tests {
    use super::*;
    use loaddev_units::units;
    use rust_decimal_macros::dec;

    #[test]
    fn test_velocity_in_range() {
        let shot = Shot::new(None, "user-a", 1, Quantity::new(dec!(2805), units::feet_per_second()));
        assert!(shot.is_ok());
    }

    #[test]
    fn test_velocity_out_of_range() {
        let err = Shot::new(None, "user-a", 1, Quantity::new(dec!(5001), units::feet_per_second()))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Velocity must be between 500 and 5000 fps, got: 5001 [ft_i]/s"
        );
    }

    #[test]
    fn test_equality_ignores_owner() {
        let velocity = Quantity::new(dec!(2805), units::feet_per_second());
        let a = Shot { id: Some(3), owner_id: "user-a".into(), group_id: 1, velocity };
        let b = Shot { id: Some(3), owner_id: "user-b".into(), group_id: 1, velocity };
        assert_eq!(a, b);
    }
}
