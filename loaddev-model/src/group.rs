//! Shot groups - a dated string of shots fired with one load

use chrono::{Local, NaiveDate};
use loaddev_units::Quantity;
use serde::{Deserialize, Serialize};

use crate::validation::{
    check_group_size, check_not_future, check_powder_charge, check_target_range, ValidationError,
};

/// A group fired on a given date with a specific powder charge at a known
/// target range. The measured group size is optional since it is often
/// recorded after the range trip.
///
/// `owner_id` is an access-control attribute, not part of the record's
/// identity. It is excluded from equality and never serialized; the
/// persistence layer assigns it from the authenticated caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: Option<i64>,
    #[serde(skip)]
    pub owner_id: String,
    pub load_id: i64,
    pub date: NaiveDate,
    pub powder_charge: Quantity,
    pub target_range: Quantity,
    pub group_size: Option<Quantity>,
}

impl Group {
    /// Build and validate a group against today's date.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: Option<i64>,
        owner_id: impl Into<String>,
        load_id: i64,
        date: NaiveDate,
        powder_charge: Quantity,
        target_range: Quantity,
        group_size: Option<Quantity>,
    ) -> Result<Self, ValidationError> {
        let group = Group {
            id,
            owner_id: owner_id.into(),
            load_id,
            date,
            powder_charge,
            target_range,
            group_size,
        };
        group.validate(Local::now().date_naive())?;
        Ok(group)
    }

    /// Validate against an explicit `today`, so callers and tests control
    /// the clock.
    pub fn validate(&self, today: NaiveDate) -> Result<(), ValidationError> {
        check_not_future("Group date", self.date, today)?;
        check_powder_charge(&self.powder_charge)?;
        check_target_range(&self.target_range)?;
        if let Some(size) = &self.group_size {
            check_group_size(size)?;
        }
        Ok(())
    }
}

impl PartialEq for Group {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.load_id == other.load_id
            && self.date == other.date
            && self.powder_charge == other.powder_charge
            && self.target_range == other.target_range
            && self.group_size == other.group_size
    }
}

impl Eq for Group {}

#[cfg(test)]
mod tests {
    use super::*;
    use loaddev_units::units;
    use rust_decimal_macros::dec;

    fn charge() -> Quantity {
        Quantity::new(dec!(26.5), units::grain())
    }

    fn range() -> Quantity {
        Quantity::new(dec!(100), units::yard())
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn group(date: NaiveDate) -> Group {
        Group {
            id: Some(1),
            owner_id: "user-a".into(),
            load_id: 7,
            date,
            powder_charge: charge(),
            target_range: range(),
            group_size: Some(Quantity::new(dec!(0.75), units::inch())),
        }
    }

    #[test]
    fn test_valid_group() {
        assert!(group(today()).validate(today()).is_ok());
    }

    #[test]
    fn test_dated_today_accepted_tomorrow_rejected() {
        let tomorrow = today().succ_opt().unwrap();
        assert!(group(today()).validate(today()).is_ok());
        let err = group(tomorrow).validate(today()).unwrap_err();
        assert!(matches!(err, ValidationError::FutureDate { .. }));
    }

    #[test]
    fn test_powder_charge_out_of_range() {
        let mut g = group(today());
        g.powder_charge = Quantity::new(dec!(0.099), units::grain());
        let err = g.validate(today()).unwrap_err();
        assert!(err.to_string().starts_with("Powder charge must be between"));
    }

    #[test]
    fn test_missing_group_size_is_fine() {
        let mut g = group(today());
        g.group_size = None;
        assert!(g.validate(today()).is_ok());
    }

    #[test]
    fn test_equality_ignores_owner() {
        let a = group(today());
        let mut b = group(today());
        b.owner_id = "user-b".into();
        assert_eq!(a, b);

        b.load_id = 8;
        assert_ne!(a, b);
    }

    #[test]
    fn test_owner_never_serialized() {
        let json = serde_json::to_string(&group(today())).unwrap();
        assert!(!json.contains("owner"));
        assert!(json.contains("\"loadId\":7"));
    }
}
