//! Load recipes - the component combination a group is fired with

use loaddev_units::{Dimension, Quantity};
use serde::{Deserialize, Serialize};

use crate::validation::{check_dimension, check_not_blank, check_positive, ValidationError};

/// A named recipe: powder, bullet and primer choices plus the seating
/// measurements. Component names are free text rather than foreign keys,
/// so a load stays readable even when the matching inventory item is gone.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Load {
    pub id: Option<i64>,
    #[serde(skip)]
    pub owner_id: String,
    pub name: String,
    pub description: Option<String>,
    pub powder_manufacturer: String,
    pub powder_type: String,
    pub bullet_manufacturer: String,
    pub bullet_type: String,
    pub bullet_weight: Quantity,
    pub primer_manufacturer: String,
    pub primer_type: String,
    pub distance_from_lands: Option<Quantity>,
    pub case_overall_length: Option<Quantity>,
    pub neck_tension: Option<Quantity>,
    pub rifle_id: Option<i64>,
}

impl Load {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_not_blank("Name", &self.name)?;
        check_not_blank("Powder manufacturer", &self.powder_manufacturer)?;
        check_not_blank("Powder type", &self.powder_type)?;
        check_not_blank("Bullet manufacturer", &self.bullet_manufacturer)?;
        check_not_blank("Bullet type", &self.bullet_type)?;
        check_not_blank("Primer manufacturer", &self.primer_manufacturer)?;
        check_not_blank("Primer type", &self.primer_type)?;

        check_dimension(&self.bullet_weight, Dimension::Mass)?;
        check_positive("Bullet weight", Some(&self.bullet_weight))?;

        for (field, measurement) in [
            ("Distance from lands", &self.distance_from_lands),
            ("Case overall length", &self.case_overall_length),
            ("Neck tension", &self.neck_tension),
        ] {
            if let Some(q) = measurement {
                check_dimension(q, Dimension::Length)?;
            }
            check_positive(field, measurement.as_ref())?;
        }
        Ok(())
    }
}

impl PartialEq for Load {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.name == other.name
            && self.description == other.description
            && self.powder_manufacturer == other.powder_manufacturer
            && self.powder_type == other.powder_type
            && self.bullet_manufacturer == other.bullet_manufacturer
            && self.bullet_type == other.bullet_type
            && self.bullet_weight == other.bullet_weight
            && self.primer_manufacturer == other.primer_manufacturer
            && self.primer_type == other.primer_type
            && self.distance_from_lands == other.distance_from_lands
            && self.case_overall_length == other.case_overall_length
            && self.neck_tension == other.neck_tension
            && self.rifle_id == other.rifle_id
    }
}

impl Eq for Load {}
