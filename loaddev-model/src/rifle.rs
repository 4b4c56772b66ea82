//! Rifles and their barrel and sighting setup

use loaddev_units::{Dimension, Quantity};
use serde::{Deserialize, Serialize};

use crate::validation::{
    check_barrel_length, check_dimension, check_free_bore, check_not_blank, check_positive,
    ValidationError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TwistDirection {
    Left,
    Right,
}

/// Barrel rifling: twist rate expressed as the length of one full turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rifling {
    pub twist_rate: Quantity,
    pub twist_direction: TwistDirection,
    pub groove_count: u32,
}

/// Scope mounting geometry used for ballistic calculations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zeroing {
    pub sight_height: Quantity,
    pub zero_distance: Quantity,
}

/// A rifle. Only the name is mandatory; everything else fills in as the
/// owner measures it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rifle {
    pub id: Option<i64>,
    #[serde(skip)]
    pub owner_id: String,
    pub name: String,
    pub description: Option<String>,
    pub caliber: Option<String>,
    pub barrel_length: Option<Quantity>,
    pub barrel_contour: Option<String>,
    pub rifling: Option<Rifling>,
    pub free_bore: Option<Quantity>,
    pub zeroing: Option<Zeroing>,
}

impl Rifle {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_not_blank("Name", &self.name)?;
        if let Some(length) = &self.barrel_length {
            check_barrel_length(length)?;
        }
        if let Some(bore) = &self.free_bore {
            check_free_bore(bore)?;
        }
        if let Some(rifling) = &self.rifling {
            check_dimension(&rifling.twist_rate, Dimension::Length)?;
            check_positive("Twist rate", Some(&rifling.twist_rate))?;
        }
        if let Some(zeroing) = &self.zeroing {
            check_dimension(&zeroing.sight_height, Dimension::Length)?;
            check_positive("Sight height", Some(&zeroing.sight_height))?;
            check_dimension(&zeroing.zero_distance, Dimension::Length)?;
            check_positive("Zero distance", Some(&zeroing.zero_distance))?;
        }
        Ok(())
    }
}

impl PartialEq for Rifle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.name == other.name
            && self.description == other.description
            && self.caliber == other.caliber
            && self.barrel_length == other.barrel_length
            && self.barrel_contour == other.barrel_contour
            && self.rifling == other.rifling
            && self.free_bore == other.free_bore
            && self.zeroing == other.zeroing
    }
}

impl Eq for Rifle {}
