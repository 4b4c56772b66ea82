//! Consumable component inventory: cases, primers, propellant, projectiles
//!
//! All four records share the same shape rules: a manufacturer, a
//! non-negative cost in the purchase currency, and where boxed a count of
//! at least one. Fields named `kind` serialize as `"type"` to match the
//! wire format.

use loaddev_money::MonetaryAmount;
use loaddev_units::{Dimension, Quantity};
use serde::{Deserialize, Serialize};

use crate::validation::{
    check_cost, check_dimension, check_not_blank, check_positive, check_quantity_per_box,
    ValidationError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrimerSize {
    SmallPistol,
    LargePistol,
    SmallRifle,
    LargeRifle,
    SmallRifleMagnum,
    LargeRifleMagnum,
}

/// Brass cases, bought by the box for a given caliber.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Case {
    pub id: Option<i64>,
    #[serde(skip)]
    pub owner_id: String,
    pub manufacturer: String,
    pub caliber: String,
    pub primer_size: PrimerSize,
    pub cost: MonetaryAmount,
    pub quantity_per_box: i32,
}

impl Case {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_not_blank("Manufacturer", &self.manufacturer)?;
        check_not_blank("Caliber", &self.caliber)?;
        check_cost("Cost", &self.cost)?;
        check_quantity_per_box("Quantity per box", self.quantity_per_box)
    }
}

impl PartialEq for Case {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.manufacturer == other.manufacturer
            && self.caliber == other.caliber
            && self.primer_size == other.primer_size
            && self.cost == other.cost
            && self.quantity_per_box == other.quantity_per_box
    }
}

impl Eq for Case {}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Primer {
    pub id: Option<i64>,
    #[serde(skip)]
    pub owner_id: String,
    pub manufacturer: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub primer_size: PrimerSize,
    pub cost: MonetaryAmount,
    pub quantity_per_box: i32,
}

impl Primer {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_not_blank("Manufacturer", &self.manufacturer)?;
        check_not_blank("Type", &self.kind)?;
        check_cost("Cost", &self.cost)?;
        check_quantity_per_box("Quantity per box", self.quantity_per_box)
    }
}

impl PartialEq for Primer {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.manufacturer == other.manufacturer
            && self.kind == other.kind
            && self.primer_size == other.primer_size
            && self.cost == other.cost
            && self.quantity_per_box == other.quantity_per_box
    }
}

impl Eq for Primer {}

/// Powder, sold by weight rather than count.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Propellant {
    pub id: Option<i64>,
    #[serde(skip)]
    pub owner_id: String,
    pub manufacturer: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub cost: MonetaryAmount,
    pub weight_per_container: Quantity,
}

impl Propellant {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_not_blank("Manufacturer", &self.manufacturer)?;
        check_not_blank("Type", &self.kind)?;
        check_cost("Cost", &self.cost)?;
        check_dimension(&self.weight_per_container, Dimension::Mass)?;
        check_positive("Weight per container", Some(&self.weight_per_container))
    }
}

impl PartialEq for Propellant {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.manufacturer == other.manufacturer
            && self.kind == other.kind
            && self.cost == other.cost
            && self.weight_per_container == other.weight_per_container
    }
}

impl Eq for Propellant {}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Projectile {
    pub id: Option<i64>,
    #[serde(skip)]
    pub owner_id: String,
    pub manufacturer: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub weight: Quantity,
    pub cost: MonetaryAmount,
    pub quantity_per_box: i32,
}

impl Projectile {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_not_blank("Manufacturer", &self.manufacturer)?;
        check_not_blank("Type", &self.kind)?;
        check_dimension(&self.weight, Dimension::Mass)?;
        check_positive("Weight", Some(&self.weight))?;
        check_cost("Cost", &self.cost)?;
        check_quantity_per_box("Quantity per box", self.quantity_per_box)
    }
}

impl PartialEq for Projectile {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.manufacturer == other.manufacturer
            && self.kind == other.kind
            && self.weight == other.weight
            && self.cost == other.cost
            && self.quantity_per_box == other.quantity_per_box
    }
}

impl Eq for Projectile {}
