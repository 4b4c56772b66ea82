//! Loaddev Model - Hand-load domain records
//!
//! The records a reloading log is made of: rifles, load recipes, shot
//! groups, chronographed shots and the consumable component inventory.
//! Each record validates itself against the physical ranges in
//! [`validation`]; quantity decoding and unit conversion live in
//! `loaddev-units`, velocity aggregation in `loaddev-stats`.

mod components;
mod group;
mod load;
mod rifle;
mod shot;
mod statistics;
pub mod validation;

pub use components::{Case, Primer, PrimerSize, Projectile, Propellant};
pub use group::Group;
pub use load::Load;
pub use rifle::{Rifle, Rifling, TwistDirection, Zeroing};
pub use shot::Shot;
pub use statistics::GroupStatistics;
pub use validation::ValidationError;
