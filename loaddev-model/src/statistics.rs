//! Group statistics assembly - a group, its shots, and the derived numbers

use loaddev_stats::compute_stats;
use loaddev_units::{Quantity, Unit, UnitError};
use serde::{Deserialize, Serialize};

use crate::{Group, Shot};

/// A group joined with its shot string and the velocity statistics derived
/// from it. Derived values carry the reporting unit requested at assembly
/// time regardless of how individual shots were recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupStatistics {
    pub group: Group,
    pub average_velocity: Quantity,
    pub standard_deviation: Quantity,
    pub extreme_spread: Quantity,
    pub shots: Vec<Shot>,
}

impl GroupStatistics {
    /// Aggregate the shots' velocities in `unit`. An empty shot list yields
    /// zero-valued statistics rather than an error.
    pub fn assemble(group: Group, shots: Vec<Shot>, unit: Unit) -> Result<Self, UnitError> {
        let stats = compute_stats(shots.iter().map(|shot| &shot.velocity), unit)?;
        Ok(GroupStatistics {
            group,
            average_velocity: stats.average(),
            standard_deviation: stats.standard_deviation(),
            extreme_spread: stats.extreme_spread(),
            shots,
        })
    }
}
