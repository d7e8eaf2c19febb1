//! Waypoint data model and the lookup collaborator the flight plan
//! manager resolves identifiers through.

mod lookup;
mod waypoint;

pub use lookup::{WaypointLookup, WaypointTable};
pub use waypoint::{Waypoint, WaypointError, WaypointKind};

#[cfg(test)]
mod tests;
