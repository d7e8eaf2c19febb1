use super::waypoint::Waypoint;
use std::collections::HashMap;

/// Identifier-to-waypoint resolution, as consumed by the flight plan
/// manager.
///
/// Resolution is case-insensitive and returns an owned copy: once a
/// waypoint lands in a flight plan, the plan owns it. Radius or type
/// searches deliberately stay behind this boundary — the manager never
/// needs them.
pub trait WaypointLookup {
    fn find(&self, identifier: &str) -> Option<Waypoint>;
}

/// In-memory waypoint store keyed by uppercase identifier.
///
/// Backs the demo binary and the test suites; a database-backed
/// implementation plugs in through [`WaypointLookup`] without the manager
/// noticing.
#[derive(Debug, Default, Clone)]
pub struct WaypointTable {
    waypoints: HashMap<String, Waypoint>,
}

impl WaypointTable {
    #[must_use]
    pub fn new() -> Self {
        Self { waypoints: HashMap::new() }
    }

    /// Adds or replaces a waypoint, returning the previous entry for the
    /// same identifier if any.
    pub fn insert(&mut self, waypoint: Waypoint) -> Option<Waypoint> {
        self.waypoints.insert(waypoint.identifier().to_owned(), waypoint)
    }

    #[must_use]
    pub fn len(&self) -> usize { self.waypoints.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.waypoints.is_empty() }
}

impl FromIterator<Waypoint> for WaypointTable {
    fn from_iter<I: IntoIterator<Item = Waypoint>>(iter: I) -> Self {
        let mut table = Self::new();
        for waypoint in iter {
            table.insert(waypoint);
        }
        table
    }
}

impl WaypointLookup for WaypointTable {
    fn find(&self, identifier: &str) -> Option<Waypoint> {
        self.waypoints.get(&identifier.to_uppercase()).cloned()
    }
}
