use super::manager::FlightPlanError;
use crate::guidance::distance_bearing;
use crate::nav_database::Waypoint;
use chrono::{DateTime, Utc};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// An ordered route of resolved waypoints from departure to arrival.
///
/// Waypoint order is flight order; duplicate identifiers are allowed
/// (airways revisit fixes). Construction enforces that the sequence
/// starts at the departure, ends at the arrival and has at least two
/// entries, so every plan has at least one leg. While active the plan is
/// owned exclusively by the [`FlightPlanManager`](super::FlightPlanManager),
/// which is the only place structural edits happen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightPlan {
    name: String,
    departure: String,
    arrival: String,
    waypoints: Vec<Waypoint>,
    created: DateTime<Utc>,
}

impl FlightPlan {
    pub fn new(
        name: &str,
        departure: &str,
        arrival: &str,
        waypoints: Vec<Waypoint>,
    ) -> Result<Self, FlightPlanError> {
        if waypoints.len() < 2 {
            return Err(FlightPlanError::RouteTooShort);
        }
        let departure = departure.to_uppercase();
        let arrival = arrival.to_uppercase();
        if waypoints[0].identifier() != departure {
            return Err(FlightPlanError::InvalidRoute(format!(
                "route starts at {}, expected departure {departure}",
                waypoints[0].identifier()
            )));
        }
        let last = &waypoints[waypoints.len() - 1];
        if last.identifier() != arrival {
            return Err(FlightPlanError::InvalidRoute(format!(
                "route ends at {}, expected arrival {arrival}",
                last.identifier()
            )));
        }
        Ok(Self {
            name: name.to_owned(),
            departure,
            arrival,
            waypoints,
            created: Utc::now(),
        })
    }

    pub fn name(&self) -> &str { &self.name }

    pub fn departure(&self) -> &str { &self.departure }

    pub fn arrival(&self) -> &str { &self.arrival }

    pub fn waypoints(&self) -> &[Waypoint] { &self.waypoints }

    pub const fn created(&self) -> DateTime<Utc> { self.created }

    #[must_use]
    pub fn waypoint_count(&self) -> usize { self.waypoints.len() }

    /// Number of flyable legs; always `waypoint_count() - 1`.
    #[must_use]
    pub fn leg_count(&self) -> usize { self.waypoints.len() - 1 }

    /// Sum of great-circle leg lengths in nautical miles.
    #[must_use]
    pub fn total_distance_nm(&self) -> f64 {
        self.waypoints
            .iter()
            .tuple_windows()
            .map(|(a, b)| {
                distance_bearing(a.latitude(), a.longitude(), b.latitude(), b.longitude()).0
            })
            .sum()
    }

    // Structural edits stay crate-private: the manager is responsible for
    // keeping the current-leg index consistent around them.

    pub(super) fn insert_waypoint(&mut self, position: usize, waypoint: Waypoint) {
        self.waypoints.insert(position, waypoint);
    }

    pub(super) fn remove_waypoint(&mut self, position: usize) -> Waypoint {
        self.waypoints.remove(position)
    }

    pub(super) fn set_altitude(&mut self, position: usize, feet: Option<i32>) {
        self.waypoints[position].set_altitude(feet);
    }
}
