use super::flight_plan::FlightPlan;
use crate::nav_database::{Waypoint, WaypointLookup};
use crate::{info, warn};
use serde::Serialize;
use strum_macros::Display;

#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum FlightPlanError {
    #[strum(to_string = "waypoint {0} not found in navigation database")]
    WaypointNotFound(String),
    #[strum(to_string = "no active flight plan")]
    NoActivePlan,
    #[strum(to_string = "waypoint position {0} out of range")]
    PositionOutOfRange(usize),
    #[strum(to_string = "a flight plan must keep at least two waypoints")]
    RouteTooShort,
    #[strum(to_string = "invalid route: {0}")]
    InvalidRoute(String),
}

impl std::error::Error for FlightPlanError {}

/// The waypoint pair the aircraft is currently flying between.
///
/// Legs are derived, never stored: a plan of N waypoints has N−1 of them,
/// indexed `0..=N-2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leg<'a> {
    pub start: &'a Waypoint,
    pub end: &'a Waypoint,
    pub index: usize,
}

/// Snapshot of the active plan for displays, mirroring the leg pointer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlightPlanStatus {
    pub plan_name: String,
    pub current_leg_index: usize,
    pub total_waypoints: usize,
    pub end_of_route: bool,
}

#[derive(Debug)]
struct ActivePlan {
    plan: FlightPlan,
    current_leg: usize,
}

/// Owns zero-or-one active flight plan plus the current-leg pointer and
/// answers live-navigation queries once per control-loop tick.
///
/// All waypoint resolution goes through the injected [`WaypointLookup`];
/// it is consulted only at plan-creation and insertion time, never on the
/// leg-query hot path. Mutation takes `&mut self`, so concurrent edits of
/// one manager are ruled out statically — wrap the manager in a mutex if
/// several callers must share it.
///
/// Every edit is atomic: it either fully succeeds, including the
/// current-leg adjustment, or fails with no visible side effect.
#[derive(Debug)]
pub struct FlightPlanManager<L: WaypointLookup> {
    lookup: L,
    active: Option<ActivePlan>,
}

impl<L: WaypointLookup> FlightPlanManager<L> {
    pub fn new(lookup: L) -> Self {
        Self { lookup, active: None }
    }

    /// Resolves `[departure] + route + [arrival]` in order and builds a
    /// plan from the result. Any unresolvable identifier fails the whole
    /// call — no partially resolved plan is ever returned. The new plan
    /// is not activated.
    pub fn create_flight_plan(
        &self,
        name: &str,
        departure: &str,
        arrival: &str,
        route: &[&str],
    ) -> Result<FlightPlan, FlightPlanError> {
        let full_route = std::iter::once(departure)
            .chain(route.iter().copied())
            .chain(std::iter::once(arrival));

        let mut waypoints = Vec::with_capacity(route.len() + 2);
        for identifier in full_route {
            let waypoint = self.resolve(identifier)?;
            waypoints.push(waypoint);
        }

        let plan = FlightPlan::new(name, departure, arrival, waypoints)?;
        info!(
            "Created flight plan {} ({} -> {}, {} waypoints)",
            plan.name(),
            plan.departure(),
            plan.arrival(),
            plan.waypoint_count()
        );
        Ok(plan)
    }

    /// Installs `plan` as the active plan and rewinds to leg 0. Any
    /// previously active plan is dropped, not merged.
    pub fn set_active_plan(&mut self, plan: FlightPlan) {
        info!("Activating flight plan {} at leg 0", plan.name());
        self.active = Some(ActivePlan { plan, current_leg: 0 });
    }

    /// Removes and returns the active plan. Leg queries fail with
    /// [`FlightPlanError::NoActivePlan`] until a new plan is set.
    pub fn clear_active_plan(&mut self) -> Option<FlightPlan> {
        self.active.take().map(|active| {
            info!("Cleared active flight plan {}", active.plan.name());
            active.plan
        })
    }

    pub fn active_plan(&self) -> Option<&FlightPlan> {
        self.active.as_ref().map(|active| &active.plan)
    }

    pub fn current_leg_index(&self) -> Option<usize> {
        self.active.as_ref().map(|active| active.current_leg)
    }

    /// The waypoint pair for the current leg. O(1).
    pub fn get_current_leg(&self) -> Result<Leg<'_>, FlightPlanError> {
        let active = self.active.as_ref().ok_or(FlightPlanError::NoActivePlan)?;
        let waypoints = active.plan.waypoints();
        Ok(Leg {
            start: &waypoints[active.current_leg],
            end: &waypoints[active.current_leg + 1],
            index: active.current_leg,
        })
    }

    /// Destination waypoint of the current leg. O(1).
    pub fn get_next_waypoint(&self) -> Result<&Waypoint, FlightPlanError> {
        self.get_current_leg().map(|leg| leg.end)
    }

    /// Moves the leg pointer forward once waypoint passage is detected.
    ///
    /// `Ok(false)` means the aircraft is already on the final leg; that
    /// is the expected end-of-route outcome and leaves the state
    /// untouched so the guidance loop keeps tracking the arrival.
    /// Calling with no active plan is misuse and errors instead.
    pub fn advance_to_next_leg(&mut self) -> Result<bool, FlightPlanError> {
        let active = self.active.as_mut().ok_or(FlightPlanError::NoActivePlan)?;
        if active.current_leg + 1 < active.plan.leg_count() {
            active.current_leg += 1;
            info!("Advanced to leg {} of {}", active.current_leg, active.plan.name());
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Whether no legs remain beyond the current one. True with no
    /// active plan, and true from activation onward for a two-waypoint
    /// plan (the arrival is already the next waypoint).
    pub fn is_end_of_route(&self) -> bool {
        self.active
            .as_ref()
            .is_none_or(|active| active.current_leg + 1 >= active.plan.leg_count())
    }

    /// Resolves `identifier` and inserts it at `position` (0-based, up to
    /// and including the route length).
    ///
    /// An insertion at or before the current leg's start shifts the leg
    /// pointer by +1 so the aircraft keeps flying the same logical leg;
    /// an insertion ahead of it becomes part of the remaining route.
    pub fn insert_waypoint(
        &mut self,
        identifier: &str,
        position: usize,
    ) -> Result<(), FlightPlanError> {
        // Resolve before touching any state so a failed lookup has no
        // side effect.
        let waypoint = self.resolve(identifier)?;
        let active = self.active.as_mut().ok_or(FlightPlanError::NoActivePlan)?;
        if position > active.plan.waypoint_count() {
            return Err(FlightPlanError::PositionOutOfRange(position));
        }

        active.plan.insert_waypoint(position, waypoint);
        if position <= active.current_leg {
            active.current_leg += 1;
        }
        info!(
            "Inserted {identifier} at position {position} in {}, current leg now {}",
            active.plan.name(),
            active.current_leg
        );
        Ok(())
    }

    /// Removes the waypoint at `position`, refusing to shrink the plan
    /// below two waypoints. The leg pointer shifts down when the removal
    /// is at or before the current leg's start and is clamped back into
    /// the shortened route either way.
    pub fn delete_waypoint(&mut self, position: usize) -> Result<(), FlightPlanError> {
        let active = self.active.as_mut().ok_or(FlightPlanError::NoActivePlan)?;
        if position >= active.plan.waypoint_count() {
            return Err(FlightPlanError::PositionOutOfRange(position));
        }
        if active.plan.waypoint_count() <= 2 {
            return Err(FlightPlanError::RouteTooShort);
        }

        let removed = active.plan.remove_waypoint(position);
        if position <= active.current_leg {
            active.current_leg = active.current_leg.saturating_sub(1);
        }
        active.current_leg = active.current_leg.min(active.plan.leg_count() - 1);
        info!(
            "Deleted {} from {}, current leg now {}",
            removed.identifier(),
            active.plan.name(),
            active.current_leg
        );
        Ok(())
    }

    /// Rewrites the altitude constraint of the waypoint at `position`.
    /// Lateral geometry and the leg pointer are unaffected.
    pub fn modify_waypoint(
        &mut self,
        position: usize,
        new_altitude: Option<i32>,
    ) -> Result<(), FlightPlanError> {
        let active = self.active.as_mut().ok_or(FlightPlanError::NoActivePlan)?;
        if position >= active.plan.waypoint_count() {
            return Err(FlightPlanError::PositionOutOfRange(position));
        }
        active.plan.set_altitude(position, new_altitude);
        Ok(())
    }

    /// Returns the identifiers in `route` that the lookup cannot resolve.
    /// Empty result means the route is flyable as-is.
    pub fn validate_route(&self, route: &[&str]) -> Vec<String> {
        route
            .iter()
            .filter(|identifier| self.lookup.find(identifier).is_none())
            .map(|identifier| (*identifier).to_uppercase())
            .collect()
    }

    pub fn status(&self) -> Option<FlightPlanStatus> {
        self.active.as_ref().map(|active| FlightPlanStatus {
            plan_name: active.plan.name().to_owned(),
            current_leg_index: active.current_leg,
            total_waypoints: active.plan.waypoint_count(),
            end_of_route: self.is_end_of_route(),
        })
    }

    fn resolve(&self, identifier: &str) -> Result<Waypoint, FlightPlanError> {
        self.lookup.find(identifier).ok_or_else(|| {
            warn!("Waypoint {identifier} not found");
            FlightPlanError::WaypointNotFound(identifier.to_uppercase())
        })
    }
}
