//! Flight-plan management and lateral navigation guidance for a simulated
//! aircraft.
//!
//! The crate is split along the two halves of the problem:
//! - [`guidance`] holds the stateless great-circle math and the bank-angle
//!   control law that turn aircraft position plus active-leg endpoints into
//!   a per-tick [`guidance::NavOutput`].
//! - [`flight_planning`] owns the active route and the current-leg pointer,
//!   and applies live edits (insert/delete/modify) without losing track of
//!   which leg the aircraft is flying.
//!
//! Waypoint resolution is delegated to a [`nav_database::WaypointLookup`]
//! collaborator; the manager never searches by radius or type itself.
//! Everything is synchronous: the intended caller is a fixed-cadence
//! control loop that queries the manager once per tick and combines the
//! result with [`guidance::lateral_guidance`].

#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]

pub mod flight_planning;
pub mod guidance;
pub mod logger;
pub mod nav_database;
