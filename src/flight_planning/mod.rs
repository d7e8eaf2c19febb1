//! Flight plan ownership and the active-leg state machine.

mod flight_plan;
mod manager;

pub use flight_plan::FlightPlan;
pub use manager::{FlightPlanError, FlightPlanManager, FlightPlanStatus, Leg};
