//! Stateless lateral navigation math.
//!
//! All functions here are pure: geodetic coordinates in, numbers out.
//! The flight plan manager never calls into this module — the control
//! loop combines the two, typically through [`lateral_guidance`].

mod control;
mod great_circle;

pub use control::{MAX_BANK_DEG, XTE_GAIN_DEG_PER_NM, bank_angle_cmd, bank_angle_cmd_batch};
pub use great_circle::{
    EARTH_RADIUS_NM, cross_track_error, cross_track_error_batch, distance_bearing,
    distance_bearing_batch,
};

use serde::{Deserialize, Serialize};


/// One tick's worth of lateral guidance, as handed to the display and the
/// control-law caller.
///
/// Cross-track error is signed right-positive, course is in [0, 360) and
/// the bank command is hard-clamped to ±[`MAX_BANK_DEG`]. All fields go
/// NaN rather than erroring when the underlying geometry is degenerate;
/// callers must NaN-check before acting on the bank command.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NavOutput {
    pub cross_track_error_nm: f64,
    pub distance_to_go_nm: f64,
    pub desired_course_deg: f64,
    pub bank_angle_cmd_deg: f64,
}

/// Computes the full guidance record for one control-loop tick.
///
/// `(lat, lon)` is the aircraft position, the remaining arguments are the
/// active leg's start and end coordinates. Distance-to-go and desired
/// course are taken from the aircraft position to the leg end.
#[must_use]
pub fn lateral_guidance(
    lat: f64,
    lon: f64,
    start_lat: f64,
    start_lon: f64,
    end_lat: f64,
    end_lon: f64,
) -> NavOutput {
    let xte = cross_track_error(lat, lon, start_lat, start_lon, end_lat, end_lon);
    let (dtg, course) = distance_bearing(lat, lon, end_lat, end_lon);
    NavOutput {
        cross_track_error_nm: xte,
        distance_to_go_nm: dtg,
        desired_course_deg: course,
        bank_angle_cmd_deg: bank_angle_cmd(xte, course),
    }
}
