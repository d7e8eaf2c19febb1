#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]

//! Demo flight: seeds a Bay-Area waypoint table, builds and activates a
//! flight plan, then flies it with the lateral guidance loop at a fixed
//! tick rate, editing the route mid-flight. Set `LOG_FMS_TICKS=1` to see
//! per-tick guidance output.

use fms_ob::flight_planning::FlightPlanManager;
use fms_ob::guidance::{distance_bearing, lateral_guidance};
use fms_ob::nav_database::{Waypoint, WaypointKind, WaypointTable};
use fms_ob::{fatal, info, log, tick, warn};

const TICK_HZ: f64 = 50.0;
const GROUND_SPEED_KT: f64 = 2500.0;
const PASSAGE_THRESHOLD_NM: f64 = 0.5;
const MAX_TICKS: u32 = 100_000;

fn main() {
    let table = seed_waypoints();
    info!("Seeded {} waypoints", table.len());

    let mut manager = FlightPlanManager::new(table);

    let missing = manager.validate_route(&["KSFO", "KOAK", "SFO", "ZZZZZ"]);
    if !missing.is_empty() {
        warn!("Route check flagged unknown identifiers: {missing:?}");
    }

    // Unresolvable identifiers fail plan creation outright.
    if let Err(e) = manager.create_flight_plan("BROKEN", "KSFO", "KOAK", &["ZZZZZ"]) {
        warn!("Rejected plan: {e}");
    }

    let plan = match manager.create_flight_plan("SFO_TO_OAK", "KSFO", "KOAK", &["SFO", "FAITH"]) {
        Ok(p) => p,
        Err(e) => fatal!("Could not build demo plan: {e}"),
    };
    log!("Route length: {:.1} nm", plan.total_distance_nm());
    manager.set_active_plan(plan);

    fly(&mut manager);

    if let Some(status) = manager.status() {
        info!(
            "Arrived: plan {} finished on leg {} of {} waypoints",
            status.plan_name,
            status.current_leg_index,
            status.total_waypoints
        );
    }
}

fn seed_waypoints() -> WaypointTable {
    let seeds = [
        ("KSFO", 37.6213, -122.3790, Some(13), WaypointKind::Airport),
        ("KOAK", 37.7214, -122.2208, Some(9), WaypointKind::Airport),
        ("SFO", 37.6189, -122.3750, None, WaypointKind::Vor),
        ("FAITH", 37.2833, -122.0167, None, WaypointKind::Fix),
        ("WESLA", 37.7000, -122.4167, None, WaypointKind::Fix),
    ];
    seeds
        .into_iter()
        .map(|(id, lat, lon, alt, kind)| match Waypoint::new(id, lat, lon, kind) {
            Ok(wp) => match alt {
                Some(feet) => wp.with_altitude(feet),
                None => wp,
            },
            Err(e) => fatal!("Bad seed waypoint {id}: {e}"),
        })
        .collect()
}

/// Marches a simulated aircraft along the active plan until the arrival
/// waypoint is passed, advancing legs on passage and inserting WESLA into
/// the remaining route after the first leg switch.
fn fly(manager: &mut FlightPlanManager<WaypointTable>) {
    let step_nm = GROUND_SPEED_KT / 3600.0 / TICK_HZ;
    let (mut lat, mut lon) = match manager.get_current_leg() {
        Ok(leg) => (leg.start.latitude(), leg.start.longitude()),
        Err(e) => fatal!("No leg to fly: {e}"),
    };
    let mut rerouted = false;

    for tick_count in 0..MAX_TICKS {
        let leg = match manager.get_current_leg() {
            Ok(leg) => leg,
            Err(e) => fatal!("Lost the active plan mid-flight: {e}"),
        };
        let output = lateral_guidance(
            lat,
            lon,
            leg.start.latitude(),
            leg.start.longitude(),
            leg.end.latitude(),
            leg.end.longitude(),
        );
        tick!(
            "leg {} xte {:+.3} nm, dtg {:.2} nm, crs {:.1}, bank {:+.1}",
            leg.index,
            output.cross_track_error_nm,
            output.distance_to_go_nm,
            output.desired_course_deg,
            output.bank_angle_cmd_deg
        );

        if output.distance_to_go_nm < PASSAGE_THRESHOLD_NM {
            let advanced = match manager.advance_to_next_leg() {
                Ok(advanced) => advanced,
                Err(e) => fatal!("Leg advance failed: {e}"),
            };
            if !advanced {
                info!("Reached arrival after {tick_count} ticks");
                return;
            }
            if !rerouted {
                // Controller adds a fix ahead of us once we pass SFO.
                rerouted = true;
                if let Err(e) = manager.insert_waypoint("WESLA", 2) {
                    warn!("Reroute rejected: {e}");
                }
            }
            continue;
        }

        // Fly straight at the leg end waypoint.
        let (_, course_deg) =
            distance_bearing(lat, lon, leg.end.latitude(), leg.end.longitude());
        let course = course_deg.to_radians();
        lat += step_nm * course.cos() / 60.0;
        lon += step_nm * course.sin() / (60.0 * lat.to_radians().cos());
    }
    warn!("Tick budget exhausted before reaching the arrival");
}
