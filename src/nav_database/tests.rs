use super::*;

fn ksfo() -> Waypoint {
    Waypoint::new("KSFO", 37.6213, -122.3790, WaypointKind::Airport)
        .unwrap()
        .with_altitude(13)
}

#[test]
fn test_waypoint_identifier_uppercased() {
    let wp = Waypoint::new("wesla", 37.7000, -122.4167, WaypointKind::Fix).unwrap();
    assert_eq!(wp.identifier(), "WESLA");
}

#[test]
fn test_waypoint_rejects_bad_latitude() {
    let err = Waypoint::new("BAD", 91.0, 0.0, WaypointKind::Fix).unwrap_err();
    assert_eq!(err, WaypointError::InvalidLatitude(91.0));
    assert!(Waypoint::new("BAD", -90.5, 0.0, WaypointKind::Fix).is_err());
}

#[test]
fn test_waypoint_rejects_bad_longitude() {
    let err = Waypoint::new("BAD", 0.0, -180.1, WaypointKind::Fix).unwrap_err();
    assert_eq!(err, WaypointError::InvalidLongitude(-180.1));
}

#[test]
fn test_waypoint_boundary_coordinates_accepted() {
    assert!(Waypoint::new("NP", 90.0, 0.0, WaypointKind::Fix).is_ok());
    assert!(Waypoint::new("DL", 0.0, 180.0, WaypointKind::Fix).is_ok());
}

#[test]
fn test_altitude_constraint() {
    let wp = ksfo();
    assert_eq!(wp.altitude(), Some(13));
    let bare = Waypoint::new("SFO", 37.6189, -122.3750, WaypointKind::Vor).unwrap();
    assert_eq!(bare.altitude(), None);
}

#[test]
fn test_kind_string_round_trip() {
    assert_eq!(WaypointKind::from("VOR"), WaypointKind::Vor);
    assert_eq!(WaypointKind::from("airport"), WaypointKind::Airport);
    // Unknown strings fall back to a plain fix.
    assert_eq!(WaypointKind::from("somewhere"), WaypointKind::Fix);
    let s: &'static str = WaypointKind::Tacan.into();
    assert_eq!(s, "tacan");
}

#[test]
fn test_table_find_is_case_insensitive() {
    let table: WaypointTable = [ksfo()].into_iter().collect();
    assert!(table.find("ksfo").is_some());
    assert!(table.find("KSFO").is_some());
    assert!(table.find("KOAK").is_none());
}

#[test]
fn test_table_insert_replaces() {
    let mut table = WaypointTable::new();
    assert!(table.insert(ksfo()).is_none());
    let replaced = table.insert(ksfo());
    assert!(replaced.is_some());
    assert_eq!(table.len(), 1);
}
