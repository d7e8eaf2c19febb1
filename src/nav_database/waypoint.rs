use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Category of a navigation fix, as carried by the navigation database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WaypointKind {
    Airport,
    Vor,
    Ndb,
    Dme,
    Tacan,
    Intersection,
    Fix,
}

impl From<&str> for WaypointKind {
    fn from(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "airport" => WaypointKind::Airport,
            "vor" => WaypointKind::Vor,
            "ndb" => WaypointKind::Ndb,
            "dme" => WaypointKind::Dme,
            "tacan" => WaypointKind::Tacan,
            "intersection" => WaypointKind::Intersection,
            _ => WaypointKind::Fix,
        }
    }
}

impl From<WaypointKind> for &'static str {
    fn from(value: WaypointKind) -> Self {
        match value {
            WaypointKind::Airport => "airport",
            WaypointKind::Vor => "vor",
            WaypointKind::Ndb => "ndb",
            WaypointKind::Dme => "dme",
            WaypointKind::Tacan => "tacan",
            WaypointKind::Intersection => "intersection",
            WaypointKind::Fix => "fix",
        }
    }
}

#[derive(Debug, Display, Clone, PartialEq)]
pub enum WaypointError {
    #[strum(to_string = "latitude {0} outside [-90, 90]")]
    InvalidLatitude(f64),
    #[strum(to_string = "longitude {0} outside [-180, 180]")]
    InvalidLongitude(f64),
}

impl std::error::Error for WaypointError {}

/// A named geographic point, validated once at construction.
///
/// Identifiers are normalized to uppercase so lookups and plan edits are
/// case-insensitive. Coordinates are geodetic degrees; the altitude
/// constraint, when present, is in feet. Instances are immutable once
/// resolved from the lookup collaborator — only the altitude constraint
/// may be rewritten, and only through the flight plan manager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    identifier: String,
    latitude: f64,
    longitude: f64,
    altitude: Option<i32>,
    kind: WaypointKind,
}

impl Waypoint {
    pub fn new(
        identifier: &str,
        latitude: f64,
        longitude: f64,
        kind: WaypointKind,
    ) -> Result<Self, WaypointError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(WaypointError::InvalidLatitude(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(WaypointError::InvalidLongitude(longitude));
        }
        Ok(Self {
            identifier: identifier.to_uppercase(),
            latitude,
            longitude,
            altitude: None,
            kind,
        })
    }

    /// Attaches an altitude constraint in feet.
    #[must_use]
    pub fn with_altitude(mut self, feet: i32) -> Self {
        self.altitude = Some(feet);
        self
    }

    pub fn identifier(&self) -> &str { &self.identifier }

    pub const fn latitude(&self) -> f64 { self.latitude }

    pub const fn longitude(&self) -> f64 { self.longitude }

    pub const fn altitude(&self) -> Option<i32> { self.altitude }

    pub const fn kind(&self) -> WaypointKind { self.kind }

    pub(crate) fn set_altitude(&mut self, feet: Option<i32>) { self.altitude = feet; }
}
