use itertools::izip;
use num_traits::{Float, NumCast};

/// Mean Earth radius in nautical miles, shared by every formula below.
pub const EARTH_RADIUS_NM: f64 = 3440.065;

fn cast<T: NumCast>(value: f64) -> T {
    T::from(value).unwrap()
}

/// Normalizes a bearing in degrees into `[0, 360)`.
fn wrap_360<T: Float + NumCast>(deg: T) -> T {
    let full: T = cast(360.0);
    ((deg % full) + full) % full
}

/// Great-circle distance (haversine) and initial bearing between two
/// points, in nautical miles and degrees.
///
/// Coincident points yield `(0, 0)` — `atan2(0, 0)` is zero, so there is
/// no singularity to special-case. Antipodal points may produce NaN,
/// which propagates to the caller rather than panicking.
pub fn distance_bearing<T: Float + NumCast>(lat1: T, lon1: T, lat2: T, lon2: T) -> (T, T) {
    let lat1_rad = lat1.to_radians();
    let lon1_rad = lon1.to_radians();
    let lat2_rad = lat2.to_radians();
    let lon2_rad = lon2.to_radians();

    let dlat = lat2_rad - lat1_rad;
    let dlon = lon2_rad - lon1_rad;

    let two: T = cast(2.0);
    let half_chord = (dlat / two).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (dlon / two).sin().powi(2);
    let central_angle = two * half_chord.sqrt().atan2((T::one() - half_chord).sqrt());
    let distance = cast::<T>(EARTH_RADIUS_NM) * central_angle;

    let y = dlon.sin() * lat2_rad.cos();
    let x = lat1_rad.cos() * lat2_rad.sin() - lat1_rad.sin() * lat2_rad.cos() * dlon.cos();
    let bearing = wrap_360(y.atan2(x).to_degrees());

    (distance, bearing)
}

/// Signed cross-track distance from `(lat, lon)` to the great-circle path
/// of the leg `(start_lat, start_lon) -> (end_lat, end_lon)`, in nautical
/// miles. Positive means right of course, negative left.
///
/// A zero-length leg has no defined course, so the result is NaN; the
/// caller's NaN check covers it like any other degenerate sample.
pub fn cross_track_error<T: Float + NumCast>(
    lat: T,
    lon: T,
    start_lat: T,
    start_lon: T,
    end_lat: T,
    end_lon: T,
) -> T {
    if start_lat == end_lat && start_lon == end_lon {
        return T::nan();
    }

    let radius: T = cast(EARTH_RADIUS_NM);
    let (dist_start_pos, bearing_start_pos) = distance_bearing(start_lat, start_lon, lat, lon);
    let (_, bearing_start_end) = distance_bearing(start_lat, start_lon, end_lat, end_lon);

    let angular_offset = (bearing_start_pos - bearing_start_end).to_radians();
    radius * ((dist_start_pos / radius).sin() * angular_offset.sin()).asin()
}

/// Element-wise [`distance_bearing`] over parallel coordinate slices.
pub fn distance_bearing_batch<T: Float + NumCast>(
    lat1: &[T],
    lon1: &[T],
    lat2: &[T],
    lon2: &[T],
) -> Vec<(T, T)> {
    izip!(lat1, lon1, lat2, lon2)
        .map(|(&a, &b, &c, &d)| distance_bearing(a, b, c, d))
        .collect()
}

/// Element-wise [`cross_track_error`] over parallel coordinate slices.
pub fn cross_track_error_batch<T: Float + NumCast>(
    lat: &[T],
    lon: &[T],
    start_lat: &[T],
    start_lon: &[T],
    end_lat: &[T],
    end_lon: &[T],
) -> Vec<T> {
    izip!(lat, lon, start_lat, start_lon, end_lat, end_lon)
        .map(|(&a, &b, &c, &d, &e, &f)| cross_track_error(a, b, c, d, e, f))
        .collect()
}
