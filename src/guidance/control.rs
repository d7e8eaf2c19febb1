use num_traits::{Float, NumCast};

/// Proportional gain of the cross-track control law, in degrees of bank
/// per nautical mile of error.
pub const XTE_GAIN_DEG_PER_NM: f64 = 5.0;

/// Hard limit on the commanded bank angle, in degrees.
pub const MAX_BANK_DEG: f64 = 25.0;

/// Proportional bank-angle command from cross-track error:
/// `bank = -K * xte`, saturated at ±[`MAX_BANK_DEG`].
///
/// A positive (right-of-course) error commands a left bank and vice
/// versa. `_bearing_deg` is part of the interface for symmetry with the
/// other guidance functions and does not affect the output. NaN input
/// yields NaN output — IEEE min/max would otherwise swallow it into the
/// clamp bound.
pub fn bank_angle_cmd<T: Float + NumCast>(xte_nm: T, _bearing_deg: T) -> T {
    if xte_nm.is_nan() {
        return T::nan();
    }
    let max_bank = T::from(MAX_BANK_DEG).unwrap();
    let raw = -T::from(XTE_GAIN_DEG_PER_NM).unwrap() * xte_nm;
    raw.max(-max_bank).min(max_bank)
}

/// Element-wise [`bank_angle_cmd`] over parallel slices.
pub fn bank_angle_cmd_batch<T: Float + NumCast>(xte_nm: &[T], bearing_deg: &[T]) -> Vec<T> {
    xte_nm
        .iter()
        .zip(bearing_deg)
        .map(|(&xte, &bearing)| bank_angle_cmd(xte, bearing))
        .collect()
}
