//! Angle helpers shared by the ephemeris, phase and aspect code.

/// Normalize an angle to [0, 360) degrees.
///
/// The second modulo matters: `x % 360 + 360` can round up to exactly 360.0
/// for tiny negative remainders.
pub fn normalize_degrees(deg: f64) -> f64 {
    ((deg % 360.0) + 360.0) % 360.0
}

/// Shortest angular distance between two longitudes, in [0, 180].
pub fn angular_separation(lon1: f64, lon2: f64) -> f64 {
    let raw_diff = normalize_degrees(lon1 - lon2);
    if raw_diff > 180.0 {
        360.0 - raw_diff
    } else {
        raw_diff
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_zero() {
        assert_eq!(normalize_degrees(0.0), 0.0);
    }

    #[test]
    fn normalize_wraps_full_turn() {
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert!((normalize_degrees(730.0) - 10.0).abs() < 1e-10);
    }

    #[test]
    fn normalize_negative() {
        assert!((normalize_degrees(-10.0) - 350.0).abs() < 1e-12);
        assert!((normalize_degrees(-370.0) - 350.0).abs() < 1e-10);
    }

    #[test]
    fn normalize_tiny_negative_stays_below_360() {
        let n = normalize_degrees(-1e-15);
        assert!((0.0..360.0).contains(&n), "got {n}");
    }

    #[test]
    fn separation_takes_short_way_round() {
        assert!((angular_separation(350.0, 10.0) - 20.0).abs() < 1e-12);
        assert!((angular_separation(10.0, 350.0) - 20.0).abs() < 1e-12);
        assert!((angular_separation(100.0, 280.0) - 180.0).abs() < 1e-12);
    }
}
