//! First-order mean-longitude model.
//!
//! Each body moves uniformly from its J2000.0 mean longitude at its mean daily
//! rate. No perturbations, no equation of centre, no geocentric correction for
//! the planets, so errors of several degrees are expected. The constants are
//! fixed so that output stays stable across releases.

use crate::angle::normalize_degrees;
use crate::calendar::CalendarDate;
use crate::ephemeris::{BodyLongitudes, CelestialBody, Ephemeris, EphemerisError};

/// Mean longitude of `body` `days` days after J2000.0, in [0, 360).
pub fn mean_longitude(body: CelestialBody, days: f64) -> f64 {
    let (l0, rate) = body.mean_elements();
    normalize_degrees(l0 + rate * days)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MeanLongitudeEphemeris;

impl MeanLongitudeEphemeris {
    pub fn new() -> Self {
        Self
    }

    /// Longitudes for every body at 0h of `date`. Never fails.
    pub fn compute(&self, date: CalendarDate) -> BodyLongitudes {
        let days = date.days_since_j2000();
        BodyLongitudes::from_fn(|body| mean_longitude(body, days))
    }
}

impl Ephemeris for MeanLongitudeEphemeris {
    fn name(&self) -> &str {
        "mean"
    }

    fn longitudes(&self, date: CalendarDate) -> Result<BodyLongitudes, EphemerisError> {
        Ok(self.compute(date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_values_are_the_constants() {
        for body in CelestialBody::ALL {
            let (l0, _) = body.mean_elements();
            assert!((mean_longitude(body, 0.0) - l0).abs() < 1e-9, "{body}");
        }
    }

    #[test]
    fn sun_advances_about_a_degree_per_day() {
        let a = mean_longitude(CelestialBody::Sun, 0.0);
        let b = mean_longitude(CelestialBody::Sun, 1.0);
        assert!((b - a - 0.985_647_4).abs() < 1e-9);
    }

    #[test]
    fn pre_epoch_is_non_negative() {
        // Raw Moon expression here is deeply negative.
        let days = CalendarDate::new(1900, 1, 1).days_since_j2000();
        assert!(218.316 + 13.176_396 * days < 0.0);
        for body in CelestialBody::ALL {
            let lon = mean_longitude(body, days);
            assert!((0.0..360.0).contains(&lon), "{body}: {lon}");
        }
    }

    #[test]
    fn trait_path_matches_inherent() {
        let eph = MeanLongitudeEphemeris::new();
        let date = CalendarDate::new(2024, 6, 21);
        assert_eq!(eph.longitudes(date).unwrap(), eph.compute(date));
        assert_eq!(eph.name(), "mean");
    }
}
