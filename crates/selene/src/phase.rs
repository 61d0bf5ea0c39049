//! Four-quadrant Moon phase from the Sun–Moon elongation.

use crate::angle::normalize_degrees;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoonPhase {
    NewMoon,
    WaxingMoon,
    FullMoon,
    WaningMoon,
}

impl MoonPhase {
    /// Phase fraction in [0, 1): elongation of the Moon east of the Sun over a full turn.
    pub fn fraction(sun_lon: f64, moon_lon: f64) -> f64 {
        normalize_degrees(moon_lon - sun_lon) / 360.0
    }

    /// Classify a phase fraction. Boundaries belong to the upper bucket.
    pub fn from_fraction(fraction: f64) -> Self {
        if fraction < 0.125 {
            Self::NewMoon
        } else if fraction < 0.375 {
            Self::WaxingMoon
        } else if fraction < 0.625 {
            Self::FullMoon
        } else {
            Self::WaningMoon
        }
    }

    pub fn from_longitudes(sun_lon: f64, moon_lon: f64) -> Self {
        Self::from_fraction(Self::fraction(sun_lon, moon_lon))
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::NewMoon => "New Moon",
            Self::WaxingMoon => "Waxing Moon",
            Self::FullMoon => "Full Moon",
            Self::WaningMoon => "Waning Moon",
        }
    }
}

impl fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
