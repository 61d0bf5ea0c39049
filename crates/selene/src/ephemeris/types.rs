use crate::angle::normalize_degrees;
use crate::zodiac::ZodiacPosition;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The seven classical bodies covered by the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CelestialBody {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
}

impl CelestialBody {
    pub const ALL: [CelestialBody; 7] = [
        CelestialBody::Sun,
        CelestialBody::Moon,
        CelestialBody::Mercury,
        CelestialBody::Venus,
        CelestialBody::Mars,
        CelestialBody::Jupiter,
        CelestialBody::Saturn,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
        }
    }

    /// Mean longitude at J2000.0 (degrees) and mean daily motion (degrees/day).
    pub const fn mean_elements(self) -> (f64, f64) {
        match self {
            Self::Sun => (280.460, 0.985_647_4),
            Self::Moon => (218.316, 13.176_396),
            Self::Mercury => (252.250, 4.092_317),
            Self::Venus => (181.979, 1.602_130),
            Self::Mars => (355.433, 0.524_033),
            Self::Jupiter => (34.351, 0.083_091),
            Self::Saturn => (50.077, 0.033_459),
        }
    }

    /// Swiss Ephemeris planet number (SE_SUN = 0 .. SE_SATURN = 6).
    pub const fn swiss_id(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for CelestialBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Geocentric ecliptic longitude of each body, degrees in [0, 360).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyLongitudes([f64; 7]);

impl BodyLongitudes {
    /// Build from a per-body function. Every value is normalized.
    pub fn from_fn(mut f: impl FnMut(CelestialBody) -> f64) -> Self {
        let mut values = [0.0; 7];
        for body in CelestialBody::ALL {
            values[body.index()] = normalize_degrees(f(body));
        }
        Self(values)
    }

    pub fn get(&self, body: CelestialBody) -> f64 {
        self.0[body.index()]
    }

    pub fn position(&self, body: CelestialBody) -> ZodiacPosition {
        ZodiacPosition::from_longitude(self.get(body))
    }

    pub fn iter(&self) -> impl Iterator<Item = (CelestialBody, f64)> + '_ {
        CelestialBody::ALL.iter().map(move |&body| (body, self.get(body)))
    }

    /// Copy with every value forced back into [0, 360).
    pub fn normalized(&self) -> Self {
        Self::from_fn(|body| self.get(body))
    }
}
