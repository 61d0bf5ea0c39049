use crate::ephemeris::CelestialBody;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Default orb for every aspect, in degrees.
pub const DEFAULT_ORB: f64 = 8.0;

/// The five major (Ptolemaic) aspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectKind {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

impl AspectKind {
    pub const ALL: [AspectKind; 5] = [
        AspectKind::Conjunction,
        AspectKind::Sextile,
        AspectKind::Square,
        AspectKind::Trine,
        AspectKind::Opposition,
    ];

    pub const fn angle(self) -> f64 {
        match self {
            Self::Conjunction => 0.0,
            Self::Sextile => 60.0,
            Self::Square => 90.0,
            Self::Trine => 120.0,
            Self::Opposition => 180.0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Conjunction => "conjunction",
            Self::Sextile => "sextile",
            Self::Square => "square",
            Self::Trine => "trine",
            Self::Opposition => "opposition",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for AspectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An aspect between two bodies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aspect {
    pub first: CelestialBody,
    pub second: CelestialBody,
    pub kind: AspectKind,
    /// Deviation from the exact aspect angle, degrees.
    pub orb: f64,
    /// Separation between the two longitudes, in [0, 180].
    pub separation: f64,
}

/// Settings for aspect calculations
#[derive(Debug, Clone)]
pub struct AspectSettings {
    /// Orb used when an aspect has no override.
    pub default_orb: f64,
    /// Orb overrides per aspect type
    pub orbs: HashMap<AspectKind, f64>,
}

impl AspectSettings {
    pub fn with_orb(default_orb: f64) -> Self {
        Self {
            default_orb,
            orbs: HashMap::new(),
        }
    }

    pub fn orb_for(&self, kind: AspectKind) -> f64 {
        self.orbs.get(&kind).copied().unwrap_or(self.default_orb)
    }
}

impl Default for AspectSettings {
    fn default() -> Self {
        Self::with_orb(DEFAULT_ORB)
    }
}
