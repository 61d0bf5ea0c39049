use crate::angle::angular_separation;
use crate::aspects::types::{Aspect, AspectKind, AspectSettings};
use crate::ephemeris::{BodyLongitudes, CelestialBody};
use std::cmp::Ordering;

/// Aspect calculator
#[derive(Debug, Clone, Default)]
pub struct AspectCalculator {
    settings: AspectSettings,
}

impl AspectCalculator {
    pub fn new(settings: AspectSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &AspectSettings {
        &self.settings
    }

    /// Closest major aspect between two longitudes, if any is within orb.
    /// Returns the aspect and its orb. On equal orbs the smaller angle wins.
    pub fn calculate_aspect(&self, lon1: f64, lon2: f64) -> Option<(AspectKind, f64)> {
        let angle_diff = angular_separation(lon1, lon2);

        let mut best: Option<(AspectKind, f64)> = None;
        for kind in AspectKind::ALL {
            let orb_value = (angle_diff - kind.angle()).abs();
            if orb_value.is_nan() || orb_value > self.settings.orb_for(kind) {
                continue;
            }
            match best {
                Some((_, best_orb)) if best_orb <= orb_value => {}
                _ => best = Some((kind, orb_value)),
            }
        }
        best
    }

    /// Every in-orb aspect between distinct bodies, tightest first. Ties keep
    /// body order (Sun, Moon, Mercury, ...).
    pub fn find_aspects(&self, longitudes: &BodyLongitudes) -> Vec<Aspect> {
        let bodies = CelestialBody::ALL;
        let mut aspects = Vec::new();

        for i in 0..bodies.len() {
            for j in (i + 1)..bodies.len() {
                let (first, second) = (bodies[i], bodies[j]);
                let lon1 = longitudes.get(first);
                let lon2 = longitudes.get(second);

                if let Some((kind, orb)) = self.calculate_aspect(lon1, lon2) {
                    aspects.push(Aspect {
                        first,
                        second,
                        kind,
                        orb,
                        separation: angular_separation(lon1, lon2),
                    });
                }
            }
        }

        // sort_by is stable, so pair order survives for equal orbs
        aspects.sort_by(|a, b| a.orb.partial_cmp(&b.orb).unwrap_or(Ordering::Equal));
        aspects
    }

    /// The tightest aspect of the day.
    pub fn strongest(&self, longitudes: &BodyLongitudes) -> Option<Aspect> {
        self.find_aspects(longitudes).into_iter().next()
    }
}
