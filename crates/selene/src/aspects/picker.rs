//! Strategies for choosing the one "aspect of the day" phrase.

use crate::aspects::calculator::AspectCalculator;
use crate::aspects::types::{Aspect, AspectSettings};
use crate::ephemeris::{BodyLongitudes, CelestialBody};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::sync::Mutex;

pub const NO_MAJOR_ASPECTS: &str = "No major aspects today";

/// Chooses the daily aspect phrase for a set of longitudes.
pub trait AspectPicker {
    fn pick(&self, longitudes: &BodyLongitudes) -> String;
}

/// Render a detected aspect, e.g. `Sun–Mercury conjunction in Capricorn`.
pub fn describe_aspect(aspect: &Aspect, longitudes: &BodyLongitudes) -> String {
    format!(
        "{}–{} {} in {}",
        aspect.first,
        aspect.second,
        aspect.kind,
        longitudes.position(aspect.first).sign
    )
}

/// Picks the tightest real aspect among the seven bodies.
#[derive(Debug, Clone, Default)]
pub struct DetectedAspectPicker {
    calculator: AspectCalculator,
}

impl DetectedAspectPicker {
    pub fn new(settings: AspectSettings) -> Self {
        Self {
            calculator: AspectCalculator::new(settings),
        }
    }
}

impl AspectPicker for DetectedAspectPicker {
    fn pick(&self, longitudes: &BodyLongitudes) -> String {
        match self.calculator.strongest(longitudes) {
            Some(aspect) => describe_aspect(&aspect, longitudes),
            None => NO_MAJOR_ASPECTS.to_string(),
        }
    }
}

/// Canned phrases for the random picker. `{sun}` is replaced by the Sun's sign.
pub const CANNED_ASPECTS: [&str; 5] = [
    "Sun–Mercury conjunction in {sun}",
    "Moon–Venus trine",
    "Mars–Sun square",
    "Venus–Jupiter sextile",
    "Moon–Sun opposition",
];

/// Uniform choice among [`CANNED_ASPECTS`], ignoring the actual geometry.
pub struct RandomAspectPicker<R> {
    rng: Mutex<R>,
}

impl<R: Rng> RandomAspectPicker<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl RandomAspectPicker<ChaCha20Rng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha20Rng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(ChaCha20Rng::from_entropy())
    }
}

impl<R: Rng> AspectPicker for RandomAspectPicker<R> {
    fn pick(&self, longitudes: &BodyLongitudes) -> String {
        let index = {
            let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            rng.gen_range(0..CANNED_ASPECTS.len())
        };
        let sun_sign = longitudes.position(CelestialBody::Sun).sign;
        CANNED_ASPECTS[index].replace("{sun}", sun_sign.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sky(lons: [f64; 7]) -> BodyLongitudes {
        BodyLongitudes::from_fn(|body| lons[body.index()])
    }

    #[test]
    fn detected_prefers_tightest_pair() {
        // Sun–Moon 3° apart, Mercury–Venus exactly square.
        let lons = sky([10.0, 13.0, 200.0, 290.0, 143.0, 325.0, 84.0]);
        let phrase = DetectedAspectPicker::default().pick(&lons);
        assert_eq!(phrase, "Mercury–Venus square in Libra");
    }

    #[test]
    fn detected_reports_empty_sky() {
        let lons = sky([0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        let picker = DetectedAspectPicker::new(AspectSettings::with_orb(-1.0));
        assert_eq!(picker.pick(&lons), NO_MAJOR_ASPECTS);
    }

    #[test]
    fn seeded_random_is_reproducible() {
        let lons = sky([280.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        let a = RandomAspectPicker::seeded(7);
        let b = RandomAspectPicker::seeded(7);
        for _ in 0..20 {
            assert_eq!(a.pick(&lons), b.pick(&lons));
        }
    }

    #[test]
    fn random_substitutes_sun_sign() {
        let lons = sky([280.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        let picker = RandomAspectPicker::seeded(1);
        for _ in 0..50 {
            let phrase = picker.pick(&lons);
            assert!(!phrase.contains("{sun}"));
            if phrase.starts_with("Sun–Mercury") {
                assert_eq!(phrase, "Sun–Mercury conjunction in Capricorn");
            }
        }
    }
}
