//! The daily sky snapshot: positions, moon phase and aspect of the day.

use crate::aspects::{AspectPicker, DetectedAspectPicker};
use crate::calendar::CalendarDate;
use crate::ephemeris::{BodyLongitudes, CelestialBody, Ephemeris, MeanLongitudeEphemeris};
use crate::phase::MoonPhase;
use crate::zodiac::ZodiacPosition;
use serde::Serialize;

/// Immutable result of one snapshot computation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySnapshot {
    pub sun: String,
    pub moon: String,
    pub mercury: String,
    pub venus: String,
    pub mars: String,
    pub jupiter: String,
    pub saturn: String,
    pub moon_phase: MoonPhase,
    pub daily_aspect: String,
    #[serde(skip)]
    pub date: CalendarDate,
    #[serde(skip)]
    pub longitudes: BodyLongitudes,
}

impl DailySnapshot {
    pub fn position(&self, body: CelestialBody) -> ZodiacPosition {
        self.longitudes.position(body)
    }

    pub fn description(&self, body: CelestialBody) -> &str {
        match body {
            CelestialBody::Sun => &self.sun,
            CelestialBody::Moon => &self.moon,
            CelestialBody::Mercury => &self.mercury,
            CelestialBody::Venus => &self.venus,
            CelestialBody::Mars => &self.mars,
            CelestialBody::Jupiter => &self.jupiter,
            CelestialBody::Saturn => &self.saturn,
        }
    }
}

/// e.g. `Sun in Capricorn at 10°`
pub fn describe_body(body: CelestialBody, position: ZodiacPosition) -> String {
    format!("{} in {}", body, position)
}

type SharedEphemeris = Box<dyn Ephemeris + Send + Sync>;
type SharedPicker = Box<dyn AspectPicker + Send + Sync>;

/// Computes [`DailySnapshot`]s. The precise backend, if any, is fixed at
/// construction; the mean-longitude model is always there to fall back on.
pub struct SnapshotCalculator {
    precise: Option<SharedEphemeris>,
    mean: MeanLongitudeEphemeris,
    picker: SharedPicker,
}

impl SnapshotCalculator {
    pub fn new(precise: Option<SharedEphemeris>, picker: SharedPicker) -> Self {
        Self {
            precise,
            mean: MeanLongitudeEphemeris::new(),
            picker,
        }
    }

    /// Name of the backend tried first.
    pub fn backend_name(&self) -> &str {
        match &self.precise {
            Some(eph) => eph.name(),
            None => self.mean.name(),
        }
    }

    /// Longitudes for `date`. A failing precise backend degrades to the mean
    /// model with a warning; this never errors. Non-finite output counts as
    /// a failure.
    pub fn longitudes(&self, date: CalendarDate) -> BodyLongitudes {
        if let Some(precise) = &self.precise {
            match precise.longitudes(date) {
                Ok(lons) if lons.iter().all(|(_, lon)| lon.is_finite()) => {
                    return lons.normalized();
                }
                Ok(lons) => {
                    log::warn!(
                        "{} ephemeris gave non-finite longitudes for {}, using mean: {:?}",
                        precise.name(),
                        date,
                        lons
                    );
                }
                Err(e) => {
                    log::warn!(
                        "{} ephemeris failed for {}, using mean longitudes: {}",
                        precise.name(),
                        date,
                        e
                    );
                }
            }
        }
        self.mean.compute(date)
    }

    pub fn compute_snapshot(&self, date: CalendarDate) -> DailySnapshot {
        let longitudes = self.longitudes(date);
        log::debug!("longitudes for {}: {:?}", date, longitudes);

        let describe = |body: CelestialBody| describe_body(body, longitudes.position(body));
        let moon_phase = MoonPhase::from_longitudes(
            longitudes.get(CelestialBody::Sun),
            longitudes.get(CelestialBody::Moon),
        );

        DailySnapshot {
            sun: describe(CelestialBody::Sun),
            moon: describe(CelestialBody::Moon),
            mercury: describe(CelestialBody::Mercury),
            venus: describe(CelestialBody::Venus),
            mars: describe(CelestialBody::Mars),
            jupiter: describe(CelestialBody::Jupiter),
            saturn: describe(CelestialBody::Saturn),
            moon_phase,
            daily_aspect: self.picker.pick(&longitudes),
            date,
            longitudes,
        }
    }
}

impl Default for SnapshotCalculator {
    fn default() -> Self {
        Self::new(None, Box::new(DetectedAspectPicker::default()))
    }
}
