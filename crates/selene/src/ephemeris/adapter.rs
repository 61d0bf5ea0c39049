use crate::calendar::CalendarDate;
use crate::ephemeris::{BodyLongitudes, CelestialBody, Ephemeris, EphemerisError};
use std::env;
use std::path::{Path, PathBuf};
use swisseph::swe::{calc_ut, julday};

// FLG_SWIEPH: read positions from the Swiss Ephemeris data files.
const FLG_SWIEPH: u32 = 2;
// GREG_CAL
const GREGORIAN: i32 = 1;

/// Precise backend backed by the Swiss Ephemeris.
pub struct SwissEphemerisAdapter {
    ephemeris_path: PathBuf,
}

impl SwissEphemerisAdapter {
    /// Create a new adapter with optional ephemeris path. Falls back to
    /// `SWISS_EPHEMERIS_PATH`, then `/usr/local/share/swisseph`.
    pub fn new(ephemeris_path: Option<PathBuf>) -> Result<Self, EphemerisError> {
        let path = ephemeris_path.unwrap_or_else(|| {
            env::var("SWISS_EPHEMERIS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("/usr/local/share/swisseph"))
        });

        if !path.exists() {
            return Err(EphemerisError::FileNotFound {
                path: path.display().to_string(),
                message: "Ephemeris path does not exist. Please ensure Swiss Ephemeris data files are installed.".to_string(),
            });
        }

        Ok(Self {
            ephemeris_path: path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.ephemeris_path
    }
}

impl Ephemeris for SwissEphemerisAdapter {
    fn name(&self) -> &str {
        "swiss"
    }

    fn longitudes(&self, date: CalendarDate) -> Result<BodyLongitudes, EphemerisError> {
        let jd = julday(date.year, date.month as i32, date.day as i32, 0.0, GREGORIAN);

        let mut values = [0.0; 7];
        for body in CelestialBody::ALL {
            let result = calc_ut(jd, body.swiss_id() as u32, FLG_SWIEPH).map_err(|e| {
                EphemerisError::CalculationFailed {
                    body,
                    date,
                    message: format!("Swiss Ephemeris error: {}", e),
                }
            })?;
            values[body.index()] = result.out[0];
        }

        Ok(BodyLongitudes::from_fn(|body| values[body.index()]))
    }
}
