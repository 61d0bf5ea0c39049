use crate::calendar::CalendarDate;
use crate::ephemeris::CelestialBody;
use thiserror::Error;

/// Errors that can occur during ephemeris calculations
#[derive(Error, Debug)]
pub enum EphemerisError {
    #[error("Ephemeris file not found at path: {path}. {message}")]
    FileNotFound { path: String, message: String },
    #[error("Failed to calculate position for {body} at {date}: {message}")]
    CalculationFailed {
        body: CelestialBody,
        date: CalendarDate,
        message: String,
    },
    #[error("Ephemeris backend unavailable: {0}")]
    Unavailable(String),
}
