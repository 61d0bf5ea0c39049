pub mod error;
pub mod mean;
pub mod types;

#[cfg(feature = "swisseph")]
pub mod adapter;

pub use error::EphemerisError;
pub use mean::{mean_longitude, MeanLongitudeEphemeris};
pub use types::{BodyLongitudes, CelestialBody};

#[cfg(feature = "swisseph")]
pub use adapter::SwissEphemerisAdapter;

use crate::calendar::CalendarDate;

/// A source of geocentric ecliptic longitudes for a date.
pub trait Ephemeris {
    /// Short backend name used in logs and config ("mean", "swiss").
    fn name(&self) -> &str;

    fn longitudes(&self, date: CalendarDate) -> Result<BodyLongitudes, EphemerisError>;
}
