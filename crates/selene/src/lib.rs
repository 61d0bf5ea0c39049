pub mod angle;
pub mod aspects;
pub mod calendar;
pub mod ephemeris;
pub mod forecast;
pub mod persona;
pub mod phase;
pub mod snapshot;
pub mod zodiac;

pub use aspects::{
    AspectCalculator, AspectKind, AspectPicker, AspectSettings, DetectedAspectPicker,
    RandomAspectPicker,
};
pub use calendar::CalendarDate;
pub use ephemeris::{
    BodyLongitudes, CelestialBody, Ephemeris, EphemerisError, MeanLongitudeEphemeris,
};
pub use forecast::{ForecastContext, ForecastSections};
pub use persona::Persona;
pub use phase::MoonPhase;
pub use snapshot::{DailySnapshot, SnapshotCalculator};
pub use zodiac::{ZodiacPosition, ZodiacSign};

#[cfg(feature = "swisseph")]
pub use ephemeris::SwissEphemerisAdapter;

/// Sky snapshot for `date` using mean longitudes and detected aspects.
pub fn compute_snapshot(date: CalendarDate) -> DailySnapshot {
    SnapshotCalculator::default().compute_snapshot(date)
}
