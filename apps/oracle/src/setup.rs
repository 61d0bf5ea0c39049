//! Turn loaded settings into a ready [`SnapshotCalculator`].

use selene::aspects::{
    AspectKind, AspectPicker, AspectSettings, DetectedAspectPicker, RandomAspectPicker,
};
use selene::{Ephemeris, SnapshotCalculator};
use selene_config::{AspectConfig, AspectMode, Backend, SeleneSettings};

pub fn aspect_settings(config: &AspectConfig) -> anyhow::Result<AspectSettings> {
    let mut settings = AspectSettings::with_orb(config.orb);
    for (name, orb) in &config.orbs {
        let kind = AspectKind::from_name(name)
            .ok_or_else(|| anyhow::anyhow!("Unknown aspect in aspects.orbs: {name}"))?;
        settings.orbs.insert(kind, *orb);
    }
    Ok(settings)
}

type SharedPicker = Box<dyn AspectPicker + Send + Sync>;
type SharedEphemeris = Box<dyn Ephemeris + Send + Sync>;

pub fn picker(config: &AspectConfig) -> anyhow::Result<SharedPicker> {
    let picker: SharedPicker = match config.mode {
        AspectMode::Detected => Box::new(DetectedAspectPicker::new(aspect_settings(config)?)),
        AspectMode::Random => match config.seed {
            Some(seed) => Box::new(RandomAspectPicker::seeded(seed)),
            None => Box::new(RandomAspectPicker::from_entropy()),
        },
    };
    Ok(picker)
}

#[cfg(feature = "swisseph")]
fn precise(settings: &SeleneSettings) -> Option<SharedEphemeris> {
    if settings.ephemeris.backend == Backend::Mean {
        return None;
    }
    match selene::SwissEphemerisAdapter::new(settings.ephemeris.path.clone()) {
        Ok(adapter) => {
            log::info!("using Swiss Ephemeris at {}", adapter.path().display());
            let adapter: SharedEphemeris = Box::new(adapter);
            Some(adapter)
        }
        Err(e) => {
            log::warn!("Swiss Ephemeris unavailable, using mean longitudes: {e}");
            None
        }
    }
}

#[cfg(not(feature = "swisseph"))]
fn precise(settings: &SeleneSettings) -> Option<SharedEphemeris> {
    if settings.ephemeris.backend == Backend::Swiss {
        log::warn!("built without the swisseph feature, using mean longitudes");
    }
    None
}

pub fn calculator(settings: &SeleneSettings) -> anyhow::Result<SnapshotCalculator> {
    let calc = SnapshotCalculator::new(precise(settings), picker(&settings.aspects)?);
    log::info!("ephemeris backend: {}", calc.backend_name());
    Ok(calc)
}
