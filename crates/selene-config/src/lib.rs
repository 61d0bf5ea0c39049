use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Relative locations tried when no explicit config path is given.
pub const DEFAULT_CONFIG_PATHS: [&str; 2] = ["configs/selene.toml", "../../configs/selene.toml"];

/// Names accepted as keys of `aspects.orbs`, matched case-insensitively.
pub const ASPECT_NAMES: [&str; 5] = ["conjunction", "sextile", "square", "trine", "opposition"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    Mean,
    Swiss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectMode {
    #[default]
    Detected,
    Random,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct EphemerisSettings {
    #[serde(default)]
    pub backend: Backend,
    /// Swiss Ephemeris data directory.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AspectConfig {
    #[serde(default)]
    pub mode: AspectMode,
    /// Seed for random mode; unseeded when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_orb")]
    pub orb: f64,
    /// Per-aspect orb overrides, keyed by aspect name ("sextile", ...).
    #[serde(default)]
    pub orbs: HashMap<String, f64>,
}

fn default_orb() -> f64 {
    8.0
}

impl Default for AspectConfig {
    fn default() -> Self {
        Self {
            mode: AspectMode::default(),
            seed: None,
            orb: default_orb(),
            orbs: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SeleneSettings {
    #[serde(default)]
    pub ephemeris: EphemerisSettings,
    #[serde(default)]
    pub aspects: AspectConfig,
}

/// Where the settings came from, for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

/// Read the config text. An explicit path must exist; otherwise the default
/// relative paths are tried and `None` means none of them exist.
pub fn read_config_text(explicit: Option<&Path>) -> anyhow::Result<Option<(PathBuf, String)>> {
    if let Some(path) = explicit {
        let text = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Could not read config {}: {e}", path.display()))?;
        return Ok(Some((path.to_path_buf(), text)));
    }
    for p in &DEFAULT_CONFIG_PATHS {
        if let Ok(c) = fs::read_to_string(p) {
            return Ok(Some((PathBuf::from(p), c)));
        }
    }
    Ok(None)
}

pub fn parse_settings(text: &str) -> anyhow::Result<SeleneSettings> {
    let settings: SeleneSettings =
        toml::from_str(text).map_err(|e| anyhow::anyhow!("Failed to parse selene.toml: {e}"))?;
    check_orbs(&settings.aspects)?;
    Ok(settings)
}

fn check_orbs(aspects: &AspectConfig) -> anyhow::Result<()> {
    if !aspects.orb.is_finite() || aspects.orb < 0.0 {
        anyhow::bail!("aspects.orb must be a non-negative number, got {}", aspects.orb);
    }
    for (name, orb) in &aspects.orbs {
        if !ASPECT_NAMES.iter().any(|known| known.eq_ignore_ascii_case(name)) {
            anyhow::bail!("Unknown aspect in aspects.orbs: {name}");
        }
        if !orb.is_finite() || *orb < 0.0 {
            anyhow::bail!("aspects.orbs.{name} must be a non-negative number, got {orb}");
        }
    }
    Ok(())
}

/// True when a seed is set but the mode never uses it.
pub fn seed_is_ignored(settings: &SeleneSettings) -> bool {
    settings.aspects.seed.is_some() && settings.aspects.mode != AspectMode::Random
}

/// Check the final settings, after any command-line overrides.
pub fn validate_settings(settings: &SeleneSettings) -> anyhow::Result<()> {
    check_orbs(&settings.aspects)?;
    if seed_is_ignored(settings) {
        log::warn!("aspects.seed is ignored unless aspects.mode = \"random\"");
    }
    Ok(())
}

/// Load settings, falling back to defaults when no config file is found.
pub fn load_settings(explicit: Option<&Path>) -> anyhow::Result<(SeleneSettings, ConfigSource)> {
    match read_config_text(explicit)? {
        Some((path, text)) => {
            let settings = parse_settings(&text)
                .map_err(|e| anyhow::anyhow!("{}: {e}", path.display()))?;
            log::info!("loaded config from {}", path.display());
            Ok((settings, ConfigSource::File(path)))
        }
        None => {
            log::info!("no config found in {:?}, using defaults", DEFAULT_CONFIG_PATHS);
            Ok((SeleneSettings::default(), ConfigSource::Defaults))
        }
    }
}
