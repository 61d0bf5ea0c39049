mod setup;

use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::{Parser, ValueEnum};
use selene::{CalendarDate, CelestialBody, DailySnapshot, ForecastContext, Persona};
use selene_config::{AspectMode, SeleneSettings};
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// One line per body, then phase and aspect.
    Text,
    /// The snapshot as a JSON object.
    Json,
    /// Forecast context block for a persona (needs --persona).
    Context,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Aspects {
    Detected,
    Random,
}

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Daily sky snapshot: planetary positions, moon phase and aspect of the day"
)]
struct Args {
    /// Date to compute (YYYY-MM-DD). Defaults to today, local time.
    #[arg(long)]
    date: Option<NaiveDate>,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Config file (default: configs/selene.toml if present).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override aspects.mode from the config.
    #[arg(long, value_enum)]
    aspects: Option<Aspects>,

    /// Seed for random aspect selection.
    #[arg(long)]
    seed: Option<u64>,

    /// Persona TOML file, used by `--format context`.
    #[arg(long)]
    persona: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let (mut settings, source) = selene_config::load_settings(args.config.as_deref())?;
    log::debug!("config source: {:?}", source);
    apply_overrides(&mut settings, &args)?;

    let calculator = setup::calculator(&settings)?;
    let today = args.date.unwrap_or_else(|| Local::now().date_naive());
    let snapshot = calculator.compute_snapshot(CalendarDate::from(today));

    match args.format {
        Format::Text => print!("{}", render_text(&snapshot)),
        Format::Json => println!("{}", serde_json::to_string_pretty(&snapshot)?),
        Format::Context => {
            let path = args
                .persona
                .as_ref()
                .context("--format context needs --persona <file>")?;
            let persona = load_persona(path)?;
            print!("{}", ForecastContext::new(&persona, today, &snapshot).render());
        }
    }
    Ok(())
}

/// Command-line flags win over the config file. The merged settings are
/// validated again so that a `--seed` without random mode is reported.
fn apply_overrides(settings: &mut SeleneSettings, args: &Args) -> anyhow::Result<()> {
    if let Some(mode) = args.aspects {
        settings.aspects.mode = match mode {
            Aspects::Detected => AspectMode::Detected,
            Aspects::Random => AspectMode::Random,
        };
    }
    if args.seed.is_some() {
        settings.aspects.seed = args.seed;
    }
    selene_config::validate_settings(settings)
}

fn render_text(snapshot: &DailySnapshot) -> String {
    let mut out = format!("{}\n", snapshot.date);
    for body in CelestialBody::ALL {
        out.push_str(snapshot.description(body));
        out.push('\n');
    }
    out.push_str(&format!("{}\n{}\n", snapshot.moon_phase, snapshot.daily_aspect));
    out
}

fn load_persona(path: &Path) -> anyhow::Result<Persona> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading persona {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("parsing persona {}", path.display()))
}
