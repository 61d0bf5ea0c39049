//! Forecast context rendering and parsing of generated forecasts.
//!
//! The snapshot is enrichment for a text-generation service. This module builds
//! the plain-text context block for a persona and reads the structured
//! sections back out of whatever the service replies with.

use crate::ephemeris::CelestialBody;
use crate::persona::Persona;
use crate::snapshot::DailySnapshot;
use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

lazy_static! {
    // First `{` through last `}`: replies are often wrapped in markdown fences.
    static ref JSON_OBJECT: Regex = Regex::new(r"(?s)\{.*\}").expect("valid regex");
}

/// Context block describing one persona and today's sky.
pub struct ForecastContext<'a> {
    persona: &'a Persona,
    today: NaiveDate,
    snapshot: &'a DailySnapshot,
}

impl<'a> ForecastContext<'a> {
    pub fn new(persona: &'a Persona, today: NaiveDate, snapshot: &'a DailySnapshot) -> Self {
        Self {
            persona,
            today,
            snapshot,
        }
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ForecastContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.persona;
        let sign = p.zodiac_sign().map(|s| s.name()).unwrap_or("unknown");
        let interests = if p.interests.is_empty() {
            "not specified".to_string()
        } else {
            p.interests.join(", ")
        };

        writeln!(f, "Date: {}", self.today.format("%Y-%m-%d"))?;
        writeln!(f, "Name: {}", p.name)?;
        writeln!(f, "Age: {}", p.age_on(self.today))?;
        writeln!(f, "Zodiac sign: {}", sign)?;
        writeln!(f, "Gender: {}", p.gender.as_deref().unwrap_or("not specified"))?;
        writeln!(
            f,
            "Family status: {}",
            p.family_status.as_deref().unwrap_or("not specified")
        )?;
        writeln!(f, "Has children: {}", if p.has_children { "yes" } else { "no" })?;
        writeln!(f, "Interests: {}", interests)?;
        writeln!(f, "Birth place: {}", p.birth_place)?;
        writeln!(f)?;
        writeln!(f, "Sky today:")?;
        for body in CelestialBody::ALL {
            writeln!(f, "- {}", self.snapshot.description(body))?;
        }
        writeln!(f, "- Moon phase: {}", self.snapshot.moon_phase)?;
        writeln!(f, "- Aspect of the day: {}", self.snapshot.daily_aspect)
    }
}

/// The five sections a generated forecast is split into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastSections {
    pub general: String,
    pub love: String,
    pub career: String,
    pub health: String,
    pub advice: String,
}

impl ForecastSections {
    /// Canned forecast used when a reply cannot be parsed.
    pub fn fallback() -> Self {
        Self {
            general: "Today is a favourable day for new beginnings.".to_string(),
            love: "Pleasant surprises are possible in your relationships.".to_string(),
            career: "A good time for career initiatives.".to_string(),
            health: "Pay attention to your sleep schedule.".to_string(),
            advice: "Trust your intuition when making important decisions.".to_string(),
        }
    }

    /// Pull the JSON object out of a free-text reply. Never fails; anything
    /// unparseable yields [`ForecastSections::fallback`].
    pub fn from_response(text: &str) -> Self {
        let Some(found) = JSON_OBJECT.find(text) else {
            log::warn!("no JSON object in forecast response, using fallback");
            return Self::fallback();
        };
        match serde_json::from_str(found.as_str()) {
            Ok(sections) => sections,
            Err(e) => {
                log::warn!("forecast response JSON did not parse: {}", e);
                Self::fallback()
            }
        }
    }
}
