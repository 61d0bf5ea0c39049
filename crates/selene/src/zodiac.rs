//! Tropical zodiac signs and sign/degree positions.

use crate::angle::normalize_degrees;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in zodiac order (0 = Aries, 11 = Pisces).
pub const ALL_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

impl ZodiacSign {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// 0-based index in zodiac order.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        ALL_SIGNS.get(index).copied()
    }

    pub fn from_longitude(longitude: f64) -> Self {
        ZodiacPosition::from_longitude(longitude).sign
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sign plus whole degree within the sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZodiacPosition {
    pub sign: ZodiacSign,
    /// Whole degrees into the sign, 0..=29.
    pub degree: u8,
}

impl ZodiacPosition {
    /// Map an ecliptic longitude onto the zodiac. The longitude is normalized
    /// to [0, 360) first, so any finite input is accepted.
    pub fn from_longitude(longitude: f64) -> Self {
        let lon = normalize_degrees(longitude);
        let sign_index = ((lon / 30.0).floor() as usize).min(11);
        let degree = ((lon % 30.0).floor() as u8).min(29);
        Self {
            sign: ALL_SIGNS[sign_index],
            degree,
        }
    }
}

impl fmt::Display for ZodiacPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}°", self.sign, self.degree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_boundaries() {
        assert_eq!(ZodiacSign::from_longitude(0.0), ZodiacSign::Aries);
        assert_eq!(ZodiacSign::from_longitude(29.999), ZodiacSign::Aries);
        assert_eq!(ZodiacSign::from_longitude(30.0), ZodiacSign::Taurus);
        assert_eq!(ZodiacSign::from_longitude(359.999), ZodiacSign::Pisces);
    }

    #[test]
    fn negative_longitude_wraps() {
        let pos = ZodiacPosition::from_longitude(-10.5);
        assert_eq!(pos.sign, ZodiacSign::Pisces);
        assert_eq!(pos.degree, 19);
    }

    #[test]
    fn capricorn_ten() {
        let pos = ZodiacPosition::from_longitude(280.46);
        assert_eq!(pos.sign, ZodiacSign::Capricorn);
        assert_eq!(pos.degree, 10);
        assert_eq!(pos.to_string(), "Capricorn at 10°");
    }

    #[test]
    fn index_round_trip() {
        for (i, sign) in ALL_SIGNS.iter().enumerate() {
            assert_eq!(sign.index(), i);
            assert_eq!(ZodiacSign::from_index(i), Some(*sign));
        }
        assert_eq!(ZodiacSign::from_index(12), None);
    }
}
