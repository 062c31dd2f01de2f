//! Western zodiac signs and their classical elements.
//!
//! Signs are 30° tropical segments starting at Aries 0°. For resonance
//! checks each classical element maps onto a Wu Xing element: Fire → Fire,
//! Earth → Earth, Air → Metal, Water → Water.

use std::str::FromStr;

use bazi_pillars::WuXing;
use serde::{Deserialize, Serialize};

/// One of the 12 tropical zodiac signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
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

/// All 12 signs in order (0 = Aries).
pub const ALL_ZODIAC_SIGNS: [ZodiacSign; 12] = [
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

/// Classical Western element of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WesternElement {
    Fire,
    Earth,
    Air,
    Water,
}

impl WesternElement {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Air => "Air",
            Self::Water => "Water",
        }
    }

    /// Wu Xing counterpart used for resonances.
    pub const fn wu_xing(self) -> WuXing {
        match self {
            Self::Fire => WuXing::Fire,
            Self::Earth => WuXing::Earth,
            Self::Air => WuXing::Metal,
            Self::Water => WuXing::Water,
        }
    }
}

impl ZodiacSign {
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Sign containing a tropical ecliptic longitude; any angle wraps.
    pub fn from_longitude(longitude_deg: f64) -> Self {
        let lon = longitude_deg.rem_euclid(360.0);
        ALL_ZODIAC_SIGNS[((lon / 30.0).floor() as usize).min(11)]
    }

    /// Lowercase English name, as used on the wire.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "aries",
            Self::Taurus => "taurus",
            Self::Gemini => "gemini",
            Self::Cancer => "cancer",
            Self::Leo => "leo",
            Self::Virgo => "virgo",
            Self::Libra => "libra",
            Self::Scorpio => "scorpio",
            Self::Sagittarius => "sagittarius",
            Self::Capricorn => "capricorn",
            Self::Aquarius => "aquarius",
            Self::Pisces => "pisces",
        }
    }

    pub const fn german_name(self) -> &'static str {
        match self {
            Self::Aries => "Widder",
            Self::Taurus => "Stier",
            Self::Gemini => "Zwillinge",
            Self::Cancer => "Krebs",
            Self::Leo => "Löwe",
            Self::Virgo => "Jungfrau",
            Self::Libra => "Waage",
            Self::Scorpio => "Skorpion",
            Self::Sagittarius => "Schütze",
            Self::Capricorn => "Steinbock",
            Self::Aquarius => "Wassermann",
            Self::Pisces => "Fische",
        }
    }

    /// Fire, Earth, Air, Water repeating from Aries.
    pub const fn element(self) -> WesternElement {
        match self.index() % 4 {
            0 => WesternElement::Fire,
            1 => WesternElement::Earth,
            2 => WesternElement::Air,
            _ => WesternElement::Water,
        }
    }

    pub const fn wu_xing(self) -> WuXing {
        self.element().wu_xing()
    }
}

impl std::fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ZodiacSign {
    type Err = String;

    /// Case-insensitive English name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        ALL_ZODIAC_SIGNS
            .iter()
            .copied()
            .find(|sign| sign.name() == lower)
            .ok_or_else(|| format!("unknown zodiac sign '{s}'"))
    }
}

impl TryFrom<String> for ZodiacSign {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_longitude_boundaries() {
        assert_eq!(ZodiacSign::from_longitude(0.0), ZodiacSign::Aries);
        assert_eq!(ZodiacSign::from_longitude(29.999), ZodiacSign::Aries);
        assert_eq!(ZodiacSign::from_longitude(92.5), ZodiacSign::Cancer);
        assert_eq!(ZodiacSign::from_longitude(215.3), ZodiacSign::Scorpio);
        assert_eq!(ZodiacSign::from_longitude(359.9), ZodiacSign::Pisces);
        assert_eq!(ZodiacSign::from_longitude(-10.0), ZodiacSign::Pisces);
        assert_eq!(ZodiacSign::from_longitude(360.0), ZodiacSign::Aries);
    }

    #[test]
    fn elements_cycle() {
        assert_eq!(ZodiacSign::Aries.element(), WesternElement::Fire);
        assert_eq!(ZodiacSign::Taurus.element(), WesternElement::Earth);
        assert_eq!(ZodiacSign::Gemini.element(), WesternElement::Air);
        assert_eq!(ZodiacSign::Cancer.element(), WesternElement::Water);
        assert_eq!(ZodiacSign::Leo.element(), WesternElement::Fire);
        assert_eq!(ZodiacSign::Aquarius.element(), WesternElement::Air);
        assert_eq!(ZodiacSign::Pisces.element(), WesternElement::Water);
    }

    #[test]
    fn air_maps_to_metal() {
        assert_eq!(ZodiacSign::Libra.wu_xing(), WuXing::Metal);
        assert_eq!(ZodiacSign::Leo.wu_xing(), WuXing::Fire);
        assert_eq!(ZodiacSign::Virgo.wu_xing(), WuXing::Earth);
        assert_eq!(ZodiacSign::Scorpio.wu_xing(), WuXing::Water);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("cancer".parse::<ZodiacSign>(), Ok(ZodiacSign::Cancer));
        assert_eq!("Sagittarius".parse::<ZodiacSign>(), Ok(ZodiacSign::Sagittarius));
        assert!("ophiuchus".parse::<ZodiacSign>().is_err());
    }

    #[test]
    fn serde_lowercase() {
        assert_eq!(serde_json::to_string(&ZodiacSign::Leo).unwrap(), "\"leo\"");
        let s: ZodiacSign = serde_json::from_str("\"Virgo\"").unwrap();
        assert_eq!(s, ZodiacSign::Virgo);
    }

    #[test]
    fn german_names() {
        assert_eq!(ZodiacSign::Leo.german_name(), "Löwe");
        assert_eq!(ZodiacSign::Sagittarius.german_name(), "Schütze");
    }
}
