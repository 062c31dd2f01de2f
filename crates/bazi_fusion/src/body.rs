//! Western bodies accepted in a planet map, with their Wu Xing profiles.

use std::str::FromStr;

use bazi_pillars::WuXing;
use serde::Serialize;

/// A body the external ephemeris may report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum WesternBody {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    NorthNode,
    SouthNode,
    Chiron,
    Lilith,
}

pub const ALL_WESTERN_BODIES: [WesternBody; 14] = [
    WesternBody::Sun,
    WesternBody::Moon,
    WesternBody::Mercury,
    WesternBody::Venus,
    WesternBody::Mars,
    WesternBody::Jupiter,
    WesternBody::Saturn,
    WesternBody::Uranus,
    WesternBody::Neptune,
    WesternBody::Pluto,
    WesternBody::NorthNode,
    WesternBody::SouthNode,
    WesternBody::Chiron,
    WesternBody::Lilith,
];

impl WesternBody {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
            Self::NorthNode => "NorthNode",
            Self::SouthNode => "SouthNode",
            Self::Chiron => "Chiron",
            Self::Lilith => "Lilith",
        }
    }

    /// Element weights this body adds to the Western vector.
    ///
    /// Nodes, Chiron and Lilith carry no profile.
    pub const fn profile(self) -> &'static [(WuXing, f64)] {
        match self {
            Self::Sun => &[(WuXing::Fire, 1.0), (WuXing::Wood, 0.2)],
            Self::Moon => &[(WuXing::Water, 1.0), (WuXing::Earth, 0.3)],
            Self::Mercury => &[(WuXing::Water, 0.6), (WuXing::Metal, 0.4)],
            Self::Venus => &[(WuXing::Metal, 0.8), (WuXing::Earth, 0.2)],
            Self::Mars => &[(WuXing::Fire, 1.0)],
            Self::Jupiter => &[(WuXing::Wood, 1.0), (WuXing::Fire, 0.2)],
            Self::Saturn => &[(WuXing::Earth, 0.7), (WuXing::Metal, 0.3)],
            Self::Uranus => &[(WuXing::Metal, 0.5), (WuXing::Fire, 0.5)],
            Self::Neptune => &[(WuXing::Water, 0.8), (WuXing::Wood, 0.2)],
            Self::Pluto => &[(WuXing::Fire, 0.5), (WuXing::Earth, 0.5)],
            Self::NorthNode | Self::SouthNode | Self::Chiron | Self::Lilith => &[],
        }
    }
}

impl std::fmt::Display for WesternBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WesternBody {
    type Err = String;

    /// Exact body name as used in planet maps ("Sun", "NorthNode", ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_WESTERN_BODIES
            .iter()
            .copied()
            .find(|b| b.name() == s)
            .ok_or_else(|| format!("unknown body '{s}'"))
    }
}
