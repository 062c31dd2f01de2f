//! Resonances between chart positions and Western sign placements.

use bazi_pillars::{FourPillarsChart, WuXing};
use serde::Serialize;

use crate::body::WesternBody;
use crate::planets::Planets;
use crate::sign::ZodiacSign;

/// How two elements relate on the Wu Xing cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementRelation {
    Same,
    /// Adjacent on the generating cycle, either direction.
    Generating,
    /// Adjacent on the controlling cycle, either direction.
    Controlling,
    Unrelated,
}

impl ElementRelation {
    pub fn between(a: WuXing, b: WuXing) -> Self {
        if a == b {
            Self::Same
        } else if a.generates() == b || b.generates() == a {
            Self::Generating
        } else if a.controls() == b || b.controls() == a {
            Self::Controlling
        } else {
            Self::Unrelated
        }
    }

    pub const fn quality(self) -> ResonanceQuality {
        match self {
            Self::Same | Self::Generating => ResonanceQuality::Harmony,
            Self::Controlling => ResonanceQuality::Tension,
            Self::Unrelated => ResonanceQuality::Neutral,
        }
    }

    pub const fn strength(self) -> f64 {
        match self {
            Self::Same => 1.0,
            Self::Generating => 0.7,
            Self::Controlling => 0.6,
            Self::Unrelated => 0.3,
        }
    }

    const fn phrase(self) -> &'static str {
        match self {
            Self::Same => "share the same element",
            Self::Generating => "are linked by the generating cycle",
            Self::Controlling => "are linked by the controlling cycle",
            Self::Unrelated => "have no direct cycle link",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResonanceQuality {
    Harmony,
    Tension,
    Neutral,
}

/// Which body is paired with which chart position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ResonanceKind {
    #[serde(rename = "Sun-DayMaster")]
    SunDayMaster,
    #[serde(rename = "Moon-HourPillar")]
    MoonHourPillar,
    #[serde(rename = "Jupiter-YearPillar")]
    JupiterYearPillar,
    #[serde(rename = "Saturn-MonthPillar")]
    SaturnMonthPillar,
    #[serde(rename = "Mars-DayPillar")]
    MarsDayPillar,
}

/// All pairings in evaluation order.
pub const ALL_RESONANCE_KINDS: [ResonanceKind; 5] = [
    ResonanceKind::SunDayMaster,
    ResonanceKind::MoonHourPillar,
    ResonanceKind::JupiterYearPillar,
    ResonanceKind::SaturnMonthPillar,
    ResonanceKind::MarsDayPillar,
];

impl ResonanceKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::SunDayMaster => "Sun-DayMaster",
            Self::MoonHourPillar => "Moon-HourPillar",
            Self::JupiterYearPillar => "Jupiter-YearPillar",
            Self::SaturnMonthPillar => "Saturn-MonthPillar",
            Self::MarsDayPillar => "Mars-DayPillar",
        }
    }

    pub const fn body(self) -> WesternBody {
        match self {
            Self::SunDayMaster => WesternBody::Sun,
            Self::MoonHourPillar => WesternBody::Moon,
            Self::JupiterYearPillar => WesternBody::Jupiter,
            Self::SaturnMonthPillar => WesternBody::Saturn,
            Self::MarsDayPillar => WesternBody::Mars,
        }
    }

    /// Eastern element of the paired position: the Day Master's stem
    /// element for the Sun, the fixed branch element otherwise.
    pub const fn eastern_element(self, chart: &FourPillarsChart) -> WuXing {
        match self {
            Self::SunDayMaster => chart.day_master().element(),
            Self::MoonHourPillar => chart.hour.branch_element(),
            Self::JupiterYearPillar => chart.year.branch_element(),
            Self::SaturnMonthPillar => chart.month.branch_element(),
            Self::MarsDayPillar => chart.day.branch_element(),
        }
    }

    const fn position(self) -> &'static str {
        match self {
            Self::SunDayMaster => "Day Master",
            Self::MoonHourPillar => "hour branch",
            Self::JupiterYearPillar => "year branch",
            Self::SaturnMonthPillar => "month branch",
            Self::MarsDayPillar => "day branch",
        }
    }
}

/// A modeled relation between one chart position and one sign placement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resonance {
    #[serde(rename = "type")]
    pub kind: ResonanceKind,
    pub eastern: WuXing,
    /// Sign name with its Wu Xing counterpart, e.g. "cancer (Water)".
    pub western: String,
    pub strength: f64,
    pub quality: ResonanceQuality,
    pub description: String,
}

impl Resonance {
    pub fn new(kind: ResonanceKind, eastern: WuXing, sign: ZodiacSign) -> Self {
        let western_element = sign.wu_xing();
        let relation = ElementRelation::between(eastern, western_element);
        let description = format!(
            "{} in {} ({}) and {} {} {}",
            kind.body(),
            sign.name(),
            western_element,
            kind.position(),
            eastern,
            relation.phrase()
        );
        Self {
            kind,
            eastern,
            western: format!("{} ({})", sign.name(), western_element),
            strength: relation.strength(),
            quality: relation.quality(),
            description,
        }
    }
}

/// Resonances for every pairing whose body is present with a sign.
pub fn find_resonances(chart: &FourPillarsChart, planets: &Planets) -> Vec<Resonance> {
    ALL_RESONANCE_KINDS
        .iter()
        .filter_map(|&kind| {
            let sign = planets.get(kind.body())?.sign?;
            Some(Resonance::new(kind, kind.eastern_element(chart), sign))
        })
        .collect()
}
