//! The Four Pillars chart and its Day Master.

use serde::Serialize;

use crate::element::{Polarity, WuXing};
use crate::ganzhi::Stem;
use crate::pillar::Pillar;

/// Identity of the chart owner: the day pillar's stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "DayMasterRecord")]
pub struct DayMaster {
    pub stem: Stem,
}

impl DayMaster {
    pub const fn element(self) -> WuXing {
        self.stem.element()
    }

    pub const fn polarity(self) -> Polarity {
        self.stem.polarity()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayMasterRecord {
    pub stem: &'static str,
    #[serde(rename = "stemCJK")]
    pub stem_cjk: &'static str,
    pub element: WuXing,
    pub polarity: Polarity,
}

impl From<DayMaster> for DayMasterRecord {
    fn from(dm: DayMaster) -> Self {
        Self {
            stem: dm.stem.name(),
            stem_cjk: dm.stem.cjk(),
            element: dm.element(),
            polarity: dm.polarity(),
        }
    }
}

/// Year, month, day and hour pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "ChartRecord")]
pub struct FourPillarsChart {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl FourPillarsChart {
    pub const fn new(year: Pillar, month: Pillar, day: Pillar, hour: Pillar) -> Self {
        Self {
            year,
            month,
            day,
            hour,
        }
    }

    pub const fn day_master(&self) -> DayMaster {
        DayMaster {
            stem: self.day.stem(),
        }
    }

    /// Pillars in chart order (year, month, day, hour).
    pub const fn pillars(&self) -> [Pillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }

    /// Eight ideographs, space-separated by pillar: "YY MM DD HH".
    pub fn notation(&self) -> String {
        self.pillars()
            .iter()
            .map(|p| p.cjk())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl std::fmt::Display for FourPillarsChart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.notation())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartRecord {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
    pub day_master: DayMaster,
    pub full_notation: String,
}

impl From<FourPillarsChart> for ChartRecord {
    fn from(c: FourPillarsChart) -> Self {
        Self {
            year: c.year,
            month: c.month,
            day: c.day,
            hour: c.hour,
            day_master: c.day_master(),
            full_notation: c.notation(),
        }
    }
}
