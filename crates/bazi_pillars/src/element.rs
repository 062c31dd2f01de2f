//! Wu Xing (five elements) and Yin/Yang polarity.
//!
//! Generating cycle: Wood → Fire → Earth → Metal → Water → Wood.
//! Controlling cycle: Wood ⊣ Earth ⊣ Water ⊣ Fire ⊣ Metal ⊣ Wood.

use serde::{Deserialize, Serialize};

/// One of the five elements, in vector order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WuXing {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All five elements in order (0 = Wood, 4 = Water).
pub const ALL_WU_XING: [WuXing; 5] = [
    WuXing::Wood,
    WuXing::Fire,
    WuXing::Earth,
    WuXing::Metal,
    WuXing::Water,
];

impl WuXing {
    /// 0-based index (Wood = 0).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Element from an index; wraps modulo 5.
    pub const fn from_index(index: usize) -> Self {
        ALL_WU_XING[index % 5]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    pub const fn german_name(self) -> &'static str {
        match self {
            Self::Wood => "Holz",
            Self::Fire => "Feuer",
            Self::Earth => "Erde",
            Self::Metal => "Metall",
            Self::Water => "Wasser",
        }
    }

    pub const fn cjk(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// Element this one generates (feeds).
    pub const fn generates(self) -> Self {
        Self::from_index(self.index() as usize + 1)
    }

    /// Element this one controls (restrains).
    pub const fn controls(self) -> Self {
        Self::from_index(self.index() as usize + 2)
    }
}

impl std::fmt::Display for WuXing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Yin/Yang polarity. Even stem indices are Yang.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    /// Polarity from a stem or branch index parity.
    pub const fn from_index(index: u8) -> Self {
        if index % 2 == 0 { Self::Yang } else { Self::Yin }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "Yang",
            Self::Yin => "Yin",
        }
    }
}

impl std::fmt::Display for Polarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generating_cycle() {
        assert_eq!(WuXing::Wood.generates(), WuXing::Fire);
        assert_eq!(WuXing::Fire.generates(), WuXing::Earth);
        assert_eq!(WuXing::Earth.generates(), WuXing::Metal);
        assert_eq!(WuXing::Metal.generates(), WuXing::Water);
        assert_eq!(WuXing::Water.generates(), WuXing::Wood);
    }

    #[test]
    fn controlling_cycle() {
        assert_eq!(WuXing::Wood.controls(), WuXing::Earth);
        assert_eq!(WuXing::Earth.controls(), WuXing::Water);
        assert_eq!(WuXing::Water.controls(), WuXing::Fire);
        assert_eq!(WuXing::Fire.controls(), WuXing::Metal);
        assert_eq!(WuXing::Metal.controls(), WuXing::Wood);
    }

    #[test]
    fn cycles_are_disjoint() {
        for e in ALL_WU_XING {
            assert_ne!(e.generates(), e.controls());
            assert_ne!(e.generates(), e);
            assert_ne!(e.controls(), e);
        }
    }

    #[test]
    fn names() {
        assert_eq!(WuXing::Metal.name(), "Metal");
        assert_eq!(WuXing::Metal.german_name(), "Metall");
        assert_eq!(WuXing::Water.cjk(), "水");
        assert_eq!(WuXing::Wood.to_string(), "Wood");
    }

    #[test]
    fn polarity_parity() {
        assert_eq!(Polarity::from_index(0), Polarity::Yang);
        assert_eq!(Polarity::from_index(7), Polarity::Yin);
        assert_eq!(Polarity::Yin.to_string(), "Yin");
    }

    #[test]
    fn serializes_as_name() {
        assert_eq!(serde_json::to_string(&WuXing::Fire).unwrap(), "\"Fire\"");
        assert_eq!(serde_json::to_string(&Polarity::Yang).unwrap(), "\"Yang\"");
    }
}
