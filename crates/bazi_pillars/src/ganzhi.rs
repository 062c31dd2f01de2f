//! Heavenly Stems, Earthly Branches and the zodiac animals.

use serde::Serialize;

use crate::element::{Polarity, WuXing};

/// The 10 Heavenly Stems (tian gan).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in order (0 = Jia).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

impl Stem {
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Stem from an index; wraps modulo 10.
    pub const fn from_index(index: usize) -> Self {
        ALL_STEMS[index % 10]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Jia => "Jia",
            Self::Yi => "Yi",
            Self::Bing => "Bing",
            Self::Ding => "Ding",
            Self::Wu => "Wu",
            Self::Ji => "Ji",
            Self::Geng => "Geng",
            Self::Xin => "Xin",
            Self::Ren => "Ren",
            Self::Gui => "Gui",
        }
    }

    pub const fn cjk(self) -> &'static str {
        match self {
            Self::Jia => "甲",
            Self::Yi => "乙",
            Self::Bing => "丙",
            Self::Ding => "丁",
            Self::Wu => "戊",
            Self::Ji => "己",
            Self::Geng => "庚",
            Self::Xin => "辛",
            Self::Ren => "壬",
            Self::Gui => "癸",
        }
    }

    /// Element carried by the stem: consecutive pairs share an element.
    pub const fn element(self) -> WuXing {
        WuXing::from_index(self.index() as usize / 2)
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::from_index(self.index())
    }
}

/// The 12 Earthly Branches (di zhi).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in order (0 = Zi).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

impl Branch {
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Branch from an index; wraps modulo 12.
    pub const fn from_index(index: usize) -> Self {
        ALL_BRANCHES[index % 12]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "Zi",
            Self::Chou => "Chou",
            Self::Yin => "Yin",
            Self::Mao => "Mao",
            Self::Chen => "Chen",
            Self::Si => "Si",
            Self::Wu => "Wu",
            Self::Wei => "Wei",
            Self::Shen => "Shen",
            Self::You => "You",
            Self::Xu => "Xu",
            Self::Hai => "Hai",
        }
    }

    pub const fn cjk(self) -> &'static str {
        match self {
            Self::Zi => "子",
            Self::Chou => "丑",
            Self::Yin => "寅",
            Self::Mao => "卯",
            Self::Chen => "辰",
            Self::Si => "巳",
            Self::Wu => "午",
            Self::Wei => "未",
            Self::Shen => "申",
            Self::You => "酉",
            Self::Xu => "戌",
            Self::Hai => "亥",
        }
    }

    pub const fn animal(self) -> ZodiacAnimal {
        ZodiacAnimal::from_index(self.index() as usize)
    }

    /// Fixed canonical element of the branch, independent of any stem.
    pub const fn element(self) -> WuXing {
        match self {
            Self::Zi | Self::Hai => WuXing::Water,
            Self::Yin | Self::Mao => WuXing::Wood,
            Self::Si | Self::Wu => WuXing::Fire,
            Self::Shen | Self::You => WuXing::Metal,
            Self::Chou | Self::Chen | Self::Wei | Self::Xu => WuXing::Earth,
        }
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::from_index(self.index())
    }
}

/// The 12 zodiac animals, aligned with the branches (0 = Rat).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ZodiacAnimal {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

pub const ALL_ZODIAC_ANIMALS: [ZodiacAnimal; 12] = [
    ZodiacAnimal::Rat,
    ZodiacAnimal::Ox,
    ZodiacAnimal::Tiger,
    ZodiacAnimal::Rabbit,
    ZodiacAnimal::Dragon,
    ZodiacAnimal::Snake,
    ZodiacAnimal::Horse,
    ZodiacAnimal::Goat,
    ZodiacAnimal::Monkey,
    ZodiacAnimal::Rooster,
    ZodiacAnimal::Dog,
    ZodiacAnimal::Pig,
];

impl ZodiacAnimal {
    pub const fn from_index(index: usize) -> Self {
        ALL_ZODIAC_ANIMALS[index % 12]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Rat => "Rat",
            Self::Ox => "Ox",
            Self::Tiger => "Tiger",
            Self::Rabbit => "Rabbit",
            Self::Dragon => "Dragon",
            Self::Snake => "Snake",
            Self::Horse => "Horse",
            Self::Goat => "Goat",
            Self::Monkey => "Monkey",
            Self::Rooster => "Rooster",
            Self::Dog => "Dog",
            Self::Pig => "Pig",
        }
    }

    pub const fn german_name(self) -> &'static str {
        match self {
            Self::Rat => "Ratte",
            Self::Ox => "Büffel",
            Self::Tiger => "Tiger",
            Self::Rabbit => "Hase",
            Self::Dragon => "Drache",
            Self::Snake => "Schlange",
            Self::Horse => "Pferd",
            Self::Goat => "Ziege",
            Self::Monkey => "Affe",
            Self::Rooster => "Hahn",
            Self::Dog => "Hund",
            Self::Pig => "Schwein",
        }
    }
}
