//! The 24 solar terms (jieqi).
//!
//! Terms are 15° apart along the ecliptic. The table starts at Li Chun
//! (315°, start of spring) and Chun Fen (spring equinox) sits at 0°.

use serde::Serialize;

use crate::longitude::normalize_360;

/// Ecliptic longitude of the first term (Li Chun).
pub const LI_CHUN_LONGITUDE_DEG: f64 = 315.0;

/// Longitude spacing between consecutive terms.
pub const TERM_SPAN_DEG: f64 = 15.0;

/// One of the 24 solar terms, in table order from Li Chun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "SolarTermRecord")]
pub enum SolarTerm {
    LiChun,
    YuShui,
    JingZhe,
    ChunFen,
    QingMing,
    GuYu,
    LiXia,
    XiaoMan,
    MangZhong,
    XiaZhi,
    XiaoShu,
    DaShu,
    LiQiu,
    ChuShu,
    BaiLu,
    QiuFen,
    HanLu,
    ShuangJiang,
    LiDong,
    XiaoXue,
    DaXue,
    DongZhi,
    XiaoHan,
    DaHan,
}

/// All 24 terms in table order (0 = Li Chun, 23 = Da Han).
pub const ALL_SOLAR_TERMS: [SolarTerm; 24] = [
    SolarTerm::LiChun,
    SolarTerm::YuShui,
    SolarTerm::JingZhe,
    SolarTerm::ChunFen,
    SolarTerm::QingMing,
    SolarTerm::GuYu,
    SolarTerm::LiXia,
    SolarTerm::XiaoMan,
    SolarTerm::MangZhong,
    SolarTerm::XiaZhi,
    SolarTerm::XiaoShu,
    SolarTerm::DaShu,
    SolarTerm::LiQiu,
    SolarTerm::ChuShu,
    SolarTerm::BaiLu,
    SolarTerm::QiuFen,
    SolarTerm::HanLu,
    SolarTerm::ShuangJiang,
    SolarTerm::LiDong,
    SolarTerm::XiaoXue,
    SolarTerm::DaXue,
    SolarTerm::DongZhi,
    SolarTerm::XiaoHan,
    SolarTerm::DaHan,
];

impl SolarTerm {
    /// 0-based table index (Li Chun = 0).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Term from a table index; wraps modulo 24.
    pub const fn from_index(index: usize) -> Self {
        ALL_SOLAR_TERMS[index % 24]
    }

    /// Ecliptic longitude at which the term begins, in degrees [0, 360).
    pub fn longitude_deg(self) -> f64 {
        normalize_360(LI_CHUN_LONGITUDE_DEG + f64::from(self.index()) * TERM_SPAN_DEG)
    }

    /// Term whose 15° segment contains `longitude_deg`.
    pub fn from_longitude(longitude_deg: f64) -> Self {
        let rel = normalize_360(longitude_deg - LI_CHUN_LONGITUDE_DEG);
        Self::from_index((rel / TERM_SPAN_DEG).floor() as usize)
    }

    /// Following term (Da Han wraps to Li Chun).
    pub const fn next(self) -> Self {
        Self::from_index(self.index() as usize + 1)
    }

    /// Preceding term (Li Chun wraps to Da Han).
    pub const fn prev(self) -> Self {
        Self::from_index(self.index() as usize + 23)
    }

    /// Whether this is one of the twelve "jie" terms that open a solar month.
    pub const fn is_month_start(self) -> bool {
        self.index() % 2 == 0
    }

    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::LiChun => "Li Chun",
            Self::YuShui => "Yu Shui",
            Self::JingZhe => "Jing Zhe",
            Self::ChunFen => "Chun Fen",
            Self::QingMing => "Qing Ming",
            Self::GuYu => "Gu Yu",
            Self::LiXia => "Li Xia",
            Self::XiaoMan => "Xiao Man",
            Self::MangZhong => "Mang Zhong",
            Self::XiaZhi => "Xia Zhi",
            Self::XiaoShu => "Xiao Shu",
            Self::DaShu => "Da Shu",
            Self::LiQiu => "Li Qiu",
            Self::ChuShu => "Chu Shu",
            Self::BaiLu => "Bai Lu",
            Self::QiuFen => "Qiu Fen",
            Self::HanLu => "Han Lu",
            Self::ShuangJiang => "Shuang Jiang",
            Self::LiDong => "Li Dong",
            Self::XiaoXue => "Xiao Xue",
            Self::DaXue => "Da Xue",
            Self::DongZhi => "Dong Zhi",
            Self::XiaoHan => "Xiao Han",
            Self::DaHan => "Da Han",
        }
    }

    /// Traditional Chinese characters.
    pub const fn cjk(self) -> &'static str {
        match self {
            Self::LiChun => "立春",
            Self::YuShui => "雨水",
            Self::JingZhe => "驚蟄",
            Self::ChunFen => "春分",
            Self::QingMing => "清明",
            Self::GuYu => "穀雨",
            Self::LiXia => "立夏",
            Self::XiaoMan => "小滿",
            Self::MangZhong => "芒種",
            Self::XiaZhi => "夏至",
            Self::XiaoShu => "小暑",
            Self::DaShu => "大暑",
            Self::LiQiu => "立秋",
            Self::ChuShu => "處暑",
            Self::BaiLu => "白露",
            Self::QiuFen => "秋分",
            Self::HanLu => "寒露",
            Self::ShuangJiang => "霜降",
            Self::LiDong => "立冬",
            Self::XiaoXue => "小雪",
            Self::DaXue => "大雪",
            Self::DongZhi => "冬至",
            Self::XiaoHan => "小寒",
            Self::DaHan => "大寒",
        }
    }

    pub const fn english(self) -> &'static str {
        match self {
            Self::LiChun => "Spring Begins",
            Self::YuShui => "Rain Water",
            Self::JingZhe => "Awakening of Insects",
            Self::ChunFen => "Spring Equinox",
            Self::QingMing => "Pure Brightness",
            Self::GuYu => "Grain Rain",
            Self::LiXia => "Summer Begins",
            Self::XiaoMan => "Grain Buds",
            Self::MangZhong => "Grain in Ear",
            Self::XiaZhi => "Summer Solstice",
            Self::XiaoShu => "Minor Heat",
            Self::DaShu => "Major Heat",
            Self::LiQiu => "Autumn Begins",
            Self::ChuShu => "End of Heat",
            Self::BaiLu => "White Dew",
            Self::QiuFen => "Autumn Equinox",
            Self::HanLu => "Cold Dew",
            Self::ShuangJiang => "Frost Descent",
            Self::LiDong => "Winter Begins",
            Self::XiaoXue => "Minor Snow",
            Self::DaXue => "Major Snow",
            Self::DongZhi => "Winter Solstice",
            Self::XiaoHan => "Minor Cold",
            Self::DaHan => "Major Cold",
        }
    }
}

impl std::fmt::Display for SolarTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ({})", self.pinyin(), self.cjk(), self.english())
    }
}

/// Serialized shape of a [`SolarTerm`].
#[derive(Debug, Clone, Serialize)]
pub struct SolarTermRecord {
    pub index: u8,
    pub longitude: f64,
    pub pinyin: &'static str,
    pub cjk: &'static str,
    pub english: &'static str,
}

impl From<SolarTerm> for SolarTermRecord {
    fn from(term: SolarTerm) -> Self {
        Self {
            index: term.index(),
            longitude: term.longitude_deg(),
            pinyin: term.pinyin(),
            cjk: term.cjk(),
            english: term.english(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_24_entries_in_index_order() {
        assert_eq!(ALL_SOLAR_TERMS.len(), 24);
        for (i, t) in ALL_SOLAR_TERMS.iter().enumerate() {
            assert_eq!(t.index() as usize, i);
        }
    }

    #[test]
    fn first_term_is_li_chun_at_315() {
        assert_eq!(ALL_SOLAR_TERMS[0], SolarTerm::LiChun);
        assert_eq!(SolarTerm::LiChun.longitude_deg(), 315.0);
    }

    #[test]
    fn consecutive_terms_15_deg_apart() {
        for t in ALL_SOLAR_TERMS {
            let d = normalize_360(t.next().longitude_deg() - t.longitude_deg());
            assert_eq!(d, 15.0, "{t:?}");
        }
    }

    #[test]
    fn exactly_one_term_at_zero() {
        let zero: Vec<_> = ALL_SOLAR_TERMS
            .iter()
            .filter(|t| t.longitude_deg() == 0.0)
            .collect();
        assert_eq!(zero, vec![&SolarTerm::ChunFen]);
    }

    #[test]
    fn cardinal_points() {
        assert_eq!(SolarTerm::XiaZhi.longitude_deg(), 90.0);
        assert_eq!(SolarTerm::QiuFen.longitude_deg(), 180.0);
        assert_eq!(SolarTerm::DongZhi.longitude_deg(), 270.0);
        assert_eq!(SolarTerm::XiaoHan.longitude_deg(), 285.0);
        assert_eq!(SolarTerm::DaHan.longitude_deg(), 300.0);
    }

    #[test]
    fn from_longitude_segments() {
        assert_eq!(SolarTerm::from_longitude(315.0), SolarTerm::LiChun);
        assert_eq!(SolarTerm::from_longitude(329.99), SolarTerm::LiChun);
        assert_eq!(SolarTerm::from_longitude(359.99), SolarTerm::JingZhe);
        assert_eq!(SolarTerm::from_longitude(0.0), SolarTerm::ChunFen);
        assert_eq!(SolarTerm::from_longitude(314.99), SolarTerm::DaHan);
        assert_eq!(SolarTerm::from_longitude(-45.0), SolarTerm::LiChun);
    }

    #[test]
    fn next_prev_wrap() {
        assert_eq!(SolarTerm::DaHan.next(), SolarTerm::LiChun);
        assert_eq!(SolarTerm::LiChun.prev(), SolarTerm::DaHan);
        for t in ALL_SOLAR_TERMS {
            assert_eq!(t.next().prev(), t);
        }
    }

    #[test]
    fn names() {
        assert_eq!(SolarTerm::ChunFen.pinyin(), "Chun Fen");
        assert_eq!(SolarTerm::ChunFen.cjk(), "春分");
        assert_eq!(SolarTerm::ChunFen.english(), "Spring Equinox");
        assert_eq!(SolarTerm::LiChun.to_string(), "Li Chun 立春 (Spring Begins)");
    }

    #[test]
    fn month_start_terms() {
        assert!(SolarTerm::LiChun.is_month_start());
        assert!(SolarTerm::JingZhe.is_month_start());
        assert!(!SolarTerm::ChunFen.is_month_start());
        assert_eq!(ALL_SOLAR_TERMS.iter().filter(|t| t.is_month_start()).count(), 12);
    }
}
