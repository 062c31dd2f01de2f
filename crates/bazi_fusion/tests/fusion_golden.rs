//! Golden fusion results.
//!
//! The planet set is a mid-1980 placement; charts are 庚申 壬午 甲辰 辛未
//! (Wood Day Master) and the computed 1980-06-24 14:30 Berlin chart.

use bazi_fusion::{
    ElementVector, HarmonyLevel, PlanetPosition, Planets, ResonanceKind, ResonanceQuality,
    WesternBody, ZodiacSign, calculate_fusion,
};
use bazi_pillars::{BirthInput, Branch, FourPillarsChart, Pillar, Stem, WuXing, calculate_bazi};

fn pillar(stem: Stem, branch: Branch) -> Pillar {
    Pillar::new(stem, branch).unwrap()
}

fn wood_day_master_chart() -> FourPillarsChart {
    FourPillarsChart::new(
        pillar(Stem::Geng, Branch::Shen),
        pillar(Stem::Ren, Branch::Wu),
        pillar(Stem::Jia, Branch::Chen),
        pillar(Stem::Xin, Branch::Wei),
    )
}

fn berlin_chart() -> FourPillarsChart {
    calculate_bazi(&BirthInput::new(1980, 6, 24, 14, 30, 13.405, 120)).chart
}

fn full_planets() -> Planets {
    [
        (WesternBody::Sun, PlanetPosition::with_sign(92.5, ZodiacSign::Cancer)),
        (WesternBody::Moon, PlanetPosition::with_sign(215.3, ZodiacSign::Scorpio)),
        (WesternBody::Mercury, PlanetPosition::with_sign(78.2, ZodiacSign::Gemini)),
        (WesternBody::Venus, PlanetPosition::with_sign(105.4, ZodiacSign::Cancer)),
        (WesternBody::Mars, PlanetPosition::with_sign(142.8, ZodiacSign::Leo)),
        (WesternBody::Jupiter, PlanetPosition::with_sign(175.6, ZodiacSign::Virgo)),
        (WesternBody::Saturn, PlanetPosition::with_sign(155.2, ZodiacSign::Virgo)),
    ]
    .into_iter()
    .collect()
}

fn minimal_planets() -> Planets {
    [
        (WesternBody::Sun, PlanetPosition::new(92.5)),
        (WesternBody::Moon, PlanetPosition::new(215.3)),
    ]
    .into_iter()
    .collect()
}

fn assert_unit(v: &ElementVector) {
    assert!((v.sum() - 1.0).abs() < 1e-5, "sum={}", v.sum());
    assert!(v.values().iter().all(|x| *x >= 0.0));
}

#[test]
fn vectors_sum_to_one() {
    for chart in [wood_day_master_chart(), berlin_chart()] {
        for planets in [full_planets(), minimal_planets(), Planets::new()] {
            let r = calculate_fusion(&chart, &planets);
            assert_unit(&r.element_vector.combined);
            assert_unit(&r.element_vector.eastern);
            assert_unit(&r.element_vector.western);
            assert!((0.0..=1.0).contains(&r.harmony_index));
        }
    }
}

#[test]
fn wood_day_master_full_planets() {
    let r = calculate_fusion(&wood_day_master_chart(), &full_planets());
    assert!((r.harmony_index - 0.9616).abs() < 1e-3, "h={}", r.harmony_index);
    assert_eq!(r.harmony_level, HarmonyLevel::VeryHigh);
    assert_eq!(r.harmony_interpretation, "very high coherence");
    assert_eq!(r.element_vector.dominant_element, WuXing::Metal);
    assert_eq!(r.element_vector.deficient_element, WuXing::Earth);
    assert_eq!(r.element_vector.dominant_element_de, "Metall");
}

#[test]
fn wood_day_master_resonances() {
    let r = calculate_fusion(&wood_day_master_chart(), &full_planets());
    let kinds: Vec<_> = r.resonances.iter().map(|x| x.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ResonanceKind::SunDayMaster,
            ResonanceKind::MoonHourPillar,
            ResonanceKind::JupiterYearPillar,
            ResonanceKind::SaturnMonthPillar,
            ResonanceKind::MarsDayPillar,
        ]
    );

    let sun = &r.resonances[0];
    assert_eq!(sun.eastern, WuXing::Wood);
    assert!(sun.western.contains("cancer"));
    assert!(!sun.description.is_empty());
    // Water generates Wood
    assert_eq!(sun.quality, ResonanceQuality::Harmony);
    assert_eq!(sun.strength, 0.7);

    let moon = &r.resonances[1];
    assert_eq!(moon.eastern, WuXing::Earth);
    assert!(moon.western.contains("scorpio"));
    // Earth controls Water
    assert_eq!(moon.quality, ResonanceQuality::Tension);
    assert_eq!(moon.strength, 0.6);
}

#[test]
fn no_resonances_without_signs() {
    let r = calculate_fusion(&wood_day_master_chart(), &minimal_planets());
    assert!(r.resonances.is_empty());
}

#[test]
fn berlin_chart_fusion() {
    let chart = berlin_chart();
    assert_eq!(chart.day_master().element(), WuXing::Earth);

    let r = calculate_fusion(&chart, &full_planets());
    assert!((r.harmony_index - 0.8688).abs() < 1e-3, "h={}", r.harmony_index);
    assert_eq!(r.element_vector.dominant_element, WuXing::Earth);
    assert_eq!(r.element_vector.deficient_element, WuXing::Wood);
    assert_eq!(r.element_vector.eastern.get(WuXing::Wood), 0.0);

    let r = calculate_fusion(&chart, &minimal_planets());
    assert!((r.harmony_index - 0.7755).abs() < 1e-3, "h={}", r.harmony_index);
    assert_eq!(r.harmony_level, HarmonyLevel::Good);
}

#[test]
fn empty_planets_give_uniform_western() {
    let r = calculate_fusion(&berlin_chart(), &Planets::new());
    assert_eq!(r.element_vector.western, ElementVector::uniform());
    assert!(r.resonances.is_empty());
}

#[test]
fn identical_element_sun_day_master() {
    // Bing day stem: Fire Day Master
    let chart = FourPillarsChart::new(
        Pillar::from_cycle_index(0),
        Pillar::from_cycle_index(2),
        pillar(Stem::Bing, Branch::Yin),
        Pillar::from_cycle_index(0),
    );
    let planets: Planets = [(WesternBody::Sun, PlanetPosition::with_sign(130.0, ZodiacSign::Leo))]
        .into_iter()
        .collect();
    let r = calculate_fusion(&chart, &planets);
    assert_eq!(r.resonances.len(), 1);
    assert_eq!(r.resonances[0].kind, ResonanceKind::SunDayMaster);
    assert_eq!(r.resonances[0].quality, ResonanceQuality::Harmony);
    assert_eq!(r.resonances[0].strength, 1.0);
}

#[test]
fn derived_signs_enable_resonances() {
    let planets = minimal_planets().with_derived_signs();
    let r = calculate_fusion(&wood_day_master_chart(), &planets);
    assert_eq!(r.resonances.len(), 2);
    assert!(r.resonances[0].western.starts_with("cancer"));
}

#[test]
fn deterministic() {
    let a = calculate_fusion(&berlin_chart(), &full_planets());
    let b = calculate_fusion(&berlin_chart(), &full_planets());
    assert_eq!(a, b);
    assert_eq!(a.harmony_index.to_bits(), b.harmony_index.to_bits());
}

#[test]
fn planets_from_json() {
    let json = r#"{
        "Sun": {"longitude": 92.5, "sign": "cancer"},
        "Moon": {"longitude": 215.3, "sign": "scorpio"},
        "Ceres": {"longitude": 12.0}
    }"#;
    let planets: Planets = serde_json::from_str(json).unwrap();
    let r = calculate_fusion(&wood_day_master_chart(), &planets);
    assert_eq!(r.resonances.len(), 2);
}

#[test]
fn serialized_field_names() {
    let r = calculate_fusion(&wood_day_master_chart(), &full_planets());
    let v = serde_json::to_value(&r).unwrap();
    assert!(v["harmonyIndex"].is_f64());
    assert_eq!(v["harmonyInterpretation"], "very high coherence");
    assert_eq!(v["harmonyInterpretationDE"], "Sehr hohe Kohärenz");
    assert_eq!(v["elementVector"]["dominantElement"], "Metal");
    assert_eq!(v["elementVector"]["dominantElementDE"], "Metall");
    assert_eq!(v["elementVector"]["combined"].as_array().unwrap().len(), 5);
    assert_eq!(v["resonances"][0]["type"], "Sun-DayMaster");
    assert_eq!(v["resonances"][0]["eastern"], "Wood");
    assert_eq!(v["resonances"][0]["quality"], "harmony");
    assert!(v.get("harmonyLevel").is_none());
}
