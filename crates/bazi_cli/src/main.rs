mod logger;

use std::path::{Path, PathBuf};

use bazi_config::EngineSettings;
use bazi_fusion::{FusionResult, Planets, calculate_fusion};
use bazi_pillars::{BaZiResult, BirthInput, FourPillarsChart, calculate_bazi};
use bazi_solar::{SolarTerm, SolarTermCalendar, SolarTermDate, solar_longitude_deg};
use bazi_time::{
    UtcTime, day_of_year, equation_of_time_min, is_valid_jd, jd_to_unix_ms, julian_day_number,
    local_apparent_time_jd, modified_julian_date,
};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "bazi", about = "Solar terms, Four Pillars charts and East-West fusion")]
struct Cli {
    /// Engine settings file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

/// Local civil birth time and place.
#[derive(Args)]
struct BirthArgs {
    /// Local civil date/time (YYYY-MM-DDThh:mm)
    #[arg(long)]
    date: String,
    /// Geographic longitude in degrees, east positive
    #[arg(long, allow_hyphen_values = true)]
    lon: f64,
    /// Timezone offset in minutes, local minus UTC (e.g. 120 for CEST)
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    tz: i32,
    /// IANA time zone (e.g. Europe/Berlin); replaces --tz with the offset
    /// in effect at the birth date
    #[arg(long, conflicts_with = "tz")]
    zone: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Julian Date of a UTC instant
    Jd {
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ)
        date: String,
    },
    /// UTC calendar date of a Julian Date
    Calendar {
        /// Julian Date
        jd: f64,
    },
    /// Apparent solar longitude at a UTC instant
    SolarLongitude {
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ)
        date: String,
        /// Also print the equation of time and local apparent time
        #[arg(long, allow_hyphen_values = true)]
        lon: Option<f64>,
    },
    /// All 24 solar terms of a civil year
    SolarTerms {
        /// Civil year
        year: i32,
    },
    /// Solar term containing a UTC instant
    CurrentTerm {
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ)
        date: String,
    },
    /// First solar term starting after a UTC instant
    NextTerm {
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ)
        date: String,
    },
    /// Start of the solar term preceding the one containing a UTC instant
    PrevTerm {
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ)
        date: String,
    },
    /// Four Pillars chart of a birth
    Bazi {
        #[command(flatten)]
        birth: BirthArgs,
    },
    /// Fuse a birth chart with Western planet placements
    Fusion {
        #[command(flatten)]
        birth: BirthArgs,
        /// Planet map as JSON: {"Sun": {"longitude": 92.5, "sign": "cancer"}, ...}
        #[arg(long)]
        planets: PathBuf,
        /// Fill missing signs from longitudes
        #[arg(long)]
        derive_signs: bool,
    },
}

fn exit_with(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

fn parse_utc(s: &str) -> UtcTime {
    s.parse::<UtcTime>().unwrap_or_else(|e| exit_with(e))
}

fn load_settings(path: Option<&Path>) -> EngineSettings {
    match path {
        Some(p) => EngineSettings::load(p)
            .unwrap_or_else(|e| exit_with(format!("{}: {e}", p.display()))),
        None => EngineSettings::default(),
    }
}

fn birth_input(args: &BirthArgs) -> BirthInput {
    let local = parse_utc(&args.date);
    let (year, month, day) = (local.year, local.month as i32, local.day as i32);
    let (hour, minute) = (local.hour as i32, local.minute as i32);
    if let Some(zone) = &args.zone {
        let input = BirthInput::in_zone(year, month, day, hour, minute, args.lon, zone)
            .unwrap_or_else(|e| exit_with(e));
        tracing::debug!(zone = %zone, offset = input.timezone_offset_minutes, "resolved time zone");
        return input;
    }
    let input = BirthInput::new(year, month, day, hour, minute, args.lon, args.tz);
    input.validate().unwrap_or_else(|e| exit_with(e));
    input
}

fn load_planets(path: &Path) -> Planets {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| exit_with(format!("{}: {e}", path.display())));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| exit_with(format!("{}: {e}", path.display())))
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => exit_with(e),
    }
}

fn print_term_date(label: &str, d: &SolarTermDate) {
    println!("{label}{}", d.term);
    println!("  Time: {}  (JD {:.5})", d.utc, d.jd_utc);
    println!("  Longitude: {:.0} deg", d.term.longitude_deg());
}

fn print_chart(chart: &FourPillarsChart) {
    println!("Chart: {chart}");
    for (label, p) in ["Year", "Month", "Day", "Hour"].iter().zip(chart.pillars()) {
        println!(
            "  {label:<5} {:<10} {}  {} {}, branch {}  ({})",
            p.name(),
            p.cjk(),
            p.polarity(),
            p.element(),
            p.branch_element(),
            p.branch().animal().name()
        );
    }
    let dm = chart.day_master();
    println!(
        "  Day Master: {} {} ({} {})",
        dm.stem.name(),
        dm.stem.cjk(),
        dm.polarity(),
        dm.element()
    );
}

fn print_bazi(r: &BaZiResult) {
    print_chart(&r.chart);
    println!("  Solar longitude: {:.4} deg", r.solar_longitude_deg);
    println!("  JD (UTC): {:.6}", r.jd_utc);
    let tst = r.true_solar_minutes;
    println!(
        "  True solar time: {:02}:{:02}",
        (tst / 60.0).floor() as u32,
        (tst % 60.0).floor() as u32
    );
}

fn print_fusion(r: &FusionResult) {
    let balance = &r.element_vector;
    let fmt = |v: [f64; 5]| {
        v.iter()
            .map(|x| format!("{x:.3}"))
            .collect::<Vec<_>>()
            .join(" ")
    };
    println!("Element vectors (Wood Fire Earth Metal Water)");
    println!("  Eastern:  {}", fmt(balance.eastern.values()));
    println!("  Western:  {}", fmt(balance.western.values()));
    println!("  Combined: {}", fmt(balance.combined.values()));
    println!(
        "  Dominant: {} ({})  Deficient: {} ({})",
        balance.dominant_element,
        balance.dominant_element_de,
        balance.deficient_element,
        balance.deficient_element_de
    );
    println!(
        "Harmony index: {:.4} - {} ({})",
        r.harmony_index, r.harmony_interpretation, r.harmony_interpretation_de
    );
    if r.resonances.is_empty() {
        println!("No resonances (no signs supplied)");
    }
    for res in &r.resonances {
        println!(
            "  {:<18} {:<8} {:>3.1} {:?}: {}",
            res.kind.name(),
            res.eastern.name(),
            res.strength,
            res.quality,
            res.description
        );
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JdReport {
    julian_date: f64,
    modified_julian_date: f64,
    julian_day_number: i64,
    unix_ms: f64,
    day_of_year: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LongitudeReport {
    julian_date: f64,
    solar_longitude: f64,
    term: SolarTerm,
    #[serde(skip_serializing_if = "Option::is_none")]
    equation_of_time_minutes: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    local_apparent_time: Option<UtcTime>,
}

#[derive(Serialize)]
struct FusionReport {
    bazi: BaZiResult,
    fusion: FusionResult,
}

fn main() {
    let cli = Cli::parse();
    let settings = load_settings(cli.config.as_deref());
    logger::init_cli_logger(&settings.logging.filter, cli.verbose);
    tracing::debug!(config = ?cli.config, "settings loaded");

    let calendar: SolarTermCalendar = settings
        .solar_term_calendar()
        .unwrap_or_else(|e| exit_with(e));

    match cli.command {
        Commands::Jd { date } => {
            let jd = parse_utc(&date).to_jd();
            let report = JdReport {
                julian_date: jd,
                modified_julian_date: modified_julian_date(jd),
                julian_day_number: julian_day_number(jd),
                unix_ms: jd_to_unix_ms(jd),
                day_of_year: day_of_year(jd),
            };
            if cli.json {
                print_json(&report);
            } else {
                println!("JD:  {:.6}", report.julian_date);
                println!("MJD: {:.6}", report.modified_julian_date);
                println!("JDN: {}", report.julian_day_number);
                println!("Unix ms: {:.0}", report.unix_ms);
                println!("Day of year: {}", report.day_of_year);
            }
        }

        Commands::Calendar { jd } => {
            if !is_valid_jd(jd) {
                exit_with(format!("JD {jd} outside the supported range"));
            }
            let utc = UtcTime::from_jd(jd);
            if cli.json {
                print_json(&utc);
            } else {
                println!("{utc}");
            }
        }

        Commands::SolarLongitude { date, lon } => {
            let jd = parse_utc(&date).to_jd();
            let report = LongitudeReport {
                julian_date: jd,
                solar_longitude: solar_longitude_deg(jd),
                term: calendar.term_for_date(jd),
                equation_of_time_minutes: lon.map(|_| equation_of_time_min(jd)),
                local_apparent_time: lon.map(|l| UtcTime::from_jd(local_apparent_time_jd(jd, l))),
            };
            if cli.json {
                print_json(&report);
            } else {
                println!("Solar longitude: {:.4} deg", report.solar_longitude);
                println!("Term: {}", report.term);
                if let (Some(eot), Some(lat)) =
                    (report.equation_of_time_minutes, report.local_apparent_time)
                {
                    println!("Equation of time: {eot:+.2} min");
                    println!("Local apparent time: {lat}");
                }
            }
        }

        Commands::SolarTerms { year } => {
            let dates = calendar.all_terms(year);
            if cli.json {
                print_json(&dates);
            } else {
                for d in &dates {
                    println!(
                        "{:>2} {:<16} {} {:>3.0} deg  {}",
                        d.term.index(),
                        d.term.pinyin(),
                        d.term.cjk(),
                        d.term.longitude_deg(),
                        d.utc
                    );
                }
            }
        }

        Commands::CurrentTerm { date } => {
            let jd = parse_utc(&date).to_jd();
            let info = calendar.current_term(jd);
            if cli.json {
                print_json(&info);
            } else {
                println!("Current term: {}", info.term);
                println!("  Start: {}", info.start.utc);
                println!("  End:   {}", info.end.utc);
                if calendar.is_on_term(jd, info.term) {
                    println!(
                        "  Within {} h of the term start",
                        calendar.proximity_hours()
                    );
                }
            }
        }

        Commands::NextTerm { date } => {
            let next = calendar.next_term(parse_utc(&date).to_jd());
            if cli.json {
                print_json(&next);
            } else {
                print_term_date("Next term: ", &next);
            }
        }

        Commands::PrevTerm { date } => {
            let prev = calendar.previous_term(parse_utc(&date).to_jd());
            if cli.json {
                print_json(&prev);
            } else {
                print_term_date("Previous term: ", &prev);
            }
        }

        Commands::Bazi { birth } => {
            let result = calculate_bazi(&birth_input(&birth));
            if cli.json {
                print_json(&result);
            } else {
                print_bazi(&result);
            }
        }

        Commands::Fusion {
            birth,
            planets,
            derive_signs,
        } => {
            let bazi = calculate_bazi(&birth_input(&birth));
            let mut planets = load_planets(&planets);
            if derive_signs {
                planets = planets.with_derived_signs();
            }
            let fusion = calculate_fusion(&bazi.chart, &planets);
            if cli.json {
                print_json(&FusionReport { bazi, fusion });
            } else {
                print_chart(&bazi.chart);
                println!();
                print_fusion(&fusion);
            }
        }
    }
}
