//! Command-line chart calculator.
//!
//! Reads a recorded ephemeris snapshot, assembles the chart for the given
//! civil moment and location, and emits either the canonical JSON document
//! or a short text report. Exit codes: 0 success, 2 bad input,
//! 3 ephemeris error, 1 other.

use std::fs;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use jyotish_base::{ALL_GRAHAS, Graha};
use jyotish_chart::{ChartError, ChartInput, ChartReport, CivilDateTime};
use jyotish_ephem::{Ayanamsha, EphemSnapshot, GeoLocation, HouseSystem, StaticEphemeris};
use jyotish_math::jd_utc_to_civil;

#[derive(Parser)]
#[command(name = "jyotish", about = "Sidereal chart calculator")]
struct Cli {
    /// Civil date as YYYY/MM/DD
    #[arg(long)]
    date: String,
    /// Civil time as HH:MM
    #[arg(long)]
    time: String,
    /// UTC offset as +HH:MM or -HH:MM
    #[arg(long)]
    tz: String,
    /// Latitude in degrees
    #[arg(long)]
    lat: f64,
    /// Longitude in degrees
    #[arg(long)]
    lon: f64,
    /// Ayanamsha tag (default Lahiri)
    #[arg(long, default_value = "lahiri")]
    ayanamsa: String,
    /// House system tag (default Whole-Sign)
    #[arg(long, default_value = "whole-sign")]
    house_system: String,
    /// Path to a recorded ephemeris snapshot (JSON)
    #[arg(long)]
    ephemeris: String,
    /// Output format: json or text
    #[arg(long, default_value = "json")]
    output: String,
}

fn parse_date(date: &str) -> Result<(i32, u32, u32), ChartError> {
    let mut parts = date.split('/');
    let year = parts
        .next()
        .and_then(|p| p.parse().ok())
        .ok_or(ChartError::BadInput("date"))?;
    let month = parts
        .next()
        .and_then(|p| p.parse().ok())
        .ok_or(ChartError::BadInput("date"))?;
    let day = parts
        .next()
        .and_then(|p| p.parse().ok())
        .ok_or(ChartError::BadInput("date"))?;
    if parts.next().is_some() {
        return Err(ChartError::BadInput("date"));
    }
    Ok((year, month, day))
}

fn parse_time(time: &str) -> Result<(u32, u32), ChartError> {
    let mut parts = time.split(':');
    let hour = parts
        .next()
        .and_then(|p| p.parse().ok())
        .ok_or(ChartError::BadInput("time"))?;
    let minute = parts
        .next()
        .and_then(|p| p.parse().ok())
        .ok_or(ChartError::BadInput("time"))?;
    if parts.next().is_some() {
        return Err(ChartError::BadInput("time"));
    }
    Ok((hour, minute))
}

fn build_report(cli: &Cli) -> Result<ChartReport, ChartError> {
    let (year, month, day) = parse_date(&cli.date)?;
    let (hour, minute) = parse_time(&cli.time)?;
    let utc_offset_min = CivilDateTime::parse_offset(&cli.tz)?;
    let datetime = CivilDateTime {
        year,
        month,
        day,
        hour,
        minute,
        second: 0.0,
        utc_offset_min,
    };
    let geo = GeoLocation::new(cli.lat, cli.lon, 0.0)?;
    let ayanamsha =
        Ayanamsha::parse(&cli.ayanamsa).ok_or(ChartError::BadInput("ayanamsa"))?;
    let house_system =
        HouseSystem::parse(&cli.house_system).ok_or(ChartError::BadInput("house_system"))?;

    let raw = fs::read_to_string(&cli.ephemeris)
        .map_err(|_| ChartError::BadInput("ephemeris"))?;
    let snapshot: EphemSnapshot =
        serde_json::from_str(&raw).map_err(|_| ChartError::BadInput("ephemeris"))?;
    let ephemeris = StaticEphemeris::new(snapshot);
    debug!(date = %cli.date, time = %cli.time, "building chart report");

    ChartReport::build(
        &ephemeris,
        ChartInput {
            datetime,
            geo,
            ayanamsha,
            house_system,
        },
    )
}

fn format_jd(jd: f64, utc_offset_min: i32) -> String {
    let (y, m, d, h, min, _) = jd_utc_to_civil(jd, utc_offset_min);
    format!("{y:04}/{m:02}/{d:02} {h:02}:{min:02}")
}

fn print_text(report: &ChartReport) {
    let offset = report.chart.input.datetime.utc_offset_min;
    println!(
        "Chart for {} (ayanamsha {}, houses {})",
        format_jd(report.chart.jd_ut, offset),
        report.chart.input.ayanamsha.name(),
        report.chart.input.house_system.name()
    );
    println!();
    println!("Bodies:");
    for graha in ALL_GRAHAS {
        let b = report.body(graha);
        let nak = &report.bodies[graha.index() as usize];
        let kp = report.kp_pointer_of(graha);
        println!(
            "  {:<8} {:>10.4} deg  {} {:>7.4}  {} pada {}  KP {}{}",
            graha.name(),
            b.longitude,
            b.rashi.name(),
            b.sign_longitude,
            nak.nakshatra.name(),
            nak.pada,
            kp.notation(),
            if b.retrograde { "  (R)" } else { "" }
        );
    }
    println!();
    println!("Houses:");
    for h in &report.chart.houses {
        println!(
            "  {:>2}  {:>10.4} deg  {}  ({:.2} deg wide)",
            h.index,
            h.longitude,
            h.rashi.name(),
            h.size
        );
    }
    println!();
    let p = &report.panchanga;
    println!("Panchanga:");
    println!(
        "  Tithi   {} ({:.1}% elapsed)",
        p.tithi.name(),
        p.tithi.completion_pct
    );
    println!("  Karana  {}", p.karana.karana.name());
    println!("  Yoga    {}", p.yoga.name());
    println!("  Vaara   {}", p.vaar.name());
    println!("  Hora    {}", p.hora_ruler.name());
    println!();
    println!("Periods:");
    for (name, period) in [
        ("Rahu Kala", report.periods.rahu_kala),
        ("Yamaganda", report.periods.yamaganda),
        ("Gulika Kala", report.periods.gulika_kala),
        ("Abhijit", report.periods.abhijit),
    ] {
        println!(
            "  {:<12} {} - {}",
            name,
            format_jd(period.start_jd, offset),
            format_jd(period.end_jd, offset)
        );
    }
    println!();
    println!("Shadbala (rupas, required):");
    for graha in jyotish_base::SAPTA_GRAHAS {
        if let Some(s) = report.shadbala_of(graha) {
            println!(
                "  {:<8} {:>7.2} / {:>5.2}  {}",
                graha.name(),
                s.total_rupas,
                s.required_virupas / 60.0,
                if s.is_sufficient { "strong" } else { "weak" }
            );
        }
    }
    println!();
    println!(
        "Dasha: {} mahadasha, {} antardasha",
        report.dasha.mahadasha.lord.name(),
        report.dasha.antardasha.lord.name()
    );
    let moon_sarva =
        report.ashtakavarga.sav.total_points[report.body(Graha::Chandra).rashi.index() as usize];
    println!("Sarvashtakavarga at Moon sign: {moon_sarva} bindus");
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match build_report(&cli) {
        Ok(report) => {
            if cli.output == "text" {
                print_text(&report);
            } else if cli.output == "json" {
                match serde_json::to_string_pretty(&report) {
                    Ok(json) => println!("{json}"),
                    Err(e) => {
                        eprintln!("error: serialization failed: {e}");
                        return ExitCode::from(1);
                    }
                }
            } else {
                eprintln!("error: bad input: output");
                return ExitCode::from(2);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(e.exit_code() as u8)
        }
    }
}
