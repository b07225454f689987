//! Shadbala and bhava bala assembly: extracts every input the strength
//! engine needs from the chart and the day frame, then delegates to the
//! pure component math.
//!
//! Year and month lords follow the ahargana convention: days elapsed from
//! the Kali epoch split into 360-day years and 30-day months, each ruled
//! by the weekday lord of its opening day.

use serde::{Deserialize, Serialize};

use jyotish_base::{
    BhavaBala, Graha, SAPTA_GRAHAS, ShadbalaInputs, ShadbalaRecord, bhava_bala, rashi_lord,
    shadbala, shadbala::KalaBalaInputs, vaar_from_jd,
};
use jyotish_ephem::Ephemeris;
use jyotish_math::{ecliptic_declination, normalize_360};
use jyotish_math::angle::MEAN_OBLIQUITY_J2000_DEG;

use crate::chart::Chart;
use crate::error::ChartError;
use crate::panchanga::{DayFrame, day_frame, hora_periods};

/// JD of the Kali epoch used by the ahargana year/month lords.
pub const KALI_EPOCH_JD: f64 = 588_465.5;

/// Weekday lord of the 360-day ahargana year containing `jd`.
pub fn year_lord(jd_ut: f64) -> Graha {
    let ahargana = jd_ut - KALI_EPOCH_JD;
    vaar_from_jd(jd_ut - ahargana.rem_euclid(360.0)).lord()
}

/// Weekday lord of the 30-day ahargana month containing `jd`.
pub fn month_lord(jd_ut: f64) -> Graha {
    let ahargana = jd_ut - KALI_EPOCH_JD;
    vaar_from_jd(jd_ut - ahargana.rem_euclid(30.0)).lord()
}

/// Ruler of the hora running at `jd` within the day frame.
pub fn running_hora_lord(frame: &DayFrame, jd_ut: f64) -> Graha {
    let horas = hora_periods(frame);
    horas
        .iter()
        .find(|(p, _)| p.contains(jd_ut))
        .map(|&(_, lord)| lord)
        // An instant exactly at the closing sunrise belongs to the next
        // day's first hora; fall back to the last hora of this frame.
        .unwrap_or(horas[23].1)
}

/// Complete strength report: shadbala per sapta graha plus bhava bala per
/// house.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrengthReport {
    /// Shadbala records in sapta graha order.
    pub shadbala: [ShadbalaRecord; 7],
    /// Bhava bala per house, index 0 = house 1.
    pub bhava_bala: [BhavaBala; 12],
}

/// Build the shadbala inputs from a chart and its day frame.
pub fn shadbala_inputs(chart: &Chart, frame: &DayFrame) -> ShadbalaInputs {
    let sidereal_lons: [f64; 9] =
        core::array::from_fn(|i| chart.bodies[i].longitude);
    let sapta_lons: [f64; 7] = core::array::from_fn(|i| sidereal_lons[i]);

    let declinations: [f64; 7] = core::array::from_fn(|i| {
        let b = &chart.bodies[i];
        // Declination from the tropical position; the ayanamsha shift is
        // a frame rotation and does not change it.
        ecliptic_declination(
            normalize_360(b.longitude + chart.ayanamsha_deg),
            b.latitude,
            MEAN_OBLIQUITY_J2000_DEG,
        )
    });

    let moon_sun_elongation = normalize_360(
        chart.body(Graha::Chandra).longitude - chart.body(Graha::Surya).longitude,
    );

    let is_daytime = chart.jd_ut < frame.sunset_jd && chart.jd_ut >= frame.sunrise_jd;
    let day_night_fraction = if is_daytime {
        (chart.jd_ut - frame.sunrise_jd) / (frame.sunset_jd - frame.sunrise_jd)
    } else {
        (chart.jd_ut - frame.sunset_jd) / (frame.next_sunrise_jd - frame.sunset_jd)
    }
    .clamp(0.0, 1.0 - f64::EPSILON);

    let saptavarga_lons: [[f64; 7]; 7] = core::array::from_fn(|v| {
        core::array::from_fn(|g| {
            chart.varga_longitude_of(SAPTA_GRAHAS[g], jyotish_base::SAPTAVARGA[v])
        })
    });
    let shadvarga_lons: [[f64; 7]; 6] = core::array::from_fn(|v| {
        core::array::from_fn(|g| {
            chart.varga_longitude_of(SAPTA_GRAHAS[g], jyotish_base::SHADVARGA[v])
        })
    });

    ShadbalaInputs {
        sidereal_lons,
        retrograde: core::array::from_fn(|i| chart.bodies[i].retrograde),
        bhava_numbers: core::array::from_fn(|i| chart.whole_sign_house(SAPTA_GRAHAS[i])),
        speeds: core::array::from_fn(|i| chart.bodies[i].speed_longitude),
        cusp_lons: core::array::from_fn(|i| chart.houses[i].longitude),
        saptavarga_lons,
        shadvarga_lons,
        kala: KalaBalaInputs {
            is_daytime,
            day_night_fraction,
            moon_sun_elongation,
            year_lord: year_lord(chart.jd_ut),
            month_lord: month_lord(chart.jd_ut),
            weekday_lord: vaar_from_jd(chart.jd_ut).lord(),
            hora_lord: running_hora_lord(frame, chart.jd_ut),
            declinations,
            sidereal_lons: sapta_lons,
        },
    }
}

/// Compute the full strength report for a chart.
pub fn strength_report<E: Ephemeris>(
    ephemeris: &E,
    chart: &Chart,
) -> Result<StrengthReport, ChartError> {
    let frame = day_frame(ephemeris, chart.jd_ut, chart.geo())?;
    let inputs = shadbala_inputs(chart, &frame);

    let mut records = [ShadbalaRecord::default(); 7];
    for (i, g) in SAPTA_GRAHAS.iter().enumerate() {
        records[i] = shadbala(*g, &inputs)?;
    }

    let graha_lons: [f64; 9] = core::array::from_fn(|i| chart.bodies[i].longitude);
    let cusp_lons: [f64; 12] = core::array::from_fn(|i| chart.houses[i].longitude);
    let bhava = core::array::from_fn(|i| {
        let house_num = (i + 1) as u8;
        let lord = rashi_lord(chart.houses[i].rashi);
        let lord_total = if lord.is_sapta() {
            records[lord.index() as usize].total_virupas
        } else {
            0.0
        };
        bhava_bala(house_num, lord_total, &cusp_lons, &graha_lons)
    });

    Ok(StrengthReport {
        shadbala: records,
        bhava_bala: bhava,
    })
}
