//! Panchanga elements and muhurta periods for a chart instant.
//!
//! The five elements (tithi, karana, yoga, vaar, hora) come from the
//! chart's own sidereal luminaries. The period engine partitions the
//! daytime [sunrise, sunset] into eight parts for rahu kala, yamaganda and
//! gulika kala with Monday-indexed part selectors, and into fifteen for
//! the abhijit muhurta.

use serde::{Deserialize, Serialize};

use jyotish_base::{
    Graha, KaranaPosition, TithiPosition, Vaar, YogaPosition, hora_ruler_at,
    karana_from_elongation, tithi_from_elongation, vaar_from_jd, yoga_from_sum,
};
use jyotish_ephem::Ephemeris;
use jyotish_math::normalize_360;

use crate::chart::Chart;
use crate::error::ChartError;

/// Monday-indexed 1-based rahu kala parts (of 8).
pub const RAHU_KALA_PARTS: [u8; 7] = [2, 7, 5, 6, 4, 3, 8];

/// Monday-indexed 1-based yamaganda parts.
pub const YAMAGANDA_PARTS: [u8; 7] = [6, 4, 5, 3, 7, 8, 2];

/// Monday-indexed 1-based gulika kala parts.
pub const GULIKA_KALA_PARTS: [u8; 7] = [6, 5, 4, 3, 2, 8, 7];

/// A half-open time interval in JD (UT).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Period {
    pub start_jd: f64,
    pub end_jd: f64,
}

impl Period {
    pub fn contains(&self, jd: f64) -> bool {
        jd >= self.start_jd && jd < self.end_jd
    }

    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }
}

/// The five panchanga elements at the chart instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanchangaInfo {
    pub tithi: TithiPosition,
    pub karana: KaranaPosition,
    pub yoga: YogaPosition,
    pub vaar: Vaar,
    /// Ruler of the running hora.
    pub hora_ruler: Graha,
    /// 0-based hora index within the Vedic day (0..23).
    pub hora_index: u8,
    /// True between sunrise and sunset.
    pub is_daytime: bool,
}

/// The auspicious/inauspicious period bounds of the Vedic day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MuhurtaPeriods {
    pub rahu_kala: Period,
    pub yamaganda: Period,
    pub gulika_kala: Period,
    pub abhijit: Period,
}

/// The Vedic day frame around an instant: the sunrise at or before it,
/// the sunset closing that daytime, and the sunrise opening the next day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayFrame {
    pub sunrise_jd: f64,
    pub sunset_jd: f64,
    pub next_sunrise_jd: f64,
}

/// Resolve the day frame from the ephemeris.
pub fn day_frame<E: Ephemeris>(
    ephemeris: &E,
    jd_ut: f64,
    geo: &jyotish_ephem::GeoLocation,
) -> Result<DayFrame, ChartError> {
    let sunrise_jd = ephemeris.sunrise_before(jd_ut, geo)?;
    let sunset_jd = ephemeris.sunset_after(sunrise_jd, geo)?;
    let next_sunrise_jd = ephemeris.sunrise_after(sunrise_jd, geo)?;
    Ok(DayFrame {
        sunrise_jd,
        sunset_jd,
        next_sunrise_jd,
    })
}

/// The n-th of `parts` equal parts of [start, end], 1-based.
fn part_of(start: f64, end: f64, part: u8, parts: u8) -> Period {
    let width = (end - start) / f64::from(parts);
    Period {
        start_jd: start + f64::from(part - 1) * width,
        end_jd: start + f64::from(part) * width,
    }
}

/// Compute the muhurta periods of the Vedic day containing the frame.
///
/// The weekday is that of the sunrise; the selector tables are
/// Monday-indexed, which is kept explicit via `Vaar::monday_index`.
pub fn muhurta_periods(frame: &DayFrame) -> MuhurtaPeriods {
    let vaar = vaar_from_jd(frame.sunrise_jd);
    let widx = vaar.monday_index() as usize;
    let (d0, d1) = (frame.sunrise_jd, frame.sunset_jd);
    MuhurtaPeriods {
        rahu_kala: part_of(d0, d1, RAHU_KALA_PARTS[widx], 8),
        yamaganda: part_of(d0, d1, YAMAGANDA_PARTS[widx], 8),
        gulika_kala: part_of(d0, d1, GULIKA_KALA_PARTS[widx], 8),
        abhijit: part_of(d0, d1, 8, 15),
    }
}

/// The 24 hora periods of the Vedic day with their rulers: twelve day
/// twelfths from sunrise, twelve night twelfths from sunset.
pub fn hora_periods(frame: &DayFrame) -> [(Period, Graha); 24] {
    let vaar = vaar_from_jd(frame.sunrise_jd);
    core::array::from_fn(|i| {
        let period = if i < 12 {
            part_of(frame.sunrise_jd, frame.sunset_jd, (i + 1) as u8, 12)
        } else {
            part_of(frame.sunset_jd, frame.next_sunrise_jd, (i - 11) as u8, 12)
        };
        (period, hora_ruler_at(vaar, i as u8))
    })
}

/// Panchanga elements from the chart's sidereal luminaries.
pub fn panchanga_of_chart<E: Ephemeris>(
    ephemeris: &E,
    chart: &Chart,
) -> Result<PanchangaInfo, ChartError> {
    let sun = chart.body(Graha::Surya).longitude;
    let moon = chart.body(Graha::Chandra).longitude;
    let elongation = normalize_360(moon - sun);

    let frame = day_frame(ephemeris, chart.jd_ut, chart.geo())?;
    let vaar = vaar_from_jd(chart.jd_ut);

    let is_daytime = chart.jd_ut < frame.sunset_jd;
    let hora_index = if is_daytime {
        let width = (frame.sunset_jd - frame.sunrise_jd) / 12.0;
        (((chart.jd_ut - frame.sunrise_jd) / width).floor() as u8).min(11)
    } else {
        let width = (frame.next_sunrise_jd - frame.sunset_jd) / 12.0;
        12 + (((chart.jd_ut - frame.sunset_jd) / width).floor() as u8).min(11)
    };

    Ok(PanchangaInfo {
        tithi: tithi_from_elongation(elongation),
        karana: karana_from_elongation(elongation),
        yoga: yoga_from_sum(sun + moon),
        vaar,
        hora_ruler: hora_ruler_at(vaar_from_jd(frame.sunrise_jd), hora_index),
        hora_index,
        is_daytime,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use jyotish_base::{Karana, Paksha, Vaar};
    use crate::testutil::{seed_chart, seed_ephemeris};

    /// Synthetic Monday frame: sunrise 06:00, sunset 18:00 (JD chosen so
    /// the sunrise weekday is Monday).
    fn monday_frame() -> DayFrame {
        // 2024-01-01 is a Monday; 06:00 local at Greenwich → JD .75
        let sunrise = 2_460_310.75;
        DayFrame {
            sunrise_jd: sunrise,
            sunset_jd: sunrise + 0.5,
            next_sunrise_jd: sunrise + 1.0,
        }
    }

    #[test]
    fn monday_rahu_kala_is_second_part() {
        let p = muhurta_periods(&monday_frame());
        // D = 12h, part 2 = 07:30-09:00 → 1.5h after sunrise
        let start_h = (p.rahu_kala.start_jd - monday_frame().sunrise_jd) * 24.0;
        let end_h = (p.rahu_kala.end_jd - monday_frame().sunrise_jd) * 24.0;
        assert!((start_h - 1.5).abs() < 1e-9);
        assert!((end_h - 3.0).abs() < 1e-9);
    }

    #[test]
    fn monday_yamaganda_and_gulika_are_sixth_part() {
        let frame = monday_frame();
        let p = muhurta_periods(&frame);
        // Part 6 = 13:30-15:00
        for period in [p.yamaganda, p.gulika_kala] {
            let start_h = (period.start_jd - frame.sunrise_jd) * 24.0;
            assert!((start_h - 7.5).abs() < 1e-9);
            assert!((period.duration_days() * 24.0 - 1.5).abs() < 1e-9);
        }
    }

    #[test]
    fn abhijit_is_eighth_fifteenth() {
        let frame = monday_frame();
        let p = muhurta_periods(&frame);
        let start = (p.abhijit.start_jd - frame.sunrise_jd) / 0.5;
        let end = (p.abhijit.end_jd - frame.sunrise_jd) / 0.5;
        assert!((start - 7.0 / 15.0).abs() < 1e-12);
        assert!((end - 8.0 / 15.0).abs() < 1e-12);
    }

    #[test]
    fn all_weekday_selectors_in_range() {
        for t in [RAHU_KALA_PARTS, YAMAGANDA_PARTS, GULIKA_KALA_PARTS] {
            for p in t {
                assert!((1..=8).contains(&p));
            }
        }
    }

    #[test]
    fn hora_sequence_rotates_from_day_lord() {
        let frame = monday_frame();
        let horas = hora_periods(&frame);
        assert_eq!(horas[0].1, Vaar::Somvaar.lord());
        // Second hora of Monday is Saturn
        assert_eq!(horas[1].1, Graha::Shani);
        // 24 periods tile sunrise → next sunrise
        assert!((horas[0].0.start_jd - frame.sunrise_jd).abs() < 1e-12);
        assert!((horas[23].0.end_jd - frame.next_sunrise_jd).abs() < 1e-12);
        for w in horas.windows(2) {
            assert!((w[0].0.end_jd - w[1].0.start_jd).abs() < 1e-9);
        }
    }

    #[test]
    fn seed_chart_elements() {
        let eph = seed_ephemeris();
        let chart = seed_chart();
        let p = panchanga_of_chart(&eph, &chart).unwrap();
        // Shukla Dwadashi, Balava, Vriddhi, Budhavaar
        assert_eq!(p.tithi.paksha, Paksha::Shukla);
        assert_eq!(p.tithi.number_in_paksha, 12);
        assert_eq!(p.karana.karana, Karana::Balava);
        assert_eq!(p.yoga.name(), "Vriddhi");
        assert_eq!(p.vaar, Vaar::Budhvaar);
        // 20:51 is after sunset
        assert!(!p.is_daytime);
        assert!(p.hora_index >= 12);
    }

    #[test]
    fn seed_periods_lie_within_daytime() {
        let eph = seed_ephemeris();
        let chart = seed_chart();
        let frame = day_frame(&eph, chart.jd_ut, chart.geo()).unwrap();
        let p = muhurta_periods(&frame);
        for period in [p.rahu_kala, p.yamaganda, p.gulika_kala, p.abhijit] {
            assert!(period.start_jd >= frame.sunrise_jd - 1e-9);
            assert!(period.end_jd <= frame.sunset_jd + 1e-9);
            assert!(period.duration_days() > 0.0);
        }
    }
}
