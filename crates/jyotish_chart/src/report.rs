//! Read-only result facade over an assembled chart.
//!
//! `ChartReport` gathers every derived record behind one immutable value
//! with accessor methods, and serialises to the canonical snake_case JSON
//! encoding.

use serde::{Deserialize, Serialize};

use jyotish_base::{
    AshtakavargaResult, DashaState, Dignity, Graha, GrahaClass, KpPointer, Nakshatra,
    dasha_state_at, dignity_at,
};
use jyotish_ephem::Ephemeris;

use crate::ashta::natal_ashtakavarga;
use crate::chart::{BodyPosition, Chart, HouseCusp};
use crate::error::ChartError;
use crate::input::ChartInput;
use crate::kp_chart::{KpReport, kp_report};
use crate::panchanga::{MuhurtaPeriods, PanchangaInfo, day_frame, muhurta_periods, panchanga_of_chart};
use crate::strength::{StrengthReport, strength_report};

/// Classification summary of one body for the report surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodySummary {
    pub graha: Graha,
    pub class: GrahaClass,
    pub nakshatra: Nakshatra,
    pub pada: u8,
    pub lord: Graha,
    pub dignity: Dignity,
}

/// The assembled read-only chart report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartReport {
    pub chart: Chart,
    pub bodies: [BodySummary; 9],
    pub panchanga: PanchangaInfo,
    pub periods: MuhurtaPeriods,
    pub kp: KpReport,
    pub dasha: DashaState,
    pub strength: StrengthReport,
    pub ashtakavarga: AshtakavargaResult,
}

impl ChartReport {
    /// Build the complete report from an input and an ephemeris provider.
    pub fn build<E: Ephemeris>(ephemeris: &E, input: ChartInput) -> Result<Self, ChartError> {
        let chart = Chart::assemble(ephemeris, input)?;
        let frame = day_frame(ephemeris, chart.jd_ut, chart.geo())?;
        let panchanga = panchanga_of_chart(ephemeris, &chart)?;
        let strength = strength_report(ephemeris, &chart)?;
        let moon = chart.body(Graha::Chandra);
        let dasha = dasha_state_at(moon.longitude, chart.jd_ut, chart.jd_ut);

        let sapta_rashis: [u8; 7] =
            core::array::from_fn(|i| chart.bodies[i].rashi.index());
        let bodies = core::array::from_fn(|i| {
            let b = &chart.bodies[i];
            let info = b.nakshatra();
            BodySummary {
                graha: b.graha,
                class: b.graha.class(),
                nakshatra: info.nakshatra,
                pada: info.pada,
                lord: info.lord,
                dignity: dignity_at(b.graha, b.longitude, b.retrograde, &sapta_rashis),
            }
        });

        Ok(Self {
            bodies,
            panchanga,
            periods: muhurta_periods(&frame),
            kp: kp_report(&chart),
            dasha,
            strength,
            ashtakavarga: natal_ashtakavarga(&chart),
            chart,
        })
    }

    /// Body position by graha.
    pub fn body(&self, graha: Graha) -> &BodyPosition {
        self.chart.body(graha)
    }

    /// House cusp by 1-based index.
    pub fn house(&self, index: u8) -> Option<&HouseCusp> {
        self.chart.house(index)
    }

    /// KP pointer of a body.
    pub fn kp_pointer_of(&self, graha: Graha) -> &KpPointer {
        &self.kp.bodies[graha.index() as usize]
    }

    /// Shadbala record of a sapta graha. None for nodes.
    pub fn shadbala_of(&self, graha: Graha) -> Option<&jyotish_base::ShadbalaRecord> {
        if graha.is_sapta() {
            Some(&self.strength.shadbala[graha.index() as usize])
        } else {
            None
        }
    }
}
