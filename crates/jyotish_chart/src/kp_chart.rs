//! KP pointers for an assembled chart: every body and house cusp carries
//! its (sign lord, nakshatra lord, sub-lord, sub-sub-lord) four-tuple.

use serde::{Deserialize, Serialize};

use jyotish_base::{Graha, KpPointer, kp_pointer};

use crate::chart::Chart;

/// KP pointers of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KpReport {
    /// Pointer per body, indexed by `Graha::index()`.
    pub bodies: [KpPointer; 9],
    /// Pointer per house cusp, house 1 first.
    pub cusps: [KpPointer; 12],
    /// Pointer of the ascendant.
    pub ascendant: KpPointer,
}

/// Compute the KP pointers of a chart.
pub fn kp_report(chart: &Chart) -> KpReport {
    KpReport {
        bodies: core::array::from_fn(|i| kp_pointer(chart.bodies[i].longitude)),
        cusps: core::array::from_fn(|i| kp_pointer(chart.houses[i].longitude)),
        ascendant: kp_pointer(chart.angles[0].longitude),
    }
}
