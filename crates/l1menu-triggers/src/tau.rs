//! Tau triggers.

use l1menu_core::DpgEvent;

use crate::common::in_region;

/// `L1_SingleTkTau`: one track tau above threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct SingleTkTauEta {
    version: u32,
    threshold1: f32,
    region_cut: f32,
}

impl SingleTkTauEta {
    pub fn v0() -> Self {
        Self {
            version: 0,
            threshold1: 20.0,
            region_cut: 4.5,
        }
    }

    fn passes(&self, event: &DpgEvent) -> bool {
        event.is_zero_bias()
            && event.data.tk_taus.iter().any(|tau| {
                tau.bx == 0 && in_region(tau.eta, self.region_cut) && tau.et >= self.threshold1
            })
    }
}

impl_trigger!(SingleTkTauEta, "L1_SingleTkTau", correlated = false, {
    threshold1 => "threshold1",
    region_cut => "regionCut",
});
