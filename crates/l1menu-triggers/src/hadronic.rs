//! Jet and energy sum triggers.

use l1menu_core::{DpgEvent, TkJet};

use crate::common::in_region;

/// `L1_HTM`: missing hadronic transverse energy above threshold.
///
/// Version 0 uses the calorimeter sum, version 1 the track based one.
#[derive(Debug, Clone, PartialEq)]
pub struct Htm {
    version: u32,
    threshold1: f32,
}

impl Htm {
    pub fn v0() -> Self {
        Self {
            version: 0,
            threshold1: 50.0,
        }
    }

    pub fn v1() -> Self {
        Self {
            version: 1,
            ..Self::v0()
        }
    }

    fn passes(&self, event: &DpgEvent) -> bool {
        if !event.is_zero_bias() {
            return false;
        }
        let htm = match self.version {
            0 => event.data.sums.htm,
            _ => event.data.sums.tk_htm,
        };
        htm >= self.threshold1
    }
}

impl_trigger!(Htm, "L1_HTM", correlated = false, {
    threshold1 => "threshold1",
});

/// `L1_MultiTkJet`: several track jets with descending thresholds.
///
/// Passes when at least one jet is above `threshold1`, two above
/// `threshold2`, three above `threshold3` and `numberOfJets` above
/// `threshold4`. Version 1 only counts jets within `zVtxCut` of the
/// primary vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiTkJet {
    version: u32,
    threshold1: f32,
    threshold2: f32,
    threshold3: f32,
    threshold4: f32,
    region_cut: f32,
    number_of_jets: f32,
    z_vtx_cut: f32,
}

impl MultiTkJet {
    pub fn v0() -> Self {
        Self {
            version: 0,
            threshold1: 40.0,
            threshold2: 40.0,
            threshold3: 40.0,
            threshold4: 40.0,
            region_cut: 4.5,
            number_of_jets: 4.0,
            z_vtx_cut: 999.0,
        }
    }

    pub fn v1() -> Self {
        Self {
            version: 1,
            z_vtx_cut: 1.0,
            ..Self::v0()
        }
    }

    fn accepts_jet(&self, event: &DpgEvent, jet: &TkJet) -> bool {
        jet.bx == 0
            && in_region(jet.eta, self.region_cut)
            && (self.version == 0
                || (jet.z_vtx - event.data.primary_vertex_z).abs() < self.z_vtx_cut)
    }

    fn passes(&self, event: &DpgEvent) -> bool {
        if !event.is_zero_bias() {
            return false;
        }
        let mut counts = [0usize; 4];
        let thresholds = [self.threshold1, self.threshold2, self.threshold3, self.threshold4];
        for jet in event.data.tk_jets.iter().filter(|jet| self.accepts_jet(event, jet)) {
            for (count, threshold) in counts.iter_mut().zip(thresholds) {
                if jet.et >= threshold {
                    *count += 1;
                }
            }
        }
        counts[0] >= 1
            && counts[1] >= 2
            && counts[2] >= 3
            && counts[3] as f32 >= self.number_of_jets
    }
}

impl_trigger!(MultiTkJet, "L1_MultiTkJet", correlated = false, {
    threshold1 => "threshold1",
    threshold2 => "threshold2",
    threshold3 => "threshold3",
    threshold4 => "threshold4",
    region_cut => "regionCut",
    number_of_jets => "numberOfJets",
    z_vtx_cut => "zVtxCut",
});
