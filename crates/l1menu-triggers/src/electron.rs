//! Electron and photon triggers.

use l1menu_core::{DpgEvent, TkElectron};

use crate::common::in_region;

/// `L1_SingleTkEle`: one track electron above threshold.
///
/// Version 1 reads the second track electron collection.
#[derive(Debug, Clone, PartialEq)]
pub struct SingleTkEleEta {
    version: u32,
    threshold1: f32,
    region_cut: f32,
}

impl SingleTkEleEta {
    pub fn v0() -> Self {
        Self {
            version: 0,
            threshold1: 20.0,
            region_cut: 4.5,
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
        let electrons = match self.version {
            0 => &event.data.tk_electrons,
            _ => &event.data.tk_electrons2,
        };
        electrons.iter().any(|electron| {
            electron.bx == 0
                && in_region(electron.eta, self.region_cut)
                && electron.et >= self.threshold1
        })
    }
}

impl_trigger!(SingleTkEleEta, "L1_SingleTkEle", correlated = false, {
    threshold1 => "threshold1",
    region_cut => "regionCut",
});

/// `L1_DoubleTkEM`: two track EM objects, each leg with its own threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct DoubleTkEm {
    version: u32,
    leg1threshold1: f32,
    leg2threshold1: f32,
    region_cut: f32,
}

impl DoubleTkEm {
    pub fn v0() -> Self {
        Self {
            version: 0,
            leg1threshold1: 20.0,
            leg2threshold1: 20.0,
            region_cut: 4.5,
        }
    }

    fn passes(&self, event: &DpgEvent) -> bool {
        if !event.is_zero_bias() {
            return false;
        }
        let mut n1 = 0;
        let mut n2 = 0;
        for em in event
            .data
            .tk_em
            .iter()
            .filter(|em| em.bx == 0 && in_region(em.eta, self.region_cut))
        {
            if em.et >= self.leg1threshold1 {
                n1 += 1;
            }
            if em.et >= self.leg2threshold1 {
                n2 += 1;
            }
        }
        n1 >= 1 && n2 >= 2
    }
}

impl_trigger!(DoubleTkEm, "L1_DoubleTkEM", correlated = false, {
    leg1threshold1 => "leg1threshold1",
    leg2threshold1 => "leg2threshold1",
    region_cut => "regionCut",
});

/// `L1_TkEle_EG`: a track electron plus a distinct calo EG object.
///
/// The EG object must not sit at the electron's eta and phi, so the two
/// legs are not independent. Version 1 reads the second electron collection.
#[derive(Debug, Clone, PartialEq)]
pub struct TkEleEg {
    version: u32,
    leg1threshold1: f32,
    leg1region_cut: f32,
    leg2threshold1: f32,
    leg2region_cut: f32,
}

impl TkEleEg {
    pub fn v0() -> Self {
        Self {
            version: 0,
            leg1threshold1: 20.0,
            leg1region_cut: 4.5,
            leg2threshold1: 20.0,
            leg2region_cut: 4.5,
        }
    }

    pub fn v1() -> Self {
        Self {
            version: 1,
            ..Self::v0()
        }
    }

    fn has_distinct_eg(&self, event: &DpgEvent, electron: &TkElectron) -> bool {
        event.data.eg.iter().any(|eg| {
            eg.bx == 0
                && in_region(eg.eta, self.leg2region_cut)
                && eg.et >= self.leg2threshold1
                && !(eg.eta == electron.eta && eg.phi == electron.phi)
        })
    }

    fn passes(&self, event: &DpgEvent) -> bool {
        if !event.is_zero_bias() {
            return false;
        }
        let electrons = match self.version {
            0 => &event.data.tk_electrons,
            _ => &event.data.tk_electrons2,
        };
        electrons
            .iter()
            .filter(|electron| {
                electron.bx == 0
                    && in_region(electron.eta, self.leg1region_cut)
                    && electron.et >= self.leg1threshold1
            })
            .any(|electron| self.has_distinct_eg(event, electron))
    }
}

impl_trigger!(TkEleEg, "L1_TkEle_EG", correlated = true, {
    leg1threshold1 => "leg1threshold1",
    leg1region_cut => "leg1regionCut",
    leg2threshold1 => "leg2threshold1",
    leg2region_cut => "leg2regionCut",
});
