//! Cross triggers combining two legs.
//!
//! [`CrossTrigger`] combines two independent triggers with a logical AND and
//! exposes their parameters with `leg1`/`leg2` prefixes. Triggers whose legs
//! share objects, like [`TkEleTkMu`], are written out in full instead.

use l1menu_core::{DpgEvent, L1MenuError, Result, TkElectron, Trigger, TriggerDescription};

use crate::common::{in_region, passes_quality, within_eta};
use crate::hadronic::Htm;
use crate::muon::SingleMuEta;
use crate::tau::SingleTkTauEta;

const LEG1: &str = "leg1";
const LEG2: &str = "leg2";

/// Logical AND of two triggers.
#[derive(Debug, Clone)]
pub struct CrossTrigger {
    name: &'static str,
    version: u32,
    leg1: Box<dyn Trigger>,
    leg2: Box<dyn Trigger>,
}

impl CrossTrigger {
    pub fn new(
        name: &'static str,
        version: u32,
        leg1: impl Trigger + 'static,
        leg2: impl Trigger + 'static,
    ) -> Self {
        Self {
            name,
            version,
            leg1: Box::new(leg1),
            leg2: Box::new(leg2),
        }
    }

    /// `L1_TkTau_Mu` version 0.
    pub fn tk_tau_mu_v0() -> Self {
        Self::new("L1_TkTau_Mu", 0, SingleTkTauEta::v0(), SingleMuEta::v0())
    }

    /// `L1_Mu_TkTau` version 0, the muon being the leading leg.
    pub fn mu_tk_tau_v0() -> Self {
        Self::new("L1_Mu_TkTau", 0, SingleMuEta::v0(), SingleTkTauEta::v0())
    }

    /// `L1_SingleMu_HTM` version 0, calorimeter HTM.
    pub fn single_mu_htm_v0() -> Self {
        Self::new("L1_SingleMu_HTM", 0, SingleMuEta::v0(), Htm::v0())
    }

    /// `L1_SingleMu_HTM` version 1, track HTM.
    pub fn single_mu_htm_v1() -> Self {
        Self::new("L1_SingleMu_HTM", 1, SingleMuEta::v0(), Htm::v1())
    }

    pub fn leg1(&self) -> &dyn Trigger {
        self.leg1.as_ref()
    }

    pub fn leg2(&self) -> &dyn Trigger {
        self.leg2.as_ref()
    }

    fn invalid(&self, name: &str) -> L1MenuError {
        L1MenuError::invalid_parameter(self.name, name)
    }
}

impl TriggerDescription for CrossTrigger {
    fn name(&self) -> &str {
        self.name
    }

    fn version(&self) -> u32 {
        self.version
    }

    fn parameter_names(&self) -> Vec<String> {
        let leg1 = self.leg1.parameter_names().into_iter().map(|name| format!("{LEG1}{name}"));
        let leg2 = self.leg2.parameter_names().into_iter().map(|name| format!("{LEG2}{name}"));
        leg1.chain(leg2).collect()
    }

    fn parameter(&self, name: &str) -> Result<f32> {
        let value = if let Some(rest) = name.strip_prefix(LEG1) {
            self.leg1.parameter(rest)
        } else if let Some(rest) = name.strip_prefix(LEG2) {
            self.leg2.parameter(rest)
        } else {
            return Err(self.invalid(name));
        };
        value.map_err(|_| self.invalid(name))
    }
}

impl Trigger for CrossTrigger {
    fn parameter_mut(&mut self, name: &str) -> Result<&mut f32> {
        let error = L1MenuError::invalid_parameter(self.name, name);
        let slot = if let Some(rest) = name.strip_prefix(LEG1) {
            self.leg1.parameter_mut(rest)
        } else if let Some(rest) = name.strip_prefix(LEG2) {
            self.leg2.parameter_mut(rest)
        } else {
            return Err(error);
        };
        slot.map_err(|_| error)
    }

    fn apply(&self, event: &DpgEvent) -> bool {
        self.leg1.apply(event) && self.leg2.apply(event)
    }

    fn thresholds_are_correlated(&self) -> bool {
        true
    }

    fn clone_box(&self) -> Box<dyn Trigger> {
        Box::new(self.clone())
    }
}

/// `L1_TkEle_TkMu`: a track electron and a track muon.
///
/// - v0: first electron collection, no vertex matching
/// - v1: first electron collection, muon within `zVtxCut` of the electron
/// - v2: second electron collection, with vertex matching
#[derive(Debug, Clone, PartialEq)]
pub struct TkEleTkMu {
    version: u32,
    leg1threshold1: f32,
    leg1region_cut: f32,
    leg2threshold1: f32,
    eta_cut: f32,
    muon_quality: f32,
    z_vtx_cut: f32,
    trk_isol_cut: f32,
}

impl TkEleTkMu {
    pub fn v0() -> Self {
        Self {
            version: 0,
            leg1threshold1: 20.0,
            leg1region_cut: 4.5,
            leg2threshold1: 20.0,
            eta_cut: 5.0,
            muon_quality: 4.0,
            z_vtx_cut: 1.0,
            trk_isol_cut: 999.0,
        }
    }

    pub fn v1() -> Self {
        Self {
            version: 1,
            ..Self::v0()
        }
    }

    pub fn v2() -> Self {
        Self {
            version: 2,
            ..Self::v0()
        }
    }

    fn has_matching_muon(&self, event: &DpgEvent, electron: &TkElectron) -> bool {
        let match_vertex = self.version >= 1;
        event.data.tk_muons.iter().any(|muon| {
            (!match_vertex || (electron.z_vtx - muon.z_vtx).abs() < self.z_vtx_cut)
                && muon.bx == 0
                && within_eta(muon.eta, self.eta_cut)
                && passes_quality(muon.quality, self.muon_quality)
                && muon.pt >= self.leg2threshold1
        })
    }

    fn passes(&self, event: &DpgEvent) -> bool {
        if !event.is_zero_bias() {
            return false;
        }
        let electrons = match self.version {
            0 | 1 => &event.data.tk_electrons,
            _ => &event.data.tk_electrons2,
        };
        electrons
            .iter()
            .filter(|electron| {
                electron.bx == 0
                    && in_region(electron.eta, self.leg1region_cut)
                    && electron.track_isolation <= self.trk_isol_cut
                    && electron.et >= self.leg1threshold1
            })
            .any(|electron| self.has_matching_muon(event, electron))
    }
}

impl_trigger!(TkEleTkMu, "L1_TkEle_TkMu", correlated = true, {
    leg1threshold1 => "leg1threshold1",
    leg1region_cut => "leg1regionCut",
    leg2threshold1 => "leg2threshold1",
    eta_cut => "etaCut",
    muon_quality => "muonQuality",
    z_vtx_cut => "zVtxCut",
    trk_isol_cut => "trkIsolCut",
});
