//! Detector event builders.
//!
//! Every event built here is zero bias and has all objects in bunch
//! crossing 0, so only the kinematics decide whether a trigger fires.

use l1menu_core::{CaloObject, DpgEvent, EnergySums, Muon, TkElectron, TkJet};

/// Fluent builder for [`DpgEvent`].
#[derive(Clone, Debug)]
pub struct DpgEventBuilder {
    event: DpgEvent,
}

impl DpgEventBuilder {
    pub fn new(weight: f64) -> Self {
        Self {
            event: DpgEvent::zero_bias(weight),
        }
    }

    /// Stand-alone muon at `eta` with quality 4.
    pub fn muon(mut self, pt: f32, eta: f32) -> Self {
        self.event.data.muons.push(Muon::new(pt, eta, 4));
        self
    }

    /// Track muon at `eta` with quality 4.
    pub fn tk_muon(mut self, pt: f32, eta: f32) -> Self {
        self.event.data.tk_muons.push(Muon::new(pt, eta, 4));
        self
    }

    /// Track electron in calo region `eta`.
    pub fn tk_electron(mut self, et: f32, eta: f32) -> Self {
        self.event
            .data
            .tk_electrons
            .push(TkElectron::new(et, eta, 0.0));
        self
    }

    /// Track tau in calo region `eta`.
    pub fn tk_tau(mut self, et: f32, eta: f32) -> Self {
        self.event.data.tk_taus.push(CaloObject::new(et, eta, 0.0));
        self
    }

    pub fn tk_jet(mut self, et: f32, eta: f32) -> Self {
        self.event.data.tk_jets.push(TkJet::new(et, eta));
        self
    }

    pub fn htm(mut self, htm: f32) -> Self {
        self.event.data.sums = EnergySums {
            htm,
            ..self.event.data.sums
        };
        self
    }

    pub fn build(self) -> DpgEvent {
        self.event
    }
}

/// Zero bias event with one central muon.
pub fn muon_event(weight: f64, pt: f32) -> DpgEvent {
    DpgEventBuilder::new(weight).muon(pt, 0.0).build()
}

/// Zero bias event with one central track tau and one central muon.
pub fn tau_muon_event(weight: f64, tau_et: f32, muon_pt: f32) -> DpgEvent {
    DpgEventBuilder::new(weight)
        .tk_tau(tau_et, 10.0)
        .muon(muon_pt, 0.0)
        .build()
}

/// Zero bias event with the given calorimeter HTM.
pub fn htm_event(weight: f64, htm: f32) -> DpgEvent {
    DpgEventBuilder::new(weight).htm(htm).build()
}
