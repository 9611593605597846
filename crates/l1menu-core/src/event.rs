//! Event model consumed by triggers and samples.
//!
//! The rate engine only needs [`Event::weight`]. Everything else in
//! [`DpgEvent`] is raw detector output that concrete triggers read.

/// A weighted event in a sample.
pub trait Event {
    /// Statistical weight of the event, never negative.
    fn weight(&self) -> f64;
}

/// Index of the zero bias bit in [`DpgEvent::physics_bits`].
pub const ZERO_BIAS_BIT: u32 = 0;

/// A calorimeter or track-matched object with a calo region index for eta.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CaloObject {
    pub et: f32,
    /// Calo region index, 0 to 21.
    pub eta: f32,
    pub phi: f32,
    pub bx: i32,
}

impl CaloObject {
    /// An in-time object at the given transverse energy and region.
    pub fn new(et: f32, eta: f32, phi: f32) -> Self {
        Self { et, eta, phi, bx: 0 }
    }
}

/// Track-matched electron.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TkElectron {
    pub et: f32,
    /// Calo region index, 0 to 21.
    pub eta: f32,
    pub phi: f32,
    pub bx: i32,
    pub z_vtx: f32,
    pub track_isolation: f32,
}

impl TkElectron {
    pub fn new(et: f32, eta: f32, phi: f32) -> Self {
        Self {
            et,
            eta,
            phi,
            ..Self::default()
        }
    }
}

/// Muon candidate, either stand-alone or track matched.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Muon {
    pub pt: f32,
    /// Pseudorapidity (not a region index).
    pub eta: f32,
    pub phi: f32,
    pub bx: i32,
    pub quality: i32,
    pub isolated: bool,
    pub z_vtx: f32,
}

impl Muon {
    /// An in-time muon of the given quality.
    pub fn new(pt: f32, eta: f32, quality: i32) -> Self {
        Self {
            pt,
            eta,
            quality,
            ..Self::default()
        }
    }
}

/// Track jet.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TkJet {
    pub et: f32,
    /// Calo region index, 0 to 21.
    pub eta: f32,
    pub phi: f32,
    pub bx: i32,
    pub z_vtx: f32,
}

impl TkJet {
    pub fn new(et: f32, eta: f32) -> Self {
        Self {
            et,
            eta,
            ..Self::default()
        }
    }
}

/// Global energy sums.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EnergySums {
    pub htt: f32,
    pub htm: f32,
    pub etm: f32,
    pub tk_htm: f32,
}

/// Raw per-event object collections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisData {
    pub tk_electrons: Vec<TkElectron>,
    /// Second track electron collection (looser track matching).
    pub tk_electrons2: Vec<TkElectron>,
    pub tk_muons: Vec<Muon>,
    pub muons: Vec<Muon>,
    pub eg: Vec<CaloObject>,
    pub tk_em: Vec<CaloObject>,
    pub tk_taus: Vec<CaloObject>,
    pub tk_jets: Vec<TkJet>,
    pub sums: EnergySums,
    pub primary_vertex_z: f32,
}

/// One event as seen by the L1 trigger emulation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DpgEvent {
    pub weight: f64,
    pub physics_bits: u128,
    pub data: AnalysisData,
}

impl DpgEvent {
    /// Creates a zero bias event with the given weight and no objects.
    pub fn zero_bias(weight: f64) -> Self {
        Self {
            weight,
            physics_bits: 1 << ZERO_BIAS_BIT,
            data: AnalysisData::default(),
        }
    }

    /// Creates a zero bias event carrying the given objects.
    pub fn with_data(weight: f64, data: AnalysisData) -> Self {
        Self {
            data,
            ..Self::zero_bias(weight)
        }
    }

    /// Returns the physics bit at `index`; bits past 127 read as unset.
    pub fn physics_bit(&self, index: u32) -> bool {
        index < 128 && self.physics_bits & (1 << index) != 0
    }

    /// Whether the event was recorded by the zero bias trigger.
    pub fn is_zero_bias(&self) -> bool {
        self.physics_bit(ZERO_BIAS_BIT)
    }
}

impl Event for DpgEvent {
    fn weight(&self) -> f64 {
        self.weight
    }
}
