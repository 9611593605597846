//! Seeded random samples.
//!
//! Samples are generated from a `ChaCha8Rng` so the same seed yields the
//! same events on every platform.

use l1menu_core::{CaloObject, DpgEvent, DpgSample, EnergySums, Muon, TkElectron, TkJet};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::scripted::ScriptedSample;

/// Shape of a random [`ScriptedSample`].
#[derive(Clone, Debug)]
pub struct RandomSampleSpec {
    pub seed: u64,
    pub events: usize,
    /// Trigger names used as columns.
    pub triggers: Vec<String>,
    /// Independent probability that each trigger passes each event.
    pub pass_probability: f64,
    /// Draw weights from `[0.5, 2.0)` instead of using unit weights.
    pub weighted: bool,
    pub event_rate: f64,
}

impl RandomSampleSpec {
    pub fn new(seed: u64, events: usize, triggers: &[&str]) -> Self {
        Self {
            seed,
            events,
            triggers: triggers.iter().map(|name| name.to_string()).collect(),
            pass_probability: 0.3,
            weighted: false,
            event_rate: 1.0,
        }
    }

    pub fn weighted(mut self) -> Self {
        self.weighted = true;
        self
    }

    pub fn with_pass_probability(mut self, probability: f64) -> Self {
        self.pass_probability = probability;
        self
    }

    pub fn with_event_rate(mut self, event_rate: f64) -> Self {
        self.event_rate = event_rate;
        self
    }
}

/// Generates a scripted sample with independent random trigger decisions.
pub fn random_scripted_sample(spec: &RandomSampleSpec) -> ScriptedSample {
    let mut rng = ChaCha8Rng::seed_from_u64(spec.seed);
    let mut sample = ScriptedSample::new(spec.event_rate);
    for _ in 0..spec.events {
        let weight = if spec.weighted {
            rng.random_range(0.5..2.0)
        } else {
            1.0
        };
        let passing: Vec<&str> = spec
            .triggers
            .iter()
            .filter(|_| rng.random_bool(spec.pass_probability))
            .map(String::as_str)
            .collect();
        sample.push(weight, &passing);
    }
    sample
}

/// Generates zero-bias detector events with a few objects of every kind.
///
/// Energies are drawn from `[0, 100)`, calo regions from `[0, 21]` and
/// pseudorapidities from `(-3, 3)`.
pub fn random_dpg_sample(seed: u64, events: usize, event_rate: f64) -> DpgSample {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut sample = DpgSample::new(event_rate);
    for _ in 0..events {
        let mut event = DpgEvent::zero_bias(1.0);
        let data = &mut event.data;
        for _ in 0..rng.random_range(0..3) {
            data.muons.push(Muon::new(
                rng.random_range(0.0..100.0),
                rng.random_range(-3.0..3.0),
                rng.random_range(0..8),
            ));
        }
        for _ in 0..rng.random_range(0..3) {
            data.tk_muons.push(Muon::new(
                rng.random_range(0.0..100.0),
                rng.random_range(-3.0..3.0),
                rng.random_range(0..8),
            ));
        }
        for _ in 0..rng.random_range(0..3) {
            data.tk_electrons.push(TkElectron::new(
                rng.random_range(0.0..100.0),
                rng.random_range(0.0..21.0),
                rng.random_range(0.0..18.0),
            ));
        }
        for _ in 0..rng.random_range(0..3) {
            data.tk_taus.push(CaloObject::new(
                rng.random_range(0.0..100.0),
                rng.random_range(0.0..21.0),
                rng.random_range(0.0..18.0),
            ));
        }
        for _ in 0..rng.random_range(0..6) {
            data.tk_jets.push(TkJet::new(
                rng.random_range(0.0..100.0),
                rng.random_range(0.0..21.0),
            ));
        }
        data.sums = EnergySums {
            htt: rng.random_range(0.0..300.0),
            htm: rng.random_range(0.0..100.0),
            etm: rng.random_range(0.0..100.0),
            tk_htm: rng.random_range(0.0..100.0),
        };
        sample.push(event);
    }
    sample
}
