//! Test utilities for l1menu-core
//!
//! Provides a small muon trigger used across the crate's test modules.

use crate::error::{L1MenuError, Result};
use crate::event::{DpgEvent, Muon};
use crate::trigger::{Trigger, TriggerDescription, TriggerTable};

/// Single muon trigger with two parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct TestMuonTrigger {
    pub version: u32,
    pub threshold1: f32,
    pub eta_cut: f32,
}

impl TestMuonTrigger {
    pub fn new(version: u32) -> Self {
        Self {
            version,
            threshold1: 20.0,
            eta_cut: 2.1,
        }
    }
}

impl TriggerDescription for TestMuonTrigger {
    fn name(&self) -> &str {
        "L1_TestMu"
    }

    fn version(&self) -> u32 {
        self.version
    }

    fn parameter_names(&self) -> Vec<String> {
        vec!["threshold1".to_string(), "etaCut".to_string()]
    }

    fn parameter(&self, name: &str) -> Result<f32> {
        match name {
            "threshold1" => Ok(self.threshold1),
            "etaCut" => Ok(self.eta_cut),
            _ => Err(L1MenuError::invalid_parameter(self.name(), name)),
        }
    }
}

impl Trigger for TestMuonTrigger {
    fn parameter_mut(&mut self, name: &str) -> Result<&mut f32> {
        match name {
            "threshold1" => Ok(&mut self.threshold1),
            "etaCut" => Ok(&mut self.eta_cut),
            _ => Err(L1MenuError::invalid_parameter("L1_TestMu", name)),
        }
    }

    fn apply(&self, event: &DpgEvent) -> bool {
        event
            .data
            .muons
            .iter()
            .any(|muon| muon.pt >= self.threshold1 && muon.eta.abs() <= self.eta_cut)
    }

    fn thresholds_are_correlated(&self) -> bool {
        false
    }

    fn clone_box(&self) -> Box<dyn Trigger> {
        Box::new(self.clone())
    }
}

/// Table with versions 0 and 1 of `L1_TestMu`.
pub fn test_table() -> TriggerTable {
    let mut table = TriggerTable::new();
    table
        .register_trigger(|| Box::new(TestMuonTrigger::new(0)))
        .unwrap();
    table
        .register_trigger(|| Box::new(TestMuonTrigger::new(1)))
        .unwrap();
    table.register_suggested_binning("L1_TestMu", "threshold1", 140, 0.0, 140.0);
    table
}

/// Zero bias event holding a single central muon.
pub fn muon_event(weight: f64, pt: f32) -> DpgEvent {
    let mut event = DpgEvent::zero_bias(weight);
    event.data.muons.push(Muon::new(pt, 0.5, 4));
    event
}
