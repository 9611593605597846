//! L1Menu Core - trigger abstractions for menu rate studies
//!
//! This crate provides the building blocks the rate engine works on:
//! - The [`Trigger`] trait with string-keyed parameter access
//! - The [`TriggerTable`] registry mapping (name, version) to factories
//! - The [`Sample`] and [`CachedTrigger`] contracts for weighted event sources
//! - [`TriggerMenu`] and its per-trigger [`TriggerConstraint`]s

pub mod constraint;
pub mod error;
pub mod event;
pub mod menu;
pub mod sample;
pub mod tools;
pub mod trigger;

#[cfg(test)]
pub(crate) mod test_utils;

pub use constraint::{normalise_requested_rates, ConstraintType, RequestedRate, TriggerConstraint};
pub use error::{L1MenuError, Result};
pub use event::{
    AnalysisData, CaloObject, DpgEvent, EnergySums, Event, Muon, TkElectron, TkJet,
    ZERO_BIAS_BIT,
};
pub use menu::TriggerMenu;
pub use sample::{CachedTrigger, DpgSample, FrozenTrigger, Sample};
pub use trigger::{SuggestedBinning, Trigger, TriggerDescription, TriggerFactory, TriggerTable};
