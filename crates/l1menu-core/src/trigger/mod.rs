//! The trigger abstraction and its registry.
//!
//! A trigger is a named, versioned boolean rule with a fixed, ordered set
//! of `f32` parameters addressed by name. Name-keyed access is the slow
//! path used by menu construction, fitting and I/O; per-event evaluation
//! goes through [`crate::CachedTrigger`] instead.

mod table;


use std::fmt::Debug;

use crate::error::Result;
use crate::event::DpgEvent;

pub use table::{SuggestedBinning, TriggerFactory, TriggerTable};

/// Read-only view of a trigger: identity plus parameter values.
///
/// Result snapshots and persisted menus only need this much, which is why
/// it is split from [`Trigger`].
pub trait TriggerDescription {
    /// Trigger name, e.g. `"L1_SingleMu"`.
    fn name(&self) -> &str;

    /// Version of the trigger implementation.
    fn version(&self) -> u32;

    /// Parameter names in their fixed order.
    fn parameter_names(&self) -> Vec<String>;

    /// Current value of the named parameter.
    ///
    /// # Errors
    ///
    /// Returns [`crate::L1MenuError::InvalidParameter`] for unknown names.
    fn parameter(&self, name: &str) -> Result<f32>;
}

/// A trigger that can be applied to events and have its parameters changed.
pub trait Trigger: TriggerDescription + Debug + Send + Sync {
    /// Mutable access to the named parameter.
    fn parameter_mut(&mut self, name: &str) -> Result<&mut f32>;

    /// Whether the event passes the trigger at the current parameter values.
    fn apply(&self, event: &DpgEvent) -> bool;

    /// Whether the thresholds must be varied together when fitting.
    fn thresholds_are_correlated(&self) -> bool;

    /// Deep copy with the current parameter values.
    fn clone_box(&self) -> Box<dyn Trigger>;

    /// Sets the named parameter.
    fn set_parameter(&mut self, name: &str, value: f32) -> Result<()> {
        *self.parameter_mut(name)? = value;
        Ok(())
    }

    /// All parameter values in [`TriggerDescription::parameter_names`] order.
    ///
    /// # Errors
    ///
    /// Fails on the first listed name that [`TriggerDescription::parameter`]
    /// does not resolve.
    fn parameter_values(&self) -> Result<Vec<f32>> {
        self.parameter_names()
            .iter()
            .map(|name| self.parameter(name))
            .collect()
    }
}

impl Clone for Box<dyn Trigger> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
