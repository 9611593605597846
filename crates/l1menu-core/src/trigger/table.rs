//! Registry of trigger factories keyed by (name, version).

use std::collections::{BTreeMap, HashMap};
use std::fmt::{self, Debug};

use tracing::trace;

use super::{Trigger, TriggerDescription};
use crate::error::{L1MenuError, Result};

/// Produces a default-parameterised trigger instance.
pub type TriggerFactory = Box<dyn Fn() -> Box<dyn Trigger> + Send + Sync>;

/// Suggested histogram binning for one trigger parameter.
///
/// Only plotting tools read this; the rate engine never does.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuggestedBinning {
    pub number_of_bins: usize,
    pub lower_edge: f32,
    pub upper_edge: f32,
}

/// Table of every trigger the process knows how to build.
///
/// Populate it once at startup, then share it read-only. The registry holds
/// at most one factory per (name, version).
///
/// # Example
///
/// ```
/// use l1menu_core::{DpgEvent, L1MenuError, Trigger, TriggerDescription, TriggerTable};
///
/// #[derive(Debug, Clone)]
/// struct AlwaysPass;
///
/// impl TriggerDescription for AlwaysPass {
///     fn name(&self) -> &str { "L1_AlwaysPass" }
///     fn version(&self) -> u32 { 0 }
///     fn parameter_names(&self) -> Vec<String> { Vec::new() }
///     fn parameter(&self, name: &str) -> l1menu_core::Result<f32> {
///         Err(L1MenuError::invalid_parameter(self.name(), name))
///     }
/// }
///
/// impl Trigger for AlwaysPass {
///     fn parameter_mut(&mut self, name: &str) -> l1menu_core::Result<&mut f32> {
///         Err(L1MenuError::invalid_parameter(self.name(), name))
///     }
///     fn apply(&self, _event: &DpgEvent) -> bool { true }
///     fn thresholds_are_correlated(&self) -> bool { false }
///     fn clone_box(&self) -> Box<dyn Trigger> { Box::new(self.clone()) }
/// }
///
/// let mut table = TriggerTable::new();
/// table.register_trigger(|| Box::new(AlwaysPass)).unwrap();
///
/// let trigger = table.instantiate("L1_AlwaysPass").unwrap();
/// assert_eq!(trigger.version(), 0);
/// ```
#[derive(Default)]
pub struct TriggerTable {
    factories: BTreeMap<(String, u32), TriggerFactory>,
    binning: HashMap<(String, String), SuggestedBinning>,
}

impl Debug for TriggerTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TriggerTable")
            .field("triggers", &self.factories.keys().collect::<Vec<_>>())
            .field("binning_count", &self.binning.len())
            .finish()
    }
}

impl TriggerTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a factory under an explicit (name, version).
    ///
    /// # Errors
    ///
    /// Returns [`L1MenuError::DuplicateRegistration`] if the pair is taken.
    pub fn register<F>(&mut self, name: impl Into<String>, version: u32, factory: F) -> Result<()>
    where
        F: Fn() -> Box<dyn Trigger> + Send + Sync + 'static,
    {
        let name = name.into();
        let key = (name, version);
        if self.factories.contains_key(&key) {
            return Err(L1MenuError::DuplicateRegistration {
                name: key.0,
                version,
            });
        }
        trace!(event = "trigger_registered", name = %key.0, version);
        self.factories.insert(key, Box::new(factory));
        Ok(())
    }

    /// Registers a factory, reading name and version from a sample instance.
    pub fn register_trigger<F>(&mut self, factory: F) -> Result<()>
    where
        F: Fn() -> Box<dyn Trigger> + Send + Sync + 'static,
    {
        let sample = factory();
        let name = sample.name().to_string();
        let version = sample.version();
        self.register(name, version, factory)
    }

    /// Records suggested binning for a parameter of every version of `trigger_name`.
    pub fn register_suggested_binning(
        &mut self,
        trigger_name: impl Into<String>,
        parameter_name: impl Into<String>,
        number_of_bins: usize,
        lower_edge: f32,
        upper_edge: f32,
    ) {
        self.binning.insert(
            (trigger_name.into(), parameter_name.into()),
            SuggestedBinning {
                number_of_bins,
                lower_edge,
                upper_edge,
            },
        );
    }

    /// Suggested binning, if any was registered.
    pub fn suggested_binning(
        &self,
        trigger_name: &str,
        parameter_name: &str,
    ) -> Option<SuggestedBinning> {
        self.binning
            .get(&(trigger_name.to_string(), parameter_name.to_string()))
            .copied()
    }

    /// Instantiates the latest registered version of `name`.
    ///
    /// # Errors
    ///
    /// Returns [`L1MenuError::UnregisteredTrigger`] if no version exists.
    pub fn instantiate(&self, name: &str) -> Result<Box<dyn Trigger>> {
        let version = self
            .latest_version(name)
            .ok_or_else(|| L1MenuError::UnregisteredTrigger {
                name: name.to_string(),
                version: None,
            })?;
        self.instantiate_version(name, version)
    }

    /// Instantiates an exact (name, version).
    pub fn instantiate_version(&self, name: &str, version: u32) -> Result<Box<dyn Trigger>> {
        self.factories
            .get(&(name.to_string(), version))
            .map(|factory| factory())
            .ok_or_else(|| L1MenuError::UnregisteredTrigger {
                name: name.to_string(),
                version: Some(version),
            })
    }

    /// Deep copy of `trigger`, including its current parameter values.
    ///
    /// Works from the description alone, so frozen snapshots can be turned
    /// back into live triggers.
    pub fn copy_trigger<D>(&self, trigger: &D) -> Result<Box<dyn Trigger>>
    where
        D: TriggerDescription + ?Sized,
    {
        let mut copy = self.instantiate_version(trigger.name(), trigger.version())?;
        for name in trigger.parameter_names() {
            copy.set_parameter(&name, trigger.parameter(&name)?)?;
        }
        Ok(copy)
    }

    /// Highest registered version of `name`.
    pub fn latest_version(&self, name: &str) -> Option<u32> {
        self.versions(name).last()
    }

    /// Registered versions of `name`, ascending.
    pub fn versions<'a>(&'a self, name: &'a str) -> impl Iterator<Item = u32> + 'a {
        self.factories
            .keys()
            .filter(move |(registered, _)| registered == name)
            .map(|(_, version)| *version)
    }

    /// Returns true if (name, version) is registered.
    pub fn contains(&self, name: &str, version: u32) -> bool {
        self.factories.contains_key(&(name.to_string(), version))
    }

    /// All registered (name, version) pairs, sorted.
    pub fn list_triggers(&self) -> Vec<(String, u32)> {
        self.factories.keys().cloned().collect()
    }

    /// Number of registered (name, version) pairs.
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}
