//! Per-trigger rate snapshots.
//!
//! A [`TriggerRate`] is either live, holding the raw weight sums of an
//! engine run, or frozen, holding figures that were computed elsewhere.
//! Live snapshots need the totals of the [`MenuRate`] that owns them, so
//! they are read through a [`TriggerRateView`] borrowed from that result.

use std::collections::BTreeMap;
use std::fmt;

use l1menu_core::{Result, Trigger, TriggerDescription};

use crate::menu_rate::MenuRate;
use crate::sums::TriggerSums;

/// Fraction and rate with their errors.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RateFigures {
    pub fraction: f64,
    pub fraction_error: f64,
    pub rate: f64,
    pub rate_error: f64,
}

impl RateFigures {
    /// Derives figures from a passing weight and its squared-weight sum.
    ///
    /// The error is the quadrature sum of the passing weights over the total
    /// weight. It equals the counting error when every weight is 1.
    pub fn from_weights(weight: f64, weight_squared: f64, weight_all: f64, scaling: f64) -> Self {
        let fraction = weight / weight_all;
        let fraction_error = weight_squared.sqrt() / weight_all;
        Self {
            fraction,
            fraction_error,
            rate: fraction * scaling,
            rate_error: fraction_error * scaling,
        }
    }

    /// Figures with the rate and its error given directly.
    pub fn from_rate(rate: f64, rate_error: f64, scaling: f64) -> Self {
        Self {
            fraction: rate / scaling,
            fraction_error: rate_error / scaling,
            rate,
            rate_error,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.fraction.is_finite()
            && self.fraction_error.is_finite()
            && self.rate.is_finite()
            && self.rate_error.is_finite()
    }
}

#[derive(Debug, Clone, PartialEq)]
enum RateKind {
    Live(TriggerSums),
    Frozen { total: RateFigures, pure: RateFigures },
}

/// Rate snapshot of one menu trigger.
///
/// Carries a private copy of the trigger as it was when the rate was taken.
#[derive(Clone)]
pub struct TriggerRate {
    trigger: Box<dyn Trigger>,
    kind: RateKind,
    parameter_errors: BTreeMap<String, (f32, f32)>,
}

impl TriggerRate {
    pub(crate) fn live(trigger: &dyn Trigger, sums: TriggerSums) -> Self {
        Self {
            trigger: trigger.clone_box(),
            kind: RateKind::Live(sums),
            parameter_errors: BTreeMap::new(),
        }
    }

    /// Snapshot of figures computed elsewhere, such as reloaded results.
    pub fn frozen<D>(trigger: &D, total: RateFigures, pure: RateFigures) -> Self
    where
        D: Trigger + ?Sized,
    {
        Self {
            trigger: trigger.clone_box(),
            kind: RateKind::Frozen { total, pure },
            parameter_errors: BTreeMap::new(),
        }
    }

    /// The trigger copy this rate belongs to.
    pub fn trigger(&self) -> &dyn Trigger {
        self.trigger.as_ref()
    }

    pub fn is_frozen(&self) -> bool {
        matches!(self.kind, RateKind::Frozen { .. })
    }

    /// Raw sums, for live snapshots.
    pub fn sums(&self) -> Option<&TriggerSums> {
        match &self.kind {
            RateKind::Live(sums) => Some(sums),
            RateKind::Frozen { .. } => None,
        }
    }

    /// Records asymmetric error bars for a parameter.
    ///
    /// # Errors
    ///
    /// Fails like [`TriggerDescription::parameter`] if the trigger has no
    /// parameter called `name`.
    pub fn set_parameter_errors(&mut self, name: &str, low: f32, high: f32) -> Result<()> {
        self.trigger.parameter(name)?;
        self.parameter_errors.insert(name.to_string(), (low, high));
        Ok(())
    }

    /// Error bars recorded for `name`, as `(low, high)`.
    pub fn parameter_errors(&self, name: &str) -> Option<(f32, f32)> {
        self.parameter_errors.get(name).copied()
    }

    /// Every parameter with recorded error bars, sorted by name.
    pub fn parameters_with_errors(&self) -> impl Iterator<Item = (&str, (f32, f32))> + '_ {
        self.parameter_errors
            .iter()
            .map(|(name, errors)| (name.as_str(), *errors))
    }

    pub(crate) fn figures(&self, weight_all: f64, scaling: f64) -> RateFigures {
        match &self.kind {
            RateKind::Live(sums) => RateFigures::from_weights(
                sums.weight_passed,
                sums.weight_squared_passed,
                weight_all,
                scaling,
            ),
            RateKind::Frozen { total, .. } => *total,
        }
    }

    pub(crate) fn pure_figures(&self, weight_all: f64, scaling: f64) -> RateFigures {
        match &self.kind {
            RateKind::Live(sums) => RateFigures::from_weights(
                sums.weight_pure,
                sums.weight_squared_pure,
                weight_all,
                scaling,
            ),
            RateKind::Frozen { pure, .. } => *pure,
        }
    }
}

impl fmt::Debug for TriggerRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TriggerRate")
            .field("trigger", &self.trigger.name())
            .field("version", &self.trigger.version())
            .field("kind", &self.kind)
            .field("parameter_errors", &self.parameter_errors)
            .finish()
    }
}

/// A [`TriggerRate`] read together with the [`MenuRate`] that owns it.
#[derive(Debug, Clone, Copy)]
pub struct TriggerRateView<'a> {
    rate: &'a TriggerRate,
    menu_rate: &'a MenuRate,
}

impl<'a> TriggerRateView<'a> {
    pub(crate) fn new(rate: &'a TriggerRate, menu_rate: &'a MenuRate) -> Self {
        Self { rate, menu_rate }
    }

    /// The underlying snapshot.
    pub fn snapshot(&self) -> &'a TriggerRate {
        self.rate
    }

    pub fn menu_rate(&self) -> &'a MenuRate {
        self.menu_rate
    }

    pub fn trigger(&self) -> &'a dyn Trigger {
        self.rate.trigger()
    }

    pub fn figures(&self) -> RateFigures {
        let (weight_all, scaling) = self.menu_rate.normalisation();
        self.rate.figures(weight_all, scaling)
    }

    pub fn pure_figures(&self) -> RateFigures {
        let (weight_all, scaling) = self.menu_rate.normalisation();
        self.rate.pure_figures(weight_all, scaling)
    }

    pub fn fraction(&self) -> f64 {
        self.figures().fraction
    }

    pub fn fraction_error(&self) -> f64 {
        self.figures().fraction_error
    }

    pub fn rate(&self) -> f64 {
        self.figures().rate
    }

    pub fn rate_error(&self) -> f64 {
        self.figures().rate_error
    }

    /// Fraction of events passed by this trigger and no other.
    pub fn pure_fraction(&self) -> f64 {
        self.pure_figures().fraction
    }

    pub fn pure_fraction_error(&self) -> f64 {
        self.pure_figures().fraction_error
    }

    pub fn pure_rate(&self) -> f64 {
        self.pure_figures().rate
    }

    pub fn pure_rate_error(&self) -> f64 {
        self.pure_figures().rate_error
    }

    pub fn parameter_errors(&self, name: &str) -> Option<(f32, f32)> {
        self.rate.parameter_errors(name)
    }

    /// Frozen copy of this snapshot, with its figures fixed at their current
    /// values and its parameter errors kept.
    ///
    /// The copy no longer needs the owning result, so it can be passed to
    /// [`MenuRate::precomputed`].
    pub fn freeze(&self) -> TriggerRate {
        TriggerRate {
            trigger: self.rate.trigger.clone_box(),
            kind: RateKind::Frozen {
                total: self.figures(),
                pure: self.pure_figures(),
            },
            parameter_errors: self.rate.parameter_errors.clone(),
        }
    }
}
