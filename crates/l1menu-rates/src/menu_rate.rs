//! Menu-level rate results.

use l1menu_core::{L1MenuError, Sample, TriggerMenu};

use crate::engine::MenuRateEngine;
use crate::error::RateError;
use crate::sums::WeightSums;
use crate::trigger_rate::{RateFigures, TriggerRate, TriggerRateView};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Totals {
    Live {
        weight_all: f64,
        weight_any_passed: f64,
        weight_squared_any_passed: f64,
        scaling: f64,
    },
    Frozen(RateFigures),
}

/// Result of one engine run over a (menu, sample) pair.
///
/// Owns one [`TriggerRate`] per menu trigger, in menu order. Immutable once
/// built.
#[derive(Debug, Clone)]
pub struct MenuRate {
    totals: Totals,
    trigger_rates: Vec<TriggerRate>,
}

impl MenuRate {
    /// Runs the default serial engine.
    pub fn compute<S: Sample>(menu: &TriggerMenu, sample: &S) -> Result<Self, RateError> {
        MenuRateEngine::default().compute(menu, sample)
    }

    pub(crate) fn from_sums(menu: &TriggerMenu, sums: WeightSums, scaling: f64) -> Self {
        let trigger_rates = menu
            .triggers()
            .zip(sums.triggers)
            .map(|(trigger, sums)| TriggerRate::live(trigger, sums))
            .collect();
        Self {
            totals: Totals::Live {
                weight_all: sums.weight_all,
                weight_any_passed: sums.weight_any_passed,
                weight_squared_any_passed: sums.weight_squared_any_passed,
                scaling,
            },
            trigger_rates,
        }
    }

    /// Result assembled from figures computed elsewhere.
    ///
    /// The raw weights are unknown, so the weight accessors return `None`.
    /// Snapshots taken from a live result must be frozen first with
    /// [`TriggerRateView::freeze`].
    ///
    /// # Errors
    ///
    /// Returns [`RateError::LiveSnapshot`] for the first snapshot that still
    /// holds raw sums.
    pub fn precomputed(
        total: RateFigures,
        trigger_rates: Vec<TriggerRate>,
    ) -> Result<Self, RateError> {
        if let Some(position) = trigger_rates.iter().position(|rate| !rate.is_frozen()) {
            return Err(RateError::LiveSnapshot { position });
        }
        Ok(Self {
            totals: Totals::Frozen(total),
            trigger_rates,
        })
    }

    pub fn is_frozen(&self) -> bool {
        matches!(self.totals, Totals::Frozen(_))
    }

    /// Total weight and scaling used to derive live figures.
    ///
    /// Only engine results hold live snapshots, so the frozen arm is never
    /// used to derive figures.
    pub(crate) fn normalisation(&self) -> (f64, f64) {
        match self.totals {
            Totals::Live {
                weight_all,
                scaling,
                ..
            } => (weight_all, scaling),
            Totals::Frozen(_) => (f64::NAN, f64::NAN),
        }
    }

    /// Figures for events passing at least one trigger.
    pub fn total_figures(&self) -> RateFigures {
        match self.totals {
            Totals::Live {
                weight_all,
                weight_any_passed,
                weight_squared_any_passed,
                scaling,
            } => RateFigures::from_weights(
                weight_any_passed,
                weight_squared_any_passed,
                weight_all,
                scaling,
            ),
            Totals::Frozen(figures) => figures,
        }
    }

    pub fn total_fraction(&self) -> f64 {
        self.total_figures().fraction
    }

    pub fn total_fraction_error(&self) -> f64 {
        self.total_figures().fraction_error
    }

    pub fn total_rate(&self) -> f64 {
        self.total_figures().rate
    }

    pub fn total_rate_error(&self) -> f64 {
        self.total_figures().rate_error
    }

    pub fn weight_of_all_events(&self) -> Option<f64> {
        match self.totals {
            Totals::Live { weight_all, .. } => Some(weight_all),
            Totals::Frozen(_) => None,
        }
    }

    pub fn weight_of_events_passing_any_trigger(&self) -> Option<f64> {
        match self.totals {
            Totals::Live {
                weight_any_passed, ..
            } => Some(weight_any_passed),
            Totals::Frozen(_) => None,
        }
    }

    pub fn weight_squared_of_events_passing_any_trigger(&self) -> Option<f64> {
        match self.totals {
            Totals::Live {
                weight_squared_any_passed,
                ..
            } => Some(weight_squared_any_passed),
            Totals::Frozen(_) => None,
        }
    }

    /// Physical rate per unit weight of the sample.
    pub fn scaling(&self) -> Option<f64> {
        match self.totals {
            Totals::Live { scaling, .. } => Some(scaling),
            Totals::Frozen(_) => None,
        }
    }

    pub fn number_of_triggers(&self) -> usize {
        self.trigger_rates.len()
    }

    /// Per-trigger rates in menu order.
    pub fn trigger_rates(&self) -> impl ExactSizeIterator<Item = TriggerRateView<'_>> + '_ {
        self.trigger_rates
            .iter()
            .map(move |rate| TriggerRateView::new(rate, self))
    }

    /// Rate of the trigger at menu `position`.
    pub fn trigger_rate(&self, position: usize) -> l1menu_core::Result<TriggerRateView<'_>> {
        self.trigger_rates
            .get(position)
            .map(|rate| TriggerRateView::new(rate, self))
            .ok_or(L1MenuError::PositionOutOfRange {
                position,
                len: self.trigger_rates.len(),
            })
    }

    /// Sum of the individual trigger rates, counting overlaps once per trigger.
    pub fn sum_of_trigger_rates(&self) -> f64 {
        self.trigger_rates().map(|rate| rate.rate()).sum()
    }

    pub fn sum_of_pure_rates(&self) -> f64 {
        self.trigger_rates().map(|rate| rate.pure_rate()).sum()
    }

    /// Fails if any total or trigger figure is NaN or infinite.
    ///
    /// The engine itself lets a zero-weight sample produce non-finite
    /// figures; call this where they are unacceptable.
    pub fn check_finite(&self) -> l1menu_core::Result<()> {
        let all_finite = self.total_figures().is_finite()
            && self
                .trigger_rates()
                .all(|rate| rate.figures().is_finite() && rate.pure_figures().is_finite());
        if all_finite {
            Ok(())
        } else {
            Err(L1MenuError::DegenerateSample)
        }
    }
}
