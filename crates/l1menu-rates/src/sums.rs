//! Weight accumulators filled by the event loop.

use l1menu_core::{CachedTrigger, Event};

/// Passing and pure weight sums of one trigger.
///
/// An event is pure for a trigger when that trigger is the only one in the
/// menu that passes it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TriggerSums {
    pub weight_passed: f64,
    pub weight_squared_passed: f64,
    pub weight_pure: f64,
    pub weight_squared_pure: f64,
}

impl TriggerSums {
    fn merge(&mut self, other: &TriggerSums) {
        self.weight_passed += other.weight_passed;
        self.weight_squared_passed += other.weight_squared_passed;
        self.weight_pure += other.weight_pure;
        self.weight_squared_pure += other.weight_squared_pure;
    }
}

/// All sums of one engine pass, or of one chunk of it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightSums {
    pub weight_all: f64,
    pub weight_any_passed: f64,
    pub weight_squared_any_passed: f64,
    pub triggers: Vec<TriggerSums>,
}

impl WeightSums {
    /// Zeroed sums for a menu of `triggers` entries.
    pub fn new(triggers: usize) -> Self {
        Self {
            triggers: vec![TriggerSums::default(); triggers],
            ..Self::default()
        }
    }

    /// Adds one event, evaluating every trigger in menu order.
    pub fn add_event<E>(&mut self, evaluators: &[Box<dyn CachedTrigger<E>>], event: &E)
    where
        E: Event + ?Sized,
    {
        debug_assert_eq!(evaluators.len(), self.triggers.len());

        let weight = event.weight();
        let weight_squared = weight * weight;
        self.weight_all += weight;

        let mut passed = 0usize;
        let mut last_passed = 0usize;
        for (index, (evaluator, sums)) in evaluators.iter().zip(&mut self.triggers).enumerate() {
            if evaluator.apply(event) {
                sums.weight_passed += weight;
                sums.weight_squared_passed += weight_squared;
                passed += 1;
                last_passed = index;
            }
        }

        if passed == 1 {
            let sums = &mut self.triggers[last_passed];
            sums.weight_pure += weight;
            sums.weight_squared_pure += weight_squared;
        }
        if passed >= 1 {
            self.weight_any_passed += weight;
            self.weight_squared_any_passed += weight_squared;
        }
    }

    /// Adds the sums of `other` into `self`.
    ///
    /// # Panics
    ///
    /// Panics if the two were built for menus of different sizes.
    pub fn merge(&mut self, other: &WeightSums) {
        assert_eq!(
            self.triggers.len(),
            other.triggers.len(),
            "merging sums of different menus"
        );
        self.weight_all += other.weight_all;
        self.weight_any_passed += other.weight_any_passed;
        self.weight_squared_any_passed += other.weight_squared_any_passed;
        for (sums, other) in self.triggers.iter_mut().zip(&other.triggers) {
            sums.merge(other);
        }
    }
}
