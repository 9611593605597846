//! Weighted event samples and cached trigger evaluation.
//!
//! The rate engine never calls [`crate::Trigger::apply`] directly. It asks
//! the sample for one [`CachedTrigger`] per menu entry before the event
//! loop, so that each sample can resolve whatever per-trigger lookups it
//! needs once rather than once per event.

use crate::error::Result;
use crate::event::{DpgEvent, Event};
use crate::trigger::Trigger;

/// A sample-bound, parameter-frozen trigger predicate.
///
/// Equivalent to the source trigger's `apply` at the parameter values it
/// had when the evaluator was created. Later changes to the source trigger
/// are not seen; create a new evaluator instead.
pub trait CachedTrigger<E: ?Sized>: Send + Sync {
    fn apply(&self, event: &E) -> bool;
}

/// An ordered, weighted event sequence.
pub trait Sample: Sync {
    /// Event type handed to cached triggers.
    type Event: Event + Sync;

    /// Number of events in the sample.
    fn number_of_events(&self) -> usize;

    /// Event at `index`. Repeated calls return the same event.
    ///
    /// # Panics
    ///
    /// May panic if `index >= number_of_events()`.
    fn get_event(&self, index: usize) -> &Self::Event;

    /// Physical rate represented by unit weight.
    fn event_rate(&self) -> f64;

    /// Builds the fast-path evaluator for `trigger` on this sample.
    fn create_cached_trigger(
        &self,
        trigger: &dyn Trigger,
    ) -> Result<Box<dyn CachedTrigger<Self::Event>>>;

    /// Sum of all event weights.
    fn sum_of_weights(&self) -> f64 {
        (0..self.number_of_events())
            .map(|index| self.get_event(index).weight())
            .sum()
    }
}

/// Cached trigger holding a private copy of the source trigger.
///
/// The copy reads its thresholds as plain fields, so no name lookup happens
/// per event.
#[derive(Debug)]
pub struct FrozenTrigger {
    trigger: Box<dyn Trigger>,
}

impl FrozenTrigger {
    /// Freezes the current parameter values of `trigger`.
    pub fn new(trigger: &dyn Trigger) -> Self {
        Self {
            trigger: trigger.clone_box(),
        }
    }

    /// The frozen copy.
    pub fn trigger(&self) -> &dyn Trigger {
        self.trigger.as_ref()
    }
}

impl CachedTrigger<DpgEvent> for FrozenTrigger {
    fn apply(&self, event: &DpgEvent) -> bool {
        self.trigger.apply(event)
    }
}

/// In-memory sample of full detector events.
#[derive(Debug, Clone, Default)]
pub struct DpgSample {
    events: Vec<DpgEvent>,
    event_rate: f64,
}

impl DpgSample {
    /// Creates an empty sample with the given rate per unit weight.
    pub fn new(event_rate: f64) -> Self {
        Self {
            events: Vec::new(),
            event_rate,
        }
    }

    /// Creates a sample from existing events.
    pub fn from_events(events: Vec<DpgEvent>, event_rate: f64) -> Self {
        Self { events, event_rate }
    }

    /// Appends an event.
    pub fn push(&mut self, event: DpgEvent) {
        self.events.push(event);
    }

    /// All events in order.
    pub fn events(&self) -> &[DpgEvent] {
        &self.events
    }

    /// Changes the rate per unit weight.
    pub fn set_event_rate(&mut self, event_rate: f64) {
        self.event_rate = event_rate;
    }
}

impl Sample for DpgSample {
    type Event = DpgEvent;

    fn number_of_events(&self) -> usize {
        self.events.len()
    }

    fn get_event(&self, index: usize) -> &DpgEvent {
        &self.events[index]
    }

    fn event_rate(&self) -> f64 {
        self.event_rate
    }

    fn create_cached_trigger(
        &self,
        trigger: &dyn Trigger,
    ) -> Result<Box<dyn CachedTrigger<DpgEvent>>> {
        Ok(Box::new(FrozenTrigger::new(trigger)))
    }
}
