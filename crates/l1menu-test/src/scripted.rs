//! Samples whose trigger decisions are written down per event.
//!
//! Each event lists the names of the triggers that pass it. The cached
//! trigger for a name resolves the name to a column once and then only
//! checks column membership per event.

use l1menu_core::{
    CachedTrigger, DpgEvent, Event, L1MenuError, Result, Sample, Trigger, TriggerDescription,
};
use smallvec::SmallVec;

/// One event of a [`ScriptedSample`].
#[derive(Clone, Debug, PartialEq)]
pub struct ScriptedEvent {
    pub weight: f64,
    /// Columns of the triggers passing this event.
    pub passing: SmallVec<[usize; 4]>,
}

impl Event for ScriptedEvent {
    fn weight(&self) -> f64 {
        self.weight
    }
}

/// Sample where each event names the triggers it passes.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSample {
    columns: Vec<String>,
    events: Vec<ScriptedEvent>,
    event_rate: f64,
}

impl ScriptedSample {
    /// Creates an empty sample with the given rate per unit weight.
    pub fn new(event_rate: f64) -> Self {
        Self {
            columns: Vec::new(),
            events: Vec::new(),
            event_rate,
        }
    }

    /// Appends an event passed by exactly the named triggers.
    pub fn push(&mut self, weight: f64, passing: &[&str]) {
        let passing = passing.iter().map(|name| self.column(name)).collect();
        self.events.push(ScriptedEvent { weight, passing });
    }

    /// Builder form of [`ScriptedSample::push`].
    pub fn with_event(mut self, weight: f64, passing: &[&str]) -> Self {
        self.push(weight, passing);
        self
    }

    /// Appends `count` identical events.
    pub fn with_events(mut self, count: usize, weight: f64, passing: &[&str]) -> Self {
        for _ in 0..count {
            self.push(weight, passing);
        }
        self
    }

    /// All events in order.
    pub fn events(&self) -> &[ScriptedEvent] {
        &self.events
    }

    /// Trigger names seen so far, in column order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    fn column(&mut self, name: &str) -> usize {
        match self.columns.iter().position(|column| column == name) {
            Some(column) => column,
            None => {
                self.columns.push(name.to_string());
                self.columns.len() - 1
            }
        }
    }
}

struct ColumnTrigger {
    column: Option<usize>,
}

impl CachedTrigger<ScriptedEvent> for ColumnTrigger {
    fn apply(&self, event: &ScriptedEvent) -> bool {
        self.column
            .is_some_and(|column| event.passing.contains(&column))
    }
}

impl Sample for ScriptedSample {
    type Event = ScriptedEvent;

    fn number_of_events(&self) -> usize {
        self.events.len()
    }

    fn get_event(&self, index: usize) -> &ScriptedEvent {
        &self.events[index]
    }

    fn event_rate(&self) -> f64 {
        self.event_rate
    }

    // A trigger no event mentions never passes.
    fn create_cached_trigger(
        &self,
        trigger: &dyn Trigger,
    ) -> Result<Box<dyn CachedTrigger<ScriptedEvent>>> {
        let column = self
            .columns
            .iter()
            .position(|column| column == trigger.name());
        Ok(Box::new(ColumnTrigger { column }))
    }
}

/// Trigger identified by name only, for use with [`ScriptedSample`].
///
/// It carries a single `threshold1` parameter so parameter plumbing can be
/// exercised. On detector events it passes when HTT reaches the threshold.
#[derive(Clone, Debug, PartialEq)]
pub struct ScriptedTrigger {
    name: String,
    version: u32,
    threshold1: f32,
}

impl ScriptedTrigger {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_version(name, 0)
    }

    pub fn with_version(name: impl Into<String>, version: u32) -> Self {
        Self {
            name: name.into(),
            version,
            threshold1: 0.0,
        }
    }

    /// Boxed instance, ready for `TriggerMenu::push_trigger`.
    pub fn boxed(name: impl Into<String>) -> Box<dyn Trigger> {
        Box::new(Self::new(name))
    }
}

impl TriggerDescription for ScriptedTrigger {
    fn name(&self) -> &str {
        &self.name
    }

    fn version(&self) -> u32 {
        self.version
    }

    fn parameter_names(&self) -> Vec<String> {
        vec!["threshold1".to_string()]
    }

    fn parameter(&self, name: &str) -> Result<f32> {
        match name {
            "threshold1" => Ok(self.threshold1),
            _ => Err(L1MenuError::invalid_parameter(&self.name, name)),
        }
    }
}

impl Trigger for ScriptedTrigger {
    fn parameter_mut(&mut self, name: &str) -> Result<&mut f32> {
        match name {
            "threshold1" => Ok(&mut self.threshold1),
            _ => Err(L1MenuError::invalid_parameter(&self.name, name)),
        }
    }

    fn apply(&self, event: &DpgEvent) -> bool {
        event.data.sums.htt >= self.threshold1
    }

    fn thresholds_are_correlated(&self) -> bool {
        false
    }

    fn clone_box(&self) -> Box<dyn Trigger> {
        Box::new(self.clone())
    }
}
