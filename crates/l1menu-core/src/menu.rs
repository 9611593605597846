//! An ordered collection of triggers with per-trigger fit constraints.

#[cfg(test)]
mod tests;

use crate::constraint::{normalise_requested_rates, RequestedRate, TriggerConstraint};
use crate::error::{L1MenuError, Result};
use crate::event::DpgEvent;
use crate::trigger::{Trigger, TriggerDescription, TriggerTable};

/// A menu of triggers, evaluated as a logical OR.
///
/// The menu owns its triggers; cloning a menu deep-copies every trigger and
/// constraint. Exactly one constraint exists per trigger, defaulting to
/// fixed thresholds.
///
/// # Example
///
/// ```
/// use l1menu_core::{ConstraintType, DpgEvent, TriggerMenu};
///
/// let menu = TriggerMenu::new();
/// assert_eq!(menu.number_of_triggers(), 0);
/// assert!(!menu.apply(&DpgEvent::zero_bias(1.0)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TriggerMenu {
    triggers: Vec<Box<dyn Trigger>>,
    constraints: Vec<TriggerConstraint>,
}

impl TriggerMenu {
    /// Creates an empty menu.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the latest version of `name` with default parameters.
    pub fn add_trigger(&mut self, table: &TriggerTable, name: &str) -> Result<&mut dyn Trigger> {
        let trigger = table.instantiate(name)?;
        Ok(self.push_trigger(trigger))
    }

    /// Adds a specific version of `name` with default parameters.
    pub fn add_trigger_version(
        &mut self,
        table: &TriggerTable,
        name: &str,
        version: u32,
    ) -> Result<&mut dyn Trigger> {
        let trigger = table.instantiate_version(name, version)?;
        Ok(self.push_trigger(trigger))
    }

    /// Adds a copy of `trigger`, including its parameter values.
    ///
    /// The returned reference is to the copy, not the input.
    pub fn add_trigger_copy<D>(
        &mut self,
        table: &TriggerTable,
        trigger: &D,
    ) -> Result<&mut dyn Trigger>
    where
        D: TriggerDescription + ?Sized,
    {
        let copy = table.copy_trigger(trigger)?;
        Ok(self.push_trigger(copy))
    }

    /// Takes ownership of an already built trigger.
    pub fn push_trigger(&mut self, trigger: Box<dyn Trigger>) -> &mut dyn Trigger {
        self.triggers.push(trigger);
        self.constraints.push(TriggerConstraint::default());
        let last = self.triggers.len() - 1;
        self.triggers[last].as_mut()
    }

    /// Removes and returns the trigger at `position` along with its constraint.
    pub fn remove_trigger(
        &mut self,
        position: usize,
    ) -> Result<(Box<dyn Trigger>, TriggerConstraint)> {
        self.check_position(position)?;
        Ok((
            self.triggers.remove(position),
            self.constraints.remove(position),
        ))
    }

    pub fn number_of_triggers(&self) -> usize {
        self.triggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }

    /// Trigger at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`L1MenuError::PositionOutOfRange`] past the end.
    pub fn trigger(&self, position: usize) -> Result<&dyn Trigger> {
        self.check_position(position)?;
        Ok(self.triggers[position].as_ref())
    }

    pub fn trigger_mut(&mut self, position: usize) -> Result<&mut dyn Trigger> {
        self.check_position(position)?;
        Ok(self.triggers[position].as_mut())
    }

    /// Independent copy of the trigger at `position`.
    pub fn trigger_copy(&self, position: usize) -> Result<Box<dyn Trigger>> {
        self.trigger(position).map(|trigger| trigger.clone_box())
    }

    /// Iterates the triggers in menu order.
    pub fn triggers(&self) -> impl Iterator<Item = &dyn Trigger> + '_ {
        self.triggers.iter().map(|trigger| trigger.as_ref())
    }

    /// Whether any trigger in the menu accepts the event.
    pub fn apply(&self, event: &DpgEvent) -> bool {
        self.triggers.iter().any(|trigger| trigger.apply(event))
    }

    /// Fit constraint for the trigger at `position`.
    pub fn trigger_constraint(&self, position: usize) -> Result<&TriggerConstraint> {
        self.check_position(position)?;
        Ok(&self.constraints[position])
    }

    pub fn trigger_constraint_mut(&mut self, position: usize) -> Result<&mut TriggerConstraint> {
        self.check_position(position)?;
        Ok(&mut self.constraints[position])
    }

    /// All constraints in menu order.
    pub fn constraints(&self) -> &[TriggerConstraint] {
        &self.constraints
    }

    /// Sets every constraint from legacy requested rates.
    ///
    /// # Errors
    ///
    /// Returns [`L1MenuError::InconsistentConstraints`] unless there is one
    /// request per trigger. The menu is left untouched in that case.
    pub fn apply_requested_rates(&mut self, requests: &[RequestedRate]) -> Result<()> {
        if requests.len() != self.triggers.len() {
            return Err(L1MenuError::InconsistentConstraints {
                triggers: self.triggers.len(),
                constraints: requests.len(),
            });
        }
        self.constraints = normalise_requested_rates(requests);
        Ok(())
    }

    fn check_position(&self, position: usize) -> Result<()> {
        if position < self.triggers.len() {
            Ok(())
        } else {
            Err(L1MenuError::PositionOutOfRange {
                position,
                len: self.triggers.len(),
            })
        }
    }
}
