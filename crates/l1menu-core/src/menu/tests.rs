//! Tests for trigger menus.

use super::*;
use crate::constraint::ConstraintType;
use crate::test_utils::{muon_event, test_table, TestMuonTrigger};

#[test]
fn test_add_trigger_defaults_constraint() {
    let table = test_table();
    let mut menu = TriggerMenu::new();
    menu.add_trigger(&table, "L1_TestMu").unwrap();

    assert_eq!(menu.number_of_triggers(), 1);
    assert_eq!(menu.constraints().len(), 1);
    assert_eq!(
        menu.trigger_constraint(0).unwrap().constraint_type(),
        ConstraintType::FixedThresholds
    );
}

#[test]
fn test_add_unregistered_trigger_leaves_menu_unchanged() {
    let table = test_table();
    let mut menu = TriggerMenu::new();
    assert!(menu.add_trigger(&table, "L1_Missing").is_err());
    assert!(menu.is_empty());
    assert!(menu.constraints().is_empty());
}

#[test]
fn test_add_trigger_version_and_mutate() {
    let table = test_table();
    let mut menu = TriggerMenu::new();
    menu.add_trigger_version(&table, "L1_TestMu", 0)
        .unwrap()
        .set_parameter("threshold1", 12.0)
        .unwrap();

    let trigger = menu.trigger(0).unwrap();
    assert_eq!(trigger.version(), 0);
    assert_eq!(trigger.parameter("threshold1").unwrap(), 12.0);
}

#[test]
fn test_add_trigger_copy_is_independent() {
    let table = test_table();
    let mut source = TestMuonTrigger::new(1);
    source.threshold1 = 33.0;

    let mut menu = TriggerMenu::new();
    menu.add_trigger_copy(&table, &source).unwrap();
    source.threshold1 = 1.0;

    assert_eq!(menu.trigger(0).unwrap().parameter("threshold1").unwrap(), 33.0);
}

#[test]
fn test_position_out_of_range() {
    let menu = TriggerMenu::new();
    assert_eq!(
        menu.trigger(0).unwrap_err(),
        L1MenuError::PositionOutOfRange {
            position: 0,
            len: 0
        }
    );
    assert!(menu.trigger_constraint(3).is_err());
}

#[test]
fn test_clone_deep_copies_triggers_and_constraints() {
    let table = test_table();
    let mut menu = TriggerMenu::new();
    menu.add_trigger(&table, "L1_TestMu").unwrap();

    let copy = menu.clone();
    menu.trigger_mut(0)
        .unwrap()
        .set_parameter("threshold1", 80.0)
        .unwrap();
    *menu.trigger_constraint_mut(0).unwrap() = TriggerConstraint::fixed_rate(5.0);

    assert_eq!(copy.trigger(0).unwrap().parameter("threshold1").unwrap(), 20.0);
    assert!(copy.trigger_constraint(0).unwrap().thresholds_are_fixed());
}

#[test]
fn test_trigger_copy() {
    let table = test_table();
    let mut menu = TriggerMenu::new();
    menu.add_trigger(&table, "L1_TestMu").unwrap();

    let mut copy = menu.trigger_copy(0).unwrap();
    copy.set_parameter("threshold1", 1.0).unwrap();
    assert_eq!(menu.trigger(0).unwrap().parameter("threshold1").unwrap(), 20.0);
}

#[test]
fn test_apply_is_logical_or() {
    let mut menu = TriggerMenu::new();
    let mut low = TestMuonTrigger::new(0);
    low.threshold1 = 10.0;
    let high = TestMuonTrigger::new(0);
    menu.push_trigger(Box::new(high));
    assert!(!menu.apply(&muon_event(1.0, 15.0)));

    menu.push_trigger(Box::new(low));
    assert!(menu.apply(&muon_event(1.0, 15.0)));
    assert_eq!(menu.triggers().count(), 2);
}

#[test]
fn test_remove_trigger_keeps_constraints_aligned() {
    let table = test_table();
    let mut menu = TriggerMenu::new();
    menu.add_trigger(&table, "L1_TestMu").unwrap();
    menu.add_trigger_version(&table, "L1_TestMu", 0).unwrap();
    *menu.trigger_constraint_mut(1).unwrap() = TriggerConstraint::fixed_rate(2.0);

    let (removed, constraint) = menu.remove_trigger(0).unwrap();
    assert_eq!(removed.version(), 1);
    assert!(constraint.thresholds_are_fixed());
    assert_eq!(menu.constraints(), &[TriggerConstraint::fixed_rate(2.0)]);
}

#[test]
fn test_apply_requested_rates() {
    let table = test_table();
    let mut menu = TriggerMenu::new();
    menu.add_trigger(&table, "L1_TestMu").unwrap();
    menu.add_trigger(&table, "L1_TestMu").unwrap();

    menu.apply_requested_rates(&[RequestedRate::new(false, 3.0), RequestedRate::new(true, 1.0)])
        .unwrap();
    assert_eq!(
        menu.trigger_constraint(0).unwrap(),
        &TriggerConstraint::fraction_of_bandwidth(0.75)
    );
    assert!(menu.trigger_constraint(1).unwrap().thresholds_are_fixed());

    let err = menu
        .apply_requested_rates(&[RequestedRate::new(false, 3.0)])
        .unwrap_err();
    assert_eq!(
        err,
        L1MenuError::InconsistentConstraints {
            triggers: 2,
            constraints: 1
        }
    );
    assert_eq!(menu.constraints().len(), 2);
}
