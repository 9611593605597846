//! Tests for the menu rate engine.

use l1menu_config::{Parallelism, RateConfig};
use l1menu_core::{DpgSample, Trigger, TriggerDescription, TriggerMenu, TriggerTable};
use l1menu_test::dpg::{htm_event, muon_event, tau_muon_event};
use l1menu_test::{random_scripted_sample, RandomSampleSpec, ScriptedSample, ScriptedTrigger};

use super::*;

fn menu_of(names: &[&str]) -> TriggerMenu {
    let mut menu = TriggerMenu::new();
    for name in names {
        menu.push_trigger(ScriptedTrigger::boxed(*name));
    }
    menu
}

fn chunked(parallelism: Parallelism, chunk_size: usize) -> MenuRateEngine {
    MenuRateEngine::new(
        RateConfig::new()
            .with_parallelism(parallelism)
            .with_chunk_size(chunk_size),
    )
}

#[test]
fn test_disjoint_triggers() {
    let sample = ScriptedSample::new(10.0)
        .with_event(1.0, &["A"])
        .with_event(1.0, &["A"])
        .with_event(1.0, &["B"])
        .with_event(1.0, &[]);
    let rate = MenuRateEngine::default()
        .compute(&menu_of(&["A", "B"]), &sample)
        .unwrap();

    assert_eq!(rate.weight_of_all_events(), Some(4.0));
    assert_eq!(rate.weight_of_events_passing_any_trigger(), Some(3.0));
    assert_eq!(rate.total_rate(), 7.5);

    let a = rate.trigger_rate(0).unwrap().snapshot().sums().copied().unwrap();
    assert_eq!(a.weight_passed, 2.0);
    assert_eq!(a.weight_pure, 2.0);
    let b = rate.trigger_rate(1).unwrap().snapshot().sums().copied().unwrap();
    assert_eq!(b.weight_passed, 1.0);
    assert_eq!(b.weight_pure, 1.0);
}

#[test]
fn test_overlap_event_is_not_pure() {
    let sample = ScriptedSample::new(1.0).with_event(2.0, &["A", "B"]);
    let rate = MenuRate::compute(&menu_of(&["A", "B"]), &sample).unwrap();

    assert_eq!(rate.weight_of_events_passing_any_trigger(), Some(2.0));
    assert_eq!(rate.weight_squared_of_events_passing_any_trigger(), Some(4.0));
    for trigger_rate in rate.trigger_rates() {
        let sums = trigger_rate.snapshot().sums().copied().unwrap();
        assert_eq!(sums.weight_passed, 2.0);
        assert_eq!(sums.weight_squared_passed, 4.0);
        assert_eq!(sums.weight_pure, 0.0);
        assert_eq!(trigger_rate.pure_rate(), 0.0);
    }
    assert_eq!(rate.sum_of_trigger_rates(), 2.0);
    assert_eq!(rate.total_rate(), 1.0);
}

#[test]
fn test_triggers_not_in_sample_never_pass() {
    let sample = ScriptedSample::new(1.0).with_events(3, 1.0, &["A"]);
    let rate = MenuRate::compute(&menu_of(&["A", "Z"]), &sample).unwrap();

    assert_eq!(rate.trigger_rate(1).unwrap().rate(), 0.0);
    assert_eq!(rate.trigger_rate(0).unwrap().pure_fraction(), 1.0);
}

#[test]
fn test_unit_weights_give_counting_errors() {
    let spec = RandomSampleSpec::new(42, 500, &["A", "B", "C"]).with_event_rate(30.0);
    let sample = random_scripted_sample(&spec);
    let rate = MenuRate::compute(&menu_of(&["A", "B", "C"]), &sample).unwrap();

    for trigger_rate in rate.trigger_rates() {
        let passed = trigger_rate.snapshot().sums().unwrap().weight_passed;
        let expected = passed.sqrt() / 500.0 * 30.0;
        assert!((trigger_rate.rate_error() - expected).abs() < 1e-12);
    }
}

#[test]
fn test_weight_inequalities_hold() {
    for seed in 0..20 {
        let spec = RandomSampleSpec::new(seed, 300, &["A", "B", "C", "D"])
            .weighted()
            .with_pass_probability(0.4);
        let sample = random_scripted_sample(&spec);
        let rate = MenuRate::compute(&menu_of(&["A", "B", "C", "D"]), &sample).unwrap();

        let weight_all = rate.weight_of_all_events().unwrap();
        let any = rate.weight_of_events_passing_any_trigger().unwrap();
        let sums: Vec<_> = rate
            .trigger_rates()
            .map(|view| *view.snapshot().sums().unwrap())
            .collect();
        let passed: f64 = sums.iter().map(|sums| sums.weight_passed).sum();
        let pure: f64 = sums.iter().map(|sums| sums.weight_pure).sum();

        assert!(any <= passed + 1e-9, "seed {seed}");
        assert!(pure <= any + 1e-9, "seed {seed}");
        assert!(any <= weight_all + 1e-9, "seed {seed}");
        assert!(rate.sum_of_pure_rates() <= rate.total_rate() + 1e-9);
        assert!(rate.total_rate() <= rate.sum_of_trigger_rates() + 1e-9);
    }
}

#[test]
fn test_repeated_runs_are_bit_identical() {
    let spec = RandomSampleSpec::new(9, 1000, &["A", "B"]).weighted();
    let sample = random_scripted_sample(&spec);
    let menu = menu_of(&["A", "B"]);

    for engine in [MenuRateEngine::default(), chunked(Parallelism::Auto, 64)] {
        let first = engine.compute(&menu, &sample).unwrap();
        let second = engine.compute(&menu, &sample).unwrap();
        assert_eq!(first.total_rate().to_bits(), second.total_rate().to_bits());
        assert_eq!(
            first.total_rate_error().to_bits(),
            second.total_rate_error().to_bits()
        );
        for (a, b) in first.trigger_rates().zip(second.trigger_rates()) {
            assert_eq!(a.snapshot().sums(), b.snapshot().sums());
        }
    }
}

#[test]
fn test_thread_count_does_not_change_result() {
    let spec = RandomSampleSpec::new(5, 2000, &["A", "B", "C"]).weighted();
    let sample = random_scripted_sample(&spec);
    let menu = menu_of(&["A", "B", "C"]);

    let auto = chunked(Parallelism::Auto, 128).compute(&menu, &sample).unwrap();
    let one = chunked(Parallelism::Threads(1), 128).compute(&menu, &sample).unwrap();
    let three = chunked(Parallelism::Threads(3), 128).compute(&menu, &sample).unwrap();

    for other in [&one, &three] {
        assert_eq!(auto.total_rate().to_bits(), other.total_rate().to_bits());
        for (a, b) in auto.trigger_rates().zip(other.trigger_rates()) {
            assert_eq!(a.snapshot().sums(), b.snapshot().sums());
        }
    }
}

#[test]
fn test_parallel_matches_serial() {
    let spec = RandomSampleSpec::new(17, 777, &["A", "B"]).weighted();
    let sample = random_scripted_sample(&spec);
    let menu = menu_of(&["A", "B"]);

    let serial = MenuRateEngine::default().compute(&menu, &sample).unwrap();
    let parallel = chunked(Parallelism::Auto, 50).compute(&menu, &sample).unwrap();

    assert!((serial.total_rate() - parallel.total_rate()).abs() < 1e-12);
    for (a, b) in serial.trigger_rates().zip(parallel.trigger_rates()) {
        assert!((a.rate() - b.rate()).abs() < 1e-12);
        assert!((a.pure_rate_error() - b.pure_rate_error()).abs() < 1e-12);
    }
}

#[test]
fn test_empty_sample_gives_non_finite_figures() {
    let sample = ScriptedSample::new(1.0);
    let rate = MenuRate::compute(&menu_of(&["A"]), &sample).unwrap();

    assert!(rate.total_fraction().is_nan());
    assert!(rate.check_finite().is_err());
}

#[test]
fn test_degenerate_sample_rejected_when_configured() {
    let sample = ScriptedSample::new(1.0).with_events(3, 0.0, &["A"]);
    let engine = MenuRateEngine::new(RateConfig::new().with_reject_degenerate_sample(true));

    let err = engine.compute(&menu_of(&["A"]), &sample).unwrap_err();
    assert!(matches!(err, RateError::DegenerateSample { events: 3 }));
}

#[test]
fn test_empty_menu() {
    let sample = ScriptedSample::new(5.0).with_events(4, 1.0, &["A"]);
    let rate = MenuRate::compute(&TriggerMenu::new(), &sample).unwrap();

    assert_eq!(rate.number_of_triggers(), 0);
    assert_eq!(rate.total_rate(), 0.0);
    assert!(rate.check_finite().is_ok());
}

#[test]
fn test_concrete_triggers_on_detector_events() {
    let mut table = TriggerTable::new();
    l1menu_triggers::register_all(&mut table).unwrap();

    let mut menu = TriggerMenu::new();
    menu.add_trigger(&table, "L1_SingleMu").unwrap();
    menu.add_trigger_version(&table, "L1_HTM", 0).unwrap();
    menu.add_trigger(&table, "L1_TkTau_Mu").unwrap();

    let sample = DpgSample::from_events(
        vec![
            muon_event(1.0, 25.0),
            htm_event(1.0, 60.0),
            tau_muon_event(1.0, 30.0, 25.0),
            muon_event(1.0, 5.0),
        ],
        8.0,
    );

    let rate = MenuRateEngine::default().compute(&menu, &sample).unwrap();
    assert_eq!(rate.total_rate(), 6.0);

    let single_mu = rate.trigger_rate(0).unwrap();
    assert_eq!(single_mu.trigger().name(), "L1_SingleMu");
    assert_eq!(single_mu.rate(), 4.0);
    assert_eq!(single_mu.pure_rate(), 2.0);
    assert_eq!(rate.trigger_rate(1).unwrap().pure_rate(), 2.0);
    assert_eq!(rate.trigger_rate(2).unwrap().pure_rate(), 0.0);
}

#[test]
fn test_snapshot_keeps_trigger_copy() {
    let mut table = TriggerTable::new();
    l1menu_triggers::register_all(&mut table).unwrap();
    let mut menu = TriggerMenu::new();
    menu.add_trigger(&table, "L1_SingleMu").unwrap();

    let sample = DpgSample::from_events(vec![muon_event(1.0, 25.0)], 1.0);
    let rate = MenuRate::compute(&menu, &sample).unwrap();
    menu.trigger_mut(0)
        .unwrap()
        .set_parameter("threshold1", 50.0)
        .unwrap();

    let snapshot_trigger = rate.trigger_rate(0).unwrap().trigger();
    assert_eq!(snapshot_trigger.parameter("threshold1").unwrap(), 20.0);
}
