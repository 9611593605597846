//! End-to-end rate runs through the facade.

use l1menu::prelude::*;
use l1menu::{tools, RequestedRate};
use l1menu_test::random_dpg_sample;

fn physics_menu() -> TriggerMenu {
    let table = trigger_table();
    let mut menu = TriggerMenu::new();
    for name in ["L1_SingleMu", "L1_SingleTkEle", "L1_HTM", "L1_MultiTkJet", "L1_TkTau_Mu"] {
        menu.add_trigger(table, name).unwrap();
    }
    menu
}

#[test]
fn test_random_sample_statistics_are_consistent() {
    let sample = random_dpg_sample(2024, 3000, 40_000.0);
    let rate = MenuRate::compute(&physics_menu(), &sample).unwrap();

    assert!(rate.check_finite().is_ok());
    assert_eq!(rate.number_of_triggers(), 5);
    assert_eq!(rate.weight_of_all_events(), Some(3000.0));
    assert!(rate.total_rate() <= rate.sum_of_trigger_rates() + 1e-6);
    assert!(rate.sum_of_pure_rates() <= rate.total_rate() + 1e-6);
    for trigger_rate in rate.trigger_rates() {
        assert!(trigger_rate.pure_rate() <= trigger_rate.rate());
        assert!(trigger_rate.rate() <= rate.total_rate());
    }
}

#[test]
fn test_configured_parallel_run_matches_thread_count() {
    let config = RateConfig::from_toml_str(
        r#"
        parallelism = "auto"
        chunk_size = 256
    "#,
    )
    .unwrap();
    let sample = random_dpg_sample(7, 2000, 1.0);
    let menu = physics_menu();

    let auto = MenuRateEngine::new(config.clone()).compute(&menu, &sample).unwrap();
    let two = MenuRateEngine::new(config.with_parallelism(Parallelism::Threads(2)))
        .compute(&menu, &sample)
        .unwrap();

    assert_eq!(auto.total_rate().to_bits(), two.total_rate().to_bits());
    for (a, b) in auto.trigger_rates().zip(two.trigger_rates()) {
        assert_eq!(a.rate().to_bits(), b.rate().to_bits());
        assert_eq!(a.pure_rate().to_bits(), b.pure_rate().to_bits());
    }
}

#[test]
fn test_raising_thresholds_never_raises_rates() {
    let sample = random_dpg_sample(99, 1500, 1.0);
    let menu = physics_menu();
    let before = MenuRate::compute(&menu, &sample).unwrap();

    let mut tighter = menu.clone();
    for position in 0..tighter.number_of_triggers() {
        let trigger = tighter.trigger_mut(position).unwrap();
        for name in tools::threshold_names(&*trigger) {
            let value = trigger.parameter(&name).unwrap();
            trigger.set_parameter(&name, value + 10.0).unwrap();
        }
    }
    let after = MenuRate::compute(&tighter, &sample).unwrap();

    assert!(after.total_rate() <= before.total_rate());
    for (a, b) in after.trigger_rates().zip(before.trigger_rates()) {
        assert!(a.rate() <= b.rate(), "{}", a.trigger().name());
    }
    // The original menu keeps its own thresholds
    assert_eq!(
        menu.trigger(0).unwrap().parameter("threshold1").unwrap(),
        20.0
    );
}

#[test]
fn test_requested_rates_become_constraints() {
    let mut menu = physics_menu();
    let requests = [
        RequestedRate::new(true, 5.0),
        RequestedRate::new(false, 10.0),
        RequestedRate::new(false, 30.0),
        RequestedRate::new(true, 0.0),
        RequestedRate::new(false, 0.0),
    ];
    menu.apply_requested_rates(&requests).unwrap();

    let constraint = menu.trigger_constraint(2).unwrap();
    assert_eq!(constraint.constraint_type(), ConstraintType::FractionOfBandwidth);
    assert!((constraint.value() - 30.0 / 45.0).abs() < 1e-12);
    assert!(menu.trigger_constraint(0).unwrap().thresholds_are_fixed());

    let rate = MenuRate::compute(&menu, &random_dpg_sample(1, 100, 1.0)).unwrap();
    assert_eq!(rate.number_of_triggers(), 5);
}

#[test]
fn test_reloaded_results_keep_parameter_errors() {
    let menu = physics_menu();
    let live = MenuRate::compute(&menu, &random_dpg_sample(3, 500, 10.0)).unwrap();

    let snapshots = live
        .trigger_rates()
        .map(|view| {
            let mut frozen = view.freeze();
            frozen.set_parameter_errors("threshold1", 1.0, 2.0).ok();
            frozen
        })
        .collect();
    let reloaded = MenuRate::precomputed(live.total_figures(), snapshots).unwrap();

    assert_eq!(reloaded.total_rate(), live.total_rate());
    let single_mu = reloaded.trigger_rate(0).unwrap();
    assert_eq!(single_mu.rate(), live.trigger_rate(0).unwrap().rate());
    assert_eq!(single_mu.parameter_errors("threshold1"), Some((1.0, 2.0)));
    // The cross trigger only knows prefixed names
    assert_eq!(reloaded.trigger_rate(4).unwrap().parameter_errors("threshold1"), None);
}
