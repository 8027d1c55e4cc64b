//! End-to-end tests for the simulation and pricing engine.
//!
//! # Test Categories
//!
//! 1. **Simulator invariants**: initial column, zero-volatility paths, seeding
//! 2. **Hedge identity**: hedged cost locked at strike × notional × duration
//! 3. **Evaluation day policy**: bounded resolution and fail-fast on negatives

use approx::assert_relative_eq;
use fra_core::types::FraError;
use fra_pricing::fra::{hedged_cost, payoff, unhedged_cost, FraContract};
use fra_pricing::mc::{simulate_freight_paths, GbmParams};
use fra_pricing::scenario::{analyse_hedge, evaluate_scenario, ScenarioParams};

const SEED: u64 = 20_240_601;

/// Quarterly daily-step scenario on the default one-month contract.
fn reference_scenario() -> ScenarioParams {
    ScenarioParams::builder()
        .initial_rate(15_000.0)
        .volatility(0.25)
        .horizon(0.25)
        .time_step(1.0 / 252.0)
        .n_paths(1_000)
        .strike(14_500.0)
        .notional(100.0)
        .duration(1.0 / 12.0)
        .seed(SEED)
        .build()
        .unwrap()
}

// ============================================================================
// Simulator invariants
// ============================================================================

#[test]
fn test_initial_column_equals_initial_rate() {
    let params = GbmParams::new(15_000.0, 0.0, 0.25, 0.25, 1.0 / 252.0);
    let paths = simulate_freight_paths(&params, 1_000, Some(SEED)).unwrap();
    assert!(paths.column(0).iter().all(|&s| s == 15_000.0));
}

#[test]
fn test_zero_volatility_paths_are_flat() {
    let params = GbmParams::new(15_000.0, 0.0, 0.0, 1.0, 1.0 / 252.0);
    let paths = simulate_freight_paths(&params, 50, None).unwrap();
    for row in paths.rows() {
        assert!(row.iter().all(|&s| s == 15_000.0));
    }
}

#[test]
fn test_seeded_paths_are_bit_identical() {
    let params = GbmParams::new(15_000.0, 0.02, 0.25, 0.25, 1.0 / 252.0);
    let a = simulate_freight_paths(&params, 1_000, Some(SEED)).unwrap();
    let b = simulate_freight_paths(&params, 1_000, Some(SEED)).unwrap();
    let bits = |m: &fra_pricing::PathMatrix| m.as_slice().iter().map(|x| x.to_bits()).collect::<Vec<_>>();
    assert_eq!(bits(&a), bits(&b));
}

// ============================================================================
// Hedge identity
// ============================================================================

#[test]
fn test_reference_hedged_cost_is_locked() {
    let analysis = analyse_hedge(&reference_scenario()).unwrap();
    let fixed = 14_500.0 * 100.0 * (1.0 / 12.0);

    assert_relative_eq!(analysis.hedged_summary.mean, fixed, max_relative = 1e-12);
    assert_relative_eq!(analysis.hedged_summary.mean, 120_833.33, epsilon = 0.01);
    assert!(analysis.hedged_summary.std_dev < 1e-6);
}

#[test]
fn test_reference_unhedged_cost_tracks_realised_rates() {
    let analysis = analyse_hedge(&reference_scenario()).unwrap();
    let scale = 100.0 / 12.0;
    let realised_mean =
        analysis.realized_rates.iter().sum::<f64>() / analysis.realized_rates.len() as f64;

    assert_relative_eq!(analysis.unhedged_summary.mean, scale * realised_mean, max_relative = 1e-12);
    // Zero drift: realised rates are centred on the initial rate, above the strike
    assert_relative_eq!(analysis.unhedged_summary.mean, 125_000.0, max_relative = 0.02);
    assert!((analysis.unhedged_summary.mean - analysis.hedged_summary.mean).abs() > 1_000.0);
}

#[test]
fn test_payoff_identities_on_simulated_rates() {
    let params = GbmParams::new(15_000.0, 0.0, 0.25, 0.25, 1.0 / 252.0);
    let paths = simulate_freight_paths(&params, 1_000, Some(SEED)).unwrap();
    let realized = paths.realized_rates(20).unwrap();
    let c = FraContract::default();

    let pnl = payoff(&realized, c.strike, c.notional, c.duration);
    let unhedged = unhedged_cost(&realized, c.notional, c.duration);
    let hedged = hedged_cost(&realized, c.strike, c.notional, c.duration);

    for i in 0..realized.len() {
        assert_eq!(unhedged[i] - pnl[i], hedged[i]);
        assert_relative_eq!(hedged[i], c.fixed_cost(), max_relative = 1e-12);
    }
}

#[test]
fn test_scenario_result_matches_payoff_statistics() {
    let params = reference_scenario();
    let result = evaluate_scenario(&params).unwrap();
    let analysis = analyse_hedge(&params).unwrap();

    assert_eq!(result.evaluation_day, 20);
    assert_eq!(result.mean, analysis.payoff_summary.mean);
    assert_eq!(result.std_dev, analysis.payoff_summary.std_dev);
    // Payoff mean = unhedged mean - fixed cost
    assert_relative_eq!(
        result.mean,
        analysis.unhedged_summary.mean - analysis.hedged_summary.mean,
        max_relative = 1e-9
    );
}

// ============================================================================
// Evaluation day policy
// ============================================================================

#[test]
fn test_short_duration_rejected_with_computed_index() {
    let params = reference_scenario()
        .to_builder()
        .duration(1.0 / 1000.0)
        .build()
        .unwrap();
    let err = evaluate_scenario(&params).unwrap_err();
    assert_eq!(
        err,
        FraError::EvaluationDayOutOfRange {
            index: -1,
            n_steps: 63
        }
    );
    assert!(err.to_string().contains("-1"));
}

#[test]
fn test_one_calendar_day_contract_is_invalid_configuration() {
    // 1/365 of a year covers 0.69 of a 1/252 step: no whole step elapses
    let params = reference_scenario()
        .to_builder()
        .duration(1.0 / 365.0)
        .build()
        .unwrap();
    let err = evaluate_scenario(&params).unwrap_err();
    assert!(err.is_invalid_configuration());
    assert!(matches!(
        err,
        FraError::EvaluationDayOutOfRange { index: -1, .. }
    ));
}

#[test]
fn test_partial_steps_do_not_advance_settlement() {
    for (duration, expected) in [(1.6 / 252.0, 0), (21.6 / 252.0, 20), (1.0 / 12.0, 20)] {
        let params = reference_scenario()
            .to_builder()
            .duration(duration)
            .n_paths(10)
            .build()
            .unwrap();
        assert_eq!(evaluate_scenario(&params).unwrap().evaluation_day, expected);
    }
}

#[test]
fn test_long_duration_never_exceeds_matrix_width() {
    for duration in [0.25, 0.5, 1.0, 5.0] {
        let params = reference_scenario()
            .to_builder()
            .duration(duration)
            .n_paths(10)
            .build()
            .unwrap();
        let result = evaluate_scenario(&params).unwrap();
        assert_eq!(result.evaluation_day, 62, "duration {}", duration);
    }
}

#[test]
fn test_degenerate_horizon_rejected() {
    let result = ScenarioParams::builder()
        .horizon(1.0 / 1000.0)
        .time_step(1.0 / 252.0)
        .build();
    assert!(matches!(
        result,
        Err(FraError::InvalidConfiguration {
            parameter: "horizon",
            ..
        })
    ));
}
