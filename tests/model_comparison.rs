//! Cross-model integration tests: the three methods must agree on the
//! same contract to tolerances governed by their convergence behaviour.

use approx::assert_relative_eq;
use europricer::{
    BinomialTreeModel, BlackScholesModel, MonteCarloModel, OptionContract, OptionKind,
    PricingModel,
};

fn reference_contract() -> OptionContract {
    OptionContract::new(100.0, 100.0, 30, 0.05, 0.2).unwrap()
}

/// Sample standard error of the discounted mean payoff, computed from the
/// model's own path grid.
fn sample_standard_error(model: &MonteCarloModel, contract: &OptionContract) -> f64 {
    let steps = model.steps();
    let strike = contract.strike();
    let discount = contract.discount_factor();
    let payoffs: Vec<f64> = model
        .paths()
        .chunks(steps)
        .map(|path| discount * OptionKind::Call.payoff(path[steps - 1], strike))
        .collect();

    let n = payoffs.len() as f64;
    let mean = payoffs.iter().sum::<f64>() / n;
    let variance = payoffs.iter().map(|p| (p - mean).powi(2)).sum::<f64>() / (n - 1.0);
    (variance / n).sqrt()
}

#[test]
fn concrete_scenario_all_methods() {
    // S = 100, K = 100, T = 30 days, r = 5%, sigma = 20%
    let contract = reference_contract();

    let analytic = BlackScholesModel::new(&contract).unwrap();
    assert_relative_eq!(analytic.call_price(), 2.4934, epsilon = 5e-3);
    assert_relative_eq!(analytic.put_price(), 2.0832, epsilon = 5e-3);

    let lattice = BinomialTreeModel::new(&contract, 1000).unwrap();
    assert!((lattice.call_price() - analytic.call_price()).abs() < 0.01);
    assert!((lattice.put_price() - analytic.put_price()).abs() < 0.01);

    let simulation = MonteCarloModel::new(&contract, 100_000, 11).unwrap();
    assert!((simulation.call_price() - analytic.call_price()).abs() < 0.1);
    assert!((simulation.put_price() - analytic.put_price()).abs() < 0.1);
}

#[test]
fn put_call_parity_analytic() {
    for (spot, strike, days, rate, vol) in [
        (100.0, 100.0, 30, 0.05, 0.2),
        (100.0, 90.0, 365, 0.03, 0.35),
        (250.0, 300.0, 180, 0.01, 0.15),
        (42.0, 40.0, 7, 0.10, 0.6),
    ] {
        let contract = OptionContract::new(spot, strike, days, rate, vol).unwrap();
        let model = BlackScholesModel::new(&contract).unwrap();
        let parity = model.call_price() - model.put_price();
        let forward_gap = spot - strike * contract.discount_factor();
        assert_relative_eq!(parity, forward_gap, epsilon = 1e-9, max_relative = 1e-9);
    }
}

#[test]
fn lattice_converges_to_analytic() {
    let contract = reference_contract();
    let reference = BlackScholesModel::new(&contract)
        .unwrap()
        .price(OptionKind::Call);

    let mut previous_error = f64::INFINITY;
    for steps in [10, 50, 200, 1000] {
        let tree = BinomialTreeModel::new(&contract, steps).unwrap();
        let error = (tree.price(OptionKind::Call) - reference).abs();
        // Non-strict decrease, with a hair of slack for the lattice's
        // odd/even oscillation around the continuous limit
        assert!(
            error <= previous_error + 1e-3,
            "error grew from {} to {} at {} steps",
            previous_error,
            error,
            steps
        );
        previous_error = error;
    }
    assert!(previous_error < 0.01);
}

#[test]
fn simulation_error_within_statistical_bounds() {
    let contract = reference_contract();
    let reference = BlackScholesModel::new(&contract)
        .unwrap()
        .price(OptionKind::Call);

    for n_paths in [100, 1_000, 10_000, 100_000] {
        let model = MonteCarloModel::new(&contract, n_paths, 11).unwrap();
        let error = (model.price(OptionKind::Call) - reference).abs();
        let standard_error = sample_standard_error(&model, &contract);
        // A 5-sigma deviation would indicate a simulation bug, not noise
        assert!(
            error <= 5.0 * standard_error,
            "error {} exceeds 5 x SE {} at {} paths",
            error,
            standard_error,
            n_paths
        );
    }

    // At 100k paths the estimate is display-precision accurate
    let large = MonteCarloModel::new(&contract, 100_000, 11).unwrap();
    assert!((large.price(OptionKind::Call) - reference).abs() < 0.1);
}

#[test]
fn simulation_determinism_bit_identical() {
    let contract = reference_contract();
    let a = MonteCarloModel::new(&contract, 20_000, 2024).unwrap();
    let b = MonteCarloModel::new(&contract, 20_000, 2024).unwrap();

    assert_eq!(a.paths(), b.paths());
    assert_eq!(a.price(OptionKind::Call), b.price(OptionKind::Call));
    assert_eq!(a.price(OptionKind::Put), b.price(OptionKind::Put));

    // A different seed must actually change the draws
    let c = MonteCarloModel::new(&contract, 20_000, 2025).unwrap();
    assert_ne!(a.price(OptionKind::Call), c.price(OptionKind::Call));
}

#[test]
fn caching_idempotence_both_orders() {
    let contract = reference_contract();

    let a = MonteCarloModel::new(&contract, 5_000, 99).unwrap();
    let call_then_put = (a.price(OptionKind::Call), a.price(OptionKind::Put));

    let b = MonteCarloModel::new(&contract, 5_000, 99).unwrap();
    let put_then_call = (b.price(OptionKind::Put), b.price(OptionKind::Call));

    assert_eq!(call_then_put.0, put_then_call.1);
    assert_eq!(call_then_put.1, put_then_call.0);

    let tree = BinomialTreeModel::new(&contract, 500).unwrap();
    assert_eq!(tree.price(OptionKind::Call), tree.price(OptionKind::Call));
    assert_eq!(tree.price(OptionKind::Put), tree.price(OptionKind::Put));
}

#[test]
fn at_the_money_boundary() {
    let contract = reference_contract();
    let model = BlackScholesModel::new(&contract).unwrap();

    let call = model.price(OptionKind::Call);
    let put = model.price(OptionKind::Put);
    assert!(call > 0.0);
    assert!(put > 0.0);

    let expected_gap = 100.0 * (1.0 - contract.discount_factor());
    assert_relative_eq!(call - put, expected_gap, epsilon = 1e-9);
}

#[test]
fn models_are_independent_values() {
    // Two contracts priced side by side; neither model run perturbs the
    // other's result.
    let atm = reference_contract();
    let otm = OptionContract::new(100.0, 120.0, 30, 0.05, 0.2).unwrap();

    let atm_tree = BinomialTreeModel::new(&atm, 200).unwrap();
    let otm_tree = BinomialTreeModel::new(&otm, 200).unwrap();

    let atm_before = atm_tree.price(OptionKind::Call);
    let _ = otm_tree.price(OptionKind::Call);
    let _ = otm_tree.price(OptionKind::Put);
    assert_eq!(atm_tree.price(OptionKind::Call), atm_before);
    assert!(otm_tree.price(OptionKind::Call) < atm_before);
}
