//! Discrete-time lattice valuation (Cox-Ross-Rubinstein binomial tree).
//!
//! The tree has `n` time steps of size `Δt = T/n` with multiplicative
//! moves `u = exp(σ√Δt)`, `d = 1/u` and risk-neutral up-probability
//! `p = (e^{rΔt} - d)/(u - d)`. Valuation initialises the terminal payoff
//! over the `n + 1` leaf nodes and replaces every node with the discounted
//! risk-neutral expectation of its two successors, `n` times, until one
//! node survives. Early exercise is not modelled; this is a European
//! lattice only.

use tracing::warn;

use crate::contract::OptionContract;
use crate::error::ModelError;
use crate::model::{OptionKind, PricingModel, MIN_RECOMMENDED_STEPS};

/// Binomial-tree model for one contract with configurable depth.
///
/// The terminal underlying-price vector `S·u^j·d^(n-j)`, `j = 0..n`, is
/// derived once at construction. Backward induction is destructive, so
/// each valuation call rebuilds its working buffer from the cached
/// terminal prices rather than sharing partially-reduced state between
/// the call and put queries. O(n) time and space per valuation.
///
/// Higher `n` trades compute for closer convergence to the closed-form
/// price.
///
/// # Examples
/// ```
/// use europricer::{BinomialTreeModel, OptionContract, OptionKind, PricingModel};
///
/// let contract = OptionContract::new(100.0, 100.0, 30, 0.05, 0.2).unwrap();
/// let tree = BinomialTreeModel::new(&contract, 1000).unwrap();
/// assert!(tree.price(OptionKind::Call) > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct BinomialTreeModel {
    steps: usize,
    strike: f64,
    /// Per-step discount factor e^{-rΔt}.
    step_discount: f64,
    prob_up: f64,
    prob_down: f64,
    /// Terminal underlying prices, index j = number of up moves.
    terminal_prices: Vec<f64>,
}

impl BinomialTreeModel {
    /// Builds the lattice for a contract.
    ///
    /// # Arguments
    /// * `contract` - Validated option contract
    /// * `steps` - Tree depth `n` (must be >= 1; no default is baked in)
    ///
    /// # Errors
    /// - [`ModelError::InvalidStepCount`] when `steps == 0`
    /// - [`ModelError::DegenerateVolatility`] when `σ = 0`: `u = d = 1`
    ///   makes the risk-neutral probability a 0/0
    ///
    /// Step counts below [`MIN_RECOMMENDED_STEPS`] are accepted but logged
    /// as an advisory warning, since the result may diverge materially
    /// from the closed-form reference.
    pub fn new(contract: &OptionContract, steps: usize) -> Result<Self, ModelError> {
        if steps == 0 {
            return Err(ModelError::InvalidStepCount { steps });
        }
        if contract.volatility() <= 0.0 {
            return Err(ModelError::DegenerateVolatility);
        }
        if steps < MIN_RECOMMENDED_STEPS {
            warn!(
                steps,
                min = MIN_RECOMMENDED_STEPS,
                "lattice depth is small; price may diverge from the analytic reference"
            );
        }

        let dt = contract.maturity_years() / steps as f64;
        let up = (contract.volatility() * dt.sqrt()).exp();
        let down = 1.0 / up;
        let growth = (contract.rate() * dt).exp();
        let prob_up = (growth - down) / (up - down);

        let spot = contract.spot();
        let terminal_prices = (0..=steps)
            .map(|j| spot * up.powi(j as i32) * down.powi((steps - j) as i32))
            .collect();

        Ok(Self {
            steps,
            strike: contract.strike(),
            step_discount: (-contract.rate() * dt).exp(),
            prob_up,
            prob_down: 1.0 - prob_up,
            terminal_prices,
        })
    }

    /// Returns the tree depth.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Returns the risk-neutral up-probability.
    #[inline]
    pub fn prob_up(&self) -> f64 {
        self.prob_up
    }

    /// Runs backward induction from a fresh terminal payoff buffer.
    fn backward_induction(&self, kind: OptionKind) -> f64 {
        let mut nodes: Vec<f64> = self
            .terminal_prices
            .iter()
            .map(|&s| kind.payoff(s, self.strike))
            .collect();

        // Pass k shrinks the live range from n + 1 - k nodes to n - k.
        for pass in 0..self.steps {
            let live = self.steps - pass;
            for i in 0..live {
                nodes[i] = self.step_discount
                    * (self.prob_up * nodes[i + 1] + self.prob_down * nodes[i]);
            }
        }

        nodes[0]
    }
}

impl PricingModel for BinomialTreeModel {
    fn call_price(&self) -> f64 {
        self.backward_induction(OptionKind::Call)
    }

    fn put_price(&self) -> f64 {
        self.backward_induction(OptionKind::Put)
    }
}
