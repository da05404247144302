//! Side-by-side pricing over a strike ladder.
//!
//! This is the crate's boundary towards the presentation layer: for every
//! strike in a resolved market snapshot it produces the six prices
//! `{call, put} x {analytic, lattice, simulation}` as plain numbers.
//! Formatting to display precision is the caller's business, never done
//! here.

use crate::analytical::BlackScholesModel;
use crate::contract::OptionContract;
use crate::error::ModelError;
use crate::lattice::BinomialTreeModel;
use crate::mc::MonteCarloModel;
use crate::model::PricingModel;

/// Already-resolved market inputs for one underlying, as delivered by the
/// (out-of-scope) data-resolution collaborator.
///
/// The risk-free rate arrives as a percentage (5.0 = 5%) and is divided
/// by 100 before any model sees it. Strikes are expected sorted and
/// distinct; the ladder is priced in the order given.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketSnapshot {
    /// Current underlying price.
    pub spot: f64,
    /// Annualised volatility.
    pub volatility: f64,
    /// Time to expiry in calendar days.
    pub maturity_days: u32,
    /// Risk-free rate in percent (5.0 = 5%).
    pub rate_percent: f64,
    /// Strike ladder (sorted, distinct).
    pub strikes: Vec<f64>,
}

/// One price per method for a single option kind.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MethodPrices {
    /// Closed-form Black-Scholes price.
    pub analytic: f64,
    /// Binomial-tree price.
    pub lattice: f64,
    /// Monte Carlo price.
    pub simulation: f64,
}

/// The six computed prices for one strike.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrikeRow {
    /// The strike this row was priced at.
    pub strike: f64,
    /// Call prices per method.
    pub call: MethodPrices,
    /// Put prices per method.
    pub put: MethodPrices,
}

/// Prices every strike in the snapshot under all three models.
///
/// One fresh model instance per contract per method; nothing is shared
/// across strikes, so a bad strike fails the whole ladder fast rather
/// than emitting a partial table.
///
/// # Arguments
/// * `snapshot` - Resolved market inputs
/// * `lattice_steps` - Tree depth for the lattice model
/// * `sim_paths` - Path count for the simulation model
/// * `seed` - Simulation seed (see [`crate::mc::DEFAULT_SEED`])
///
/// # Errors
/// Propagates the first [`ModelError`] from contract validation or model
/// construction.
///
/// # Examples
/// ```
/// use europricer::sheet::{price_ladder, MarketSnapshot};
/// use europricer::DEFAULT_SEED;
///
/// let snapshot = MarketSnapshot {
///     spot: 100.0,
///     volatility: 0.2,
///     maturity_days: 30,
///     rate_percent: 5.0,
///     strikes: vec![95.0, 100.0, 105.0],
/// };
/// let rows = price_ladder(&snapshot, 1000, 10_000, DEFAULT_SEED).unwrap();
/// assert_eq!(rows.len(), 3);
/// assert!(rows[0].call.analytic > rows[2].call.analytic);
/// ```
pub fn price_ladder(
    snapshot: &MarketSnapshot,
    lattice_steps: usize,
    sim_paths: usize,
    seed: u64,
) -> Result<Vec<StrikeRow>, ModelError> {
    let rate = snapshot.rate_percent / 100.0;

    snapshot
        .strikes
        .iter()
        .map(|&strike| {
            let contract = OptionContract::new(
                snapshot.spot,
                strike,
                snapshot.maturity_days,
                rate,
                snapshot.volatility,
            )?;

            let analytic = BlackScholesModel::new(&contract)?;
            let lattice = BinomialTreeModel::new(&contract, lattice_steps)?;
            let simulation = MonteCarloModel::new(&contract, sim_paths, seed)?;

            Ok(StrikeRow {
                strike,
                call: MethodPrices {
                    analytic: analytic.call_price(),
                    lattice: lattice.call_price(),
                    simulation: simulation.call_price(),
                },
                put: MethodPrices {
                    analytic: analytic.put_price(),
                    lattice: lattice.put_price(),
                    simulation: simulation.put_price(),
                },
            })
        })
        .collect()
}
