//! Stochastic-path (Monte Carlo) valuation.
//!
//! - [`MonteCarloModel`]: lazy, cached GBM simulation priced as the
//!   discounted mean terminal payoff
//! - path generation lives in `paths`; the seeded variate source in
//!   [`crate::rng`]

pub mod model;
pub(crate) mod paths;

pub use model::{MonteCarloModel, DEFAULT_SEED};
