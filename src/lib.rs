//! # europricer
//!
//! European option pricing under three independent numerical methods
//! behind one uniform contract, so results are directly comparable for
//! the same inputs:
//!
//! - [`BlackScholesModel`]: closed-form Black-Scholes-Merton valuation
//! - [`BinomialTreeModel`]: Cox-Ross-Rubinstein lattice with configurable
//!   depth and backward risk-neutral discounting
//! - [`MonteCarloModel`]: seeded, reproducible geometric Brownian motion
//!   simulation with a lazily cached path matrix
//!
//! A caller builds one validated [`OptionContract`], instantiates each
//! model from it (plus the model's own parameter) and queries
//! [`PricingModel::price`] for [`OptionKind::Call`] or
//! [`OptionKind::Put`]. Every model instance is an independent value;
//! separate pricing requests can run on separate threads without
//! synchronisation.
//!
//! ```
//! use europricer::{
//!     BinomialTreeModel, BlackScholesModel, MonteCarloModel,
//!     OptionContract, OptionKind, PricingModel,
//! };
//!
//! let contract = OptionContract::new(100.0, 100.0, 30, 0.05, 0.2)?;
//!
//! let analytic = BlackScholesModel::new(&contract)?;
//! let lattice = BinomialTreeModel::new(&contract, 1000)?;
//! let simulation = MonteCarloModel::new(&contract, 100_000, 42)?;
//!
//! let reference = analytic.price(OptionKind::Call);
//! assert!((lattice.price(OptionKind::Call) - reference).abs() < 0.01);
//! assert!((simulation.price(OptionKind::Call) - reference).abs() < 0.1);
//! # Ok::<(), europricer::ModelError>(())
//! ```
//!
//! ## Design principles
//!
//! - **Fail fast**: invariant violations are rejected at contract or
//!   model construction with a typed [`ModelError`]; price queries are
//!   infallible and never emit `NaN` sentinels.
//! - **Reproducibility**: the simulation seed is an explicit constructor
//!   parameter and per-path streams are seed-partitioned, so parallel
//!   path generation cannot perturb the draws.
//! - **No shared state**: each model owns its buffers; caches are
//!   per-instance and invalidated only by constructing a new model.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod analytical;
pub mod contract;
pub mod error;
pub mod lattice;
pub mod mc;
pub mod model;
pub mod rng;
pub mod sheet;

pub use analytical::BlackScholesModel;
pub use contract::{OptionContract, DAYS_PER_YEAR};
pub use error::ModelError;
pub use lattice::BinomialTreeModel;
pub use mc::{MonteCarloModel, DEFAULT_SEED};
pub use model::{
    OptionKind, PricingModel, MIN_RECOMMENDED_PATHS, MIN_RECOMMENDED_STEPS,
};
pub use sheet::{price_ladder, MarketSnapshot, MethodPrices, StrikeRow};
