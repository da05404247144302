//! Error types for contract validation and model construction.
//!
//! All failure modes in this crate are construction-time: once a model has
//! been built, every price query is infallible. Invariant violations
//! therefore fail fast in `new` and are never retried (the computations are
//! deterministic given their inputs, so a retry cannot change the outcome).

use thiserror::Error;

/// Categorised pricing-model errors.
///
/// # Variants
/// - `InvalidSpot` / `InvalidStrike` / `InvalidMaturity`: contract invariant
///   violations (`spot > 0`, `strike > 0`, `maturity_days > 0`)
/// - `InvalidVolatility`: negative or non-finite volatility
/// - `DegenerateVolatility`: `σ√T = 0` reaching a model whose formulas
///   divide by it; rejected rather than propagated as `NaN`
/// - `InvalidStepCount` / `InvalidPathCount`: zero lattice depth or
///   simulation path count
///
/// # Examples
/// ```
/// use europricer::ModelError;
///
/// let err = ModelError::InvalidSpot { spot: -100.0 };
/// assert!(format!("{}", err).contains("spot"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ModelError {
    /// Non-positive or non-finite spot price.
    #[error("invalid spot price: S = {spot} (must be positive and finite)")]
    InvalidSpot {
        /// The offending spot value.
        spot: f64,
    },

    /// Non-positive or non-finite strike price.
    #[error("invalid strike price: K = {strike} (must be positive and finite)")]
    InvalidStrike {
        /// The offending strike value.
        strike: f64,
    },

    /// Zero time to maturity.
    #[error("invalid maturity: {days} days (must be at least 1)")]
    InvalidMaturity {
        /// The offending day count.
        days: u32,
    },

    /// Negative or non-finite volatility.
    #[error("invalid volatility: sigma = {volatility} (must be non-negative and finite)")]
    InvalidVolatility {
        /// The offending volatility value.
        volatility: f64,
    },

    /// Non-finite risk-free rate.
    #[error("invalid risk-free rate: r = {rate} (must be finite)")]
    InvalidRate {
        /// The offending rate value.
        rate: f64,
    },

    /// `σ√T = 0` for a model that divides by it (closed form `d1`,
    /// lattice risk-neutral probability).
    #[error("degenerate volatility term: sigma * sqrt(T) = 0 makes the model ill-posed")]
    DegenerateVolatility,

    /// Zero lattice step count.
    #[error("invalid step count: {steps} (lattice requires at least 1 step)")]
    InvalidStepCount {
        /// The offending step count.
        steps: usize,
    },

    /// Zero simulation path count.
    #[error("invalid path count: {paths} (simulation requires at least 1 path)")]
    InvalidPathCount {
        /// The offending path count.
        paths: usize,
    },
}
