//! Closed-form Black-Scholes-Merton valuation.
//!
//! ## Formulas
//!
//! **Call**: C = S·Φ(d₁) - K·e^(-rT)·Φ(d₂)
//! **Put**:  P = K·e^(-rT)·Φ(-d₂) - S·Φ(-d₁)
//!
//! with
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T

use super::distributions::norm_cdf;
use crate::contract::OptionContract;
use crate::error::ModelError;
use crate::model::PricingModel;

/// Closed-form Black-Scholes model for one contract.
///
/// `d1`, `d2` and the discounted strike `K·e^(-rT)` are computed once at
/// construction and reused by both query paths, so each valuation is two
/// CDF evaluations. Deterministic, O(1), no randomness.
///
/// # Examples
/// ```
/// use europricer::{BlackScholesModel, OptionContract, PricingModel};
///
/// let contract = OptionContract::new(100.0, 100.0, 365, 0.05, 0.2).unwrap();
/// let model = BlackScholesModel::new(&contract).unwrap();
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = model.call_price() - model.put_price()
///     - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct BlackScholesModel {
    spot: f64,
    discounted_strike: f64,
    d1: f64,
    d2: f64,
}

impl BlackScholesModel {
    /// Creates the model for a contract, precomputing `d1`, `d2` and the
    /// discounted strike.
    ///
    /// # Errors
    /// Returns [`ModelError::DegenerateVolatility`] when `σ√T = 0`: the
    /// `d1` denominator vanishes and the formula is ill-posed. The
    /// contract already guarantees `T > 0`, so this fires exactly for
    /// zero volatility.
    pub fn new(contract: &OptionContract) -> Result<Self, ModelError> {
        let spot = contract.spot();
        let strike = contract.strike();
        let maturity = contract.maturity_years();
        let rate = contract.rate();

        let vol_sqrt_t = contract.volatility() * maturity.sqrt();
        if vol_sqrt_t <= 0.0 {
            return Err(ModelError::DegenerateVolatility);
        }

        let d1 = ((spot / strike).ln()
            + (rate + 0.5 * contract.volatility() * contract.volatility()) * maturity)
            / vol_sqrt_t;
        let d2 = d1 - vol_sqrt_t;

        Ok(Self {
            spot,
            discounted_strike: strike * contract.discount_factor(),
            d1,
            d2,
        })
    }

    /// Returns the cached d₁ term.
    #[inline]
    pub fn d1(&self) -> f64 {
        self.d1
    }

    /// Returns the cached d₂ term.
    #[inline]
    pub fn d2(&self) -> f64 {
        self.d2
    }
}

impl PricingModel for BlackScholesModel {
    #[inline]
    fn call_price(&self) -> f64 {
        self.spot * norm_cdf(self.d1) - self.discounted_strike * norm_cdf(self.d2)
    }

    #[inline]
    fn put_price(&self) -> f64 {
        self.discounted_strike * norm_cdf(-self.d2) - self.spot * norm_cdf(-self.d1)
    }
}
