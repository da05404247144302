//! Option contract parameters shared by all pricing models.

use crate::error::ModelError;

/// Calendar days per year used to convert maturities to year fractions.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Immutable scalar inputs describing one European option.
///
/// A validated contract is the sole shared input to the three pricing
/// models; method-specific parameters (lattice depth, path count, seed)
/// are supplied to the individual model constructors instead.
///
/// # Invariants
/// - `spot > 0`, `strike > 0`, `maturity_days > 0`
/// - `volatility >= 0` (exactly zero is legal here; models whose formulas
///   divide by `σ√T` reject it at their own construction)
/// - all real-valued fields are finite
///
/// # Examples
/// ```
/// use europricer::OptionContract;
///
/// let contract = OptionContract::new(100.0, 105.0, 30, 0.05, 0.2).unwrap();
/// assert_eq!(contract.strike(), 105.0);
///
/// // Invariant violations fail fast
/// assert!(OptionContract::new(-100.0, 105.0, 30, 0.05, 0.2).is_err());
/// assert!(OptionContract::new(100.0, 105.0, 0, 0.05, 0.2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionContract {
    spot: f64,
    strike: f64,
    maturity_days: u32,
    rate: f64,
    volatility: f64,
}

impl OptionContract {
    /// Creates a validated contract.
    ///
    /// # Arguments
    /// * `spot` - Current underlying price (must be positive)
    /// * `strike` - Option strike (must be positive)
    /// * `maturity_days` - Time to expiry in calendar days (must be >= 1)
    /// * `rate` - Risk-free rate, annualised, decimal form (0.05 = 5%)
    /// * `volatility` - Annualised volatility (must be non-negative)
    ///
    /// # Errors
    /// Returns the matching [`ModelError`] variant for the first violated
    /// invariant.
    pub fn new(
        spot: f64,
        strike: f64,
        maturity_days: u32,
        rate: f64,
        volatility: f64,
    ) -> Result<Self, ModelError> {
        if !(spot > 0.0 && spot.is_finite()) {
            return Err(ModelError::InvalidSpot { spot });
        }
        if !(strike > 0.0 && strike.is_finite()) {
            return Err(ModelError::InvalidStrike { strike });
        }
        if maturity_days == 0 {
            return Err(ModelError::InvalidMaturity {
                days: maturity_days,
            });
        }
        if !rate.is_finite() {
            return Err(ModelError::InvalidRate { rate });
        }
        if !(volatility >= 0.0 && volatility.is_finite()) {
            return Err(ModelError::InvalidVolatility { volatility });
        }

        Ok(Self {
            spot,
            strike,
            maturity_days,
            rate,
            volatility,
        })
    }

    /// Returns the underlying spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the time to expiry in calendar days.
    #[inline]
    pub fn maturity_days(&self) -> u32 {
        self.maturity_days
    }

    /// Returns the annualised risk-free rate (decimal form).
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the annualised volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns the time to expiry as a year fraction (`maturity_days / 365`).
    #[inline]
    pub fn maturity_years(&self) -> f64 {
        f64::from(self.maturity_days) / DAYS_PER_YEAR
    }

    /// Returns the discount factor `e^(-rT)` to expiry.
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.maturity_years()).exp()
    }
}
