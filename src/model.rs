//! The uniform pricing contract satisfied by all three models.

/// Lattice depths below this are likely to diverge materially from the
/// closed-form reference; model construction logs an advisory warning.
pub const MIN_RECOMMENDED_STEPS: usize = 20;

/// Path counts below this are likely to diverge materially from the
/// closed-form reference; model construction logs an advisory warning.
pub const MIN_RECOMMENDED_PATHS: usize = 500;

/// The kind of option being valued.
///
/// Dispatch over `{Call, Put}` is closed at the type level: there is no
/// unrecognised-kind failure mode, and no sentinel price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionKind {
    /// Right to buy the underlying at the strike.
    Call,
    /// Right to sell the underlying at the strike.
    Put,
}

impl OptionKind {
    /// Terminal payoff of this kind at underlying price `spot`.
    ///
    /// `max(S - K, 0)` for a call, `max(K - S, 0)` for a put.
    ///
    /// # Examples
    /// ```
    /// use europricer::OptionKind;
    ///
    /// assert_eq!(OptionKind::Call.payoff(110.0, 100.0), 10.0);
    /// assert_eq!(OptionKind::Put.payoff(110.0, 100.0), 0.0);
    /// ```
    #[inline]
    pub fn payoff(self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionKind::Call => (spot - strike).max(0.0),
            OptionKind::Put => (strike - spot).max(0.0),
        }
    }
}

impl std::fmt::Display for OptionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionKind::Call => write!(f, "Call"),
            OptionKind::Put => write!(f, "Put"),
        }
    }
}

/// Uniform valuation contract over the capability set {call, put}.
///
/// Each implementor is an independent, self-contained value constructed
/// from an [`OptionContract`](crate::OptionContract) plus its own method
/// parameter; no state is shared between models. Construction validates
/// all inputs, so every query is infallible and returns a finite
/// non-negative price.
///
/// Queries take `&self`; the only permitted side effect is model-local
/// caching (the simulation model generates its path matrix lazily on the
/// first query).
///
/// # Examples
/// ```
/// use europricer::{BlackScholesModel, OptionContract, OptionKind, PricingModel};
///
/// let contract = OptionContract::new(100.0, 100.0, 30, 0.05, 0.2).unwrap();
/// let model = BlackScholesModel::new(&contract).unwrap();
///
/// let call = model.price(OptionKind::Call);
/// let put = model.price(OptionKind::Put);
/// assert!(call > 0.0 && put > 0.0);
/// ```
pub trait PricingModel {
    /// Values the call option under this model's assumptions.
    fn call_price(&self) -> f64;

    /// Values the put option under this model's assumptions.
    fn put_price(&self) -> f64;

    /// Dispatches to [`call_price`](Self::call_price) or
    /// [`put_price`](Self::put_price) on `kind`.
    #[inline]
    fn price(&self, kind: OptionKind) -> f64 {
        match kind {
            OptionKind::Call => self.call_price(),
            OptionKind::Put => self.put_price(),
        }
    }
}
