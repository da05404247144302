//! Closed-form analytic valuation.
//!
//! - [`BlackScholesModel`]: Black-Scholes-Merton formula for European
//!   calls and puts
//! - [`norm_cdf`] / [`norm_pdf`]: standard normal distribution helpers

pub mod black_scholes;
pub mod distributions;

pub use black_scholes::BlackScholesModel;
pub use distributions::{norm_cdf, norm_pdf};
