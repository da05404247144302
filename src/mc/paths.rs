//! Geometric Brownian motion path-matrix generation.
//!
//! Uses the log-space exact solution for numerical stability:
//!
//! ```text
//! S(t) = S(t-1) * exp((r - 0.5*sigma^2) * dt + sigma * sqrt(dt) * Z)
//! ```
//!
//! # Memory layout
//!
//! Paths are stored path-major: `grid[path_idx * steps + step_idx]`, with
//! `step_idx = 0` pinned at the spot price and one entry per simulated
//! day thereafter. Terminal prices are the last entry of each row.
//!
//! # Reproducibility
//!
//! Path `i` draws from its own generator seeded by
//! `path_stream_seed(seed, i)`, so the grid is bit-identical regardless
//! of how rayon schedules the per-path work.

use rayon::prelude::*;

use crate::contract::OptionContract;
use crate::rng::{path_stream_seed, SimRng};

/// Generates the GBM price grid for `n_paths` paths of `steps` samples.
///
/// `steps` counts grid rows, not increments: entry 0 of every path is the
/// spot price and `steps - 1` stochastic updates follow, each of size
/// `dt = T / steps`. A single-step grid degenerates to a constant column
/// of spot prices.
pub(crate) fn generate_gbm_grid(
    contract: &OptionContract,
    steps: usize,
    n_paths: usize,
    seed: u64,
) -> Vec<f64> {
    debug_assert!(steps >= 1 && n_paths >= 1);

    let dt = contract.maturity_years() / steps as f64;
    let sigma = contract.volatility();
    // Precomputed outside the path loop
    let drift_dt = (contract.rate() - 0.5 * sigma * sigma) * dt;
    let vol_sqrt_dt = sigma * dt.sqrt();
    let spot = contract.spot();

    let mut grid = vec![0.0; n_paths * steps];
    grid.par_chunks_mut(steps)
        .enumerate()
        .for_each(|(path_idx, path)| {
            let mut rng = SimRng::from_seed(path_stream_seed(seed, path_idx as u64));
            let mut price = spot;
            path[0] = price;
            for sample in path.iter_mut().skip(1) {
                let z = rng.next_normal();
                price *= (drift_dt + vol_sqrt_dt * z).exp();
                *sample = price;
            }
        });

    grid
}
