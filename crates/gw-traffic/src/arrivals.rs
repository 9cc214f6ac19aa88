//! Stochastic vehicle arrival process.

use gw_core::{PerDirection, SimRng};

/// Poisson arrival generator with an independent mean rate per direction.
///
/// Rates are fixed for the lifetime of a run; the process is
/// time-homogeneous, and successive calls are independent (no
/// autocorrelation, no time-of-day pattern).
#[derive(Clone, Debug)]
pub struct TrafficGenerator {
    rates: PerDirection<f64>,
}

impl TrafficGenerator {
    /// `rates` are mean arrivals per second for each direction.
    pub fn new(rates: PerDirection<f64>) -> Self {
        TrafficGenerator { rates }
    }

    /// Draw one micro-step's arrival counts: an independent Poisson sample
    /// with mean `rate * dt_secs` for each direction, sampled in canonical
    /// direction order so the draw sequence is a pure function of the RNG
    /// stream.
    pub fn generate(&self, dt_secs: f64, rng: &mut SimRng) -> PerDirection<u32> {
        PerDirection::from_fn(|d| poisson(self.rates[d] * dt_secs, rng))
    }
}

/// Knuth's exponential-waiting-time construction: multiply uniform draws
/// until the running product drops to `exp(-lambda)`.
///
/// Built on the shared uniform stream rather than a library distribution so
/// that the exact draw sequence is reproducible from the run seed alone.
fn poisson(lambda: f64, rng: &mut SimRng) -> u32 {
    let limit = (-lambda).exp();
    let mut count = 0;
    let mut product: f64 = 1.0;
    loop {
        product *= rng.random::<f64>();
        if product <= limit {
            return count;
        }
        count += 1;
    }
}
