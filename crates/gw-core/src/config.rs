//! Simulation configuration.

use crate::PerDirection;

/// Caller-supplied configuration for one simulation.
///
/// Validated at the `gw-sim` builder boundary; the component types
/// themselves assume well-formed values.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Mean vehicle arrivals per second for each approach.
    pub arrival_rates: PerDirection<f64>,

    /// Micro-timestep for arrival sampling, in seconds.  Must be positive.
    /// Independent of the green durations the controller picks — a phase of
    /// any length is sampled at this fixed interval.
    pub dt_secs: f64,

    /// Vehicles the intersection can clear per green second.  Must be
    /// positive.
    pub service_rate: f64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,
}
