//! Validating constructor for [`Sim`].

use gw_control::Sensor;
use gw_core::{Direction, SimConfig, SimRng};
use gw_traffic::{Intersection, TrafficGenerator};

use crate::{Sim, SimError, SimResult};

/// Builder for [`Sim`].
///
/// The component types themselves assume well-formed parameters; this is
/// the boundary where a malformed [`SimConfig`] is rejected instead.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config).build()?;
/// let summary = sim.run(&mut controller, 120.0, true, &mut NoopObserver);
/// ```
pub struct SimBuilder {
    config: SimConfig,
    sensor: Option<Sensor>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        SimBuilder { config, sensor: None }
    }

    /// Override the default congestion bins.
    pub fn sensor(mut self, sensor: Sensor) -> Self {
        self.sensor = Some(sensor);
        self
    }

    /// Validate the configuration and assemble a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        let config = self.config;

        // `!(x > 0.0)` also rejects NaN.
        if !(config.dt_secs > 0.0) {
            return Err(SimError::Config { what: "dt_secs", value: config.dt_secs });
        }
        if !(config.service_rate > 0.0) {
            return Err(SimError::Config { what: "service_rate", value: config.service_rate });
        }
        for dir in Direction::ALL {
            let rate = config.arrival_rates[dir];
            if !rate.is_finite() || rate < 0.0 {
                return Err(SimError::Config { what: "arrival_rate", value: rate });
            }
        }

        Ok(Sim {
            intersection: Intersection::new(config.service_rate),
            generator: TrafficGenerator::new(config.arrival_rates),
            sensor: self.sensor.unwrap_or_default(),
            rng: SimRng::new(config.seed),
            config,
        })
    }
}
