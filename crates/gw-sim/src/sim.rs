//! The `Sim` struct and its decision loop.

use gw_control::{Controller, Sensor};
use gw_core::{SimConfig, SimRng};
use gw_traffic::{Intersection, TrafficGenerator, Vehicle};

use crate::{RunSummary, SimObserver, StepReport};

/// Reward granted per vehicle that clears the intersection.
const REWARD_PER_DEPARTURE: f64 = 10.0;
/// Penalty per vehicle still queued after service.
const PENALTY_PER_QUEUED: f64 = 2.0;

/// The simulation: one four-way intersection, its arrival process, the
/// congestion sensor, and the single RNG stream every sample routes through.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// The configuration the builder validated.
    pub config: SimConfig,

    /// The intersection under control.  Replaced wholesale by
    /// [`reset`][Self::reset].
    pub intersection: Intersection,

    /// Poisson arrival process.  Rates persist across episodes.
    pub generator: TrafficGenerator,

    /// Queue discretizer producing the controller's observations.
    pub sensor: Sensor,

    /// The run's only randomness source.
    pub rng: SimRng,
}

impl Sim {
    /// Start a new episode: a fresh, empty intersection with the same
    /// service rate.  Generator rates, sensor bins, the RNG stream, and
    /// whatever the controller has learned all carry over.
    pub fn reset(&mut self) {
        self.intersection = Intersection::new(self.intersection.service_rate);
    }

    /// Drive the decision loop from `t = 0` until `t >= max_t_secs`.
    ///
    /// Termination is checked before each step and `t` advances by the full
    /// chosen duration afterwards, so the final step may push `t` past
    /// `max_t_secs` — a started phase always runs to completion.  Baseline
    /// comparisons depend on this exact accounting; do not truncate the
    /// last phase.
    ///
    /// With `train` set, every observed transition is fed back through
    /// [`Controller::update`]; otherwise the controller is read-only apart
    /// from its own `choose` bookkeeping.
    pub fn run<C, O>(
        &mut self,
        controller: &mut C,
        max_t_secs: f64,
        train: bool,
        observer: &mut O,
    ) -> RunSummary
    where
        C: Controller,
        O: SimObserver,
    {
        let dt = self.config.dt_secs;
        let mut departed: Vec<Vehicle> = Vec::new();
        let mut total_reward = 0.0;
        let mut t = 0.0;

        while t < max_t_secs {
            // ── Observe and act ───────────────────────────────────────────
            let state = self.sensor.read(&self.intersection);
            let action_index = controller.choose(state, &mut self.rng);
            let action = controller.actions()[action_index];
            let phase_end = t + action.green_secs;

            // ── Arrival phase ─────────────────────────────────────────────
            //
            // Sampled at fixed micro-intervals of `dt` across the whole
            // phase, however long the controller made it.  Each vehicle is
            // stamped with its micro-step's start time.
            let mut arrivals: u32 = 0;
            let mut tt = t;
            while tt < phase_end {
                let counts = self.generator.generate(dt, &mut self.rng);
                for (direction, &count) in counts.iter() {
                    for _ in 0..count {
                        self.intersection.add_vehicle(direction, Vehicle::new(tt));
                    }
                    arrivals += count;
                }
                tt += dt;
            }

            // ── Service phase ─────────────────────────────────────────────
            let served = self.intersection.serve(action.phase, action.green_secs, phase_end);

            // ── Reward, next observation, learning ────────────────────────
            let queues = self.intersection.queue_lengths();
            let reward = REWARD_PER_DEPARTURE * served.len() as f64
                - PENALTY_PER_QUEUED * queues.total() as f64;
            let next_state = self.sensor.read(&self.intersection);
            if train {
                controller.update(state, action_index, reward, next_state);
            }

            observer.on_step(&StepReport {
                t_secs: t,
                state,
                action_index,
                action,
                arrivals,
                departed: served.len(),
                queues,
                reward,
                next_state,
            });

            total_reward += reward;
            departed.extend(served);
            t = phase_end;
        }

        let avg_wait_secs = if departed.is_empty() {
            0.0
        } else {
            let total: f64 = departed.iter().filter_map(Vehicle::wait_secs).sum();
            total / departed.len() as f64
        };

        let summary = RunSummary {
            departed: departed.len(),
            avg_wait_secs,
            total_reward,
        };
        observer.on_run_end(&summary);
        summary
    }
}
