//! Plain data records produced by the decision loop.

use gw_control::TrafficState;
use gw_core::{Action, PerDirection};

/// Everything observable about one completed decision step.
#[derive(Clone, Debug)]
pub struct StepReport {
    /// Simulated time at which the step began.
    pub t_secs: f64,
    /// Observation the controller acted on.
    pub state: TrafficState,
    /// Index of the chosen action in the controller's action list.
    pub action_index: usize,
    /// The chosen action itself.
    pub action: Action,
    /// Vehicles that arrived during the phase, all directions combined.
    pub arrivals: u32,
    /// Vehicles that cleared during the phase.
    pub departed: usize,
    /// Queue lengths after service.
    pub queues: PerDirection<usize>,
    /// `10·departed − 2·(total queued after service)`.
    pub reward: f64,
    /// Observation after the phase, fed to the learner.
    pub next_state: TrafficState,
}

/// Result record for one full [`Sim::run`][crate::Sim::run] invocation.
/// Produced fresh per run, never persisted.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct RunSummary {
    /// Vehicles that cleared the intersection over the whole run.
    pub departed: usize,
    /// Mean of `depart − arrival` over departed vehicles; 0.0 when none
    /// departed.
    pub avg_wait_secs: f64,
    /// Sum of per-step rewards.
    pub total_reward: f64,
}
