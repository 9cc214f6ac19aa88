//! The `Controller` trait — the policy seam of the simulation — and the two
//! non-learning baselines.

use gw_core::{Action, SimRng};

use crate::TrafficState;

// ── Controller ────────────────────────────────────────────────────────────────

/// Pluggable signal-timing policy.
///
/// `Sim::run` is generic over this trait, so a fixed-timer baseline, a
/// random baseline, and the learned agent all drive the same decision loop.
/// Only [`choose`][Self::choose] requires real work; [`update`][Self::update]
/// defaults to a no-op so policies that don't learn implement nothing extra.
pub trait Controller {
    /// The fixed, ordered action set.  [`choose`][Self::choose] returns
    /// indices into this slice.
    fn actions(&self) -> &[Action];

    /// Pick the next action for `state`.
    ///
    /// Any randomness must come from `rng` — the loop's shared stream — so
    /// seeded runs stay reproducible.
    fn choose(&mut self, state: TrafficState, rng: &mut SimRng) -> usize;

    /// Feed back one observed transition.  Default: ignore it.
    fn update(
        &mut self,
        _state: TrafficState,
        _action: usize,
        _reward: f64,
        _next_state: TrafficState,
    ) {
    }
}

// ── FixedCycle ────────────────────────────────────────────────────────────────

/// Traditional fixed-timing signal: cycles through the action list in order,
/// ignoring the observed state.
pub struct FixedCycle {
    actions: Vec<Action>,
    next: usize,
}

impl FixedCycle {
    pub fn new(actions: Vec<Action>) -> Self {
        FixedCycle { actions, next: 0 }
    }
}

impl Controller for FixedCycle {
    fn actions(&self) -> &[Action] {
        &self.actions
    }

    fn choose(&mut self, _state: TrafficState, _rng: &mut SimRng) -> usize {
        let chosen = self.next;
        self.next = (self.next + 1) % self.actions.len();
        chosen
    }
}

// ── RandomPolicy ──────────────────────────────────────────────────────────────

/// Uniform-random policy — a learner that only ever explores.
pub struct RandomPolicy {
    actions: Vec<Action>,
}

impl RandomPolicy {
    pub fn new(actions: Vec<Action>) -> Self {
        RandomPolicy { actions }
    }
}

impl Controller for RandomPolicy {
    fn actions(&self) -> &[Action] {
        &self.actions
    }

    fn choose(&mut self, _state: TrafficState, rng: &mut SimRng) -> usize {
        rng.gen_range(0..self.actions.len())
    }
}
