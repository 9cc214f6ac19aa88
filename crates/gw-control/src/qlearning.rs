//! Tabular Q-learning signal controller.

use rustc_hash::FxHashMap;

use gw_core::{Action, SimRng};

use crate::{Controller, TrafficState};

/// ε-greedy tabular Q-learning agent over a fixed action list.
///
/// The value table is sparse: unseen `(state, action)` pairs read as 0.0,
/// and an entry materialises only when [`update`][Controller::update] first
/// touches it.  The table is owned by this instance — values persist across
/// episodes for as long as the caller keeps the agent alive, and die with
/// it.  No process-wide state anywhere.
pub struct QLearning {
    actions: Vec<Action>,
    /// Learning rate α.
    pub alpha: f64,
    /// Discount factor γ.
    pub gamma: f64,
    /// Exploration probability ε.  Mutated freely by the caller between
    /// episodes; the annealing schedule is the caller's, not this type's.
    pub epsilon: f64,
    q: FxHashMap<(TrafficState, usize), f64>,
}

impl QLearning {
    pub fn new(actions: Vec<Action>, alpha: f64, gamma: f64, epsilon: f64) -> Self {
        QLearning {
            actions,
            alpha,
            gamma,
            epsilon,
            q: FxHashMap::default(),
        }
    }

    /// Current estimate for `(state, action)`; 0.0 if never updated.
    #[inline]
    pub fn q_value(&self, state: TrafficState, action: usize) -> f64 {
        self.q.get(&(state, action)).copied().unwrap_or(0.0)
    }

    /// Number of `(state, action)` pairs the table has materialised.
    pub fn table_len(&self) -> usize {
        self.q.len()
    }

    /// Greedy argmax over the action set.  Strict `>` keeps the lowest
    /// index on ties.
    fn best_action(&self, state: TrafficState) -> usize {
        let mut best = 0;
        for action in 1..self.actions.len() {
            if self.q_value(state, action) > self.q_value(state, best) {
                best = action;
            }
        }
        best
    }

    /// Bootstrap target: `max_a' Q(state, a')`.
    fn max_q(&self, state: TrafficState) -> f64 {
        (0..self.actions.len())
            .map(|a| self.q_value(state, a))
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

impl Controller for QLearning {
    fn actions(&self) -> &[Action] {
        &self.actions
    }

    fn choose(&mut self, state: TrafficState, rng: &mut SimRng) -> usize {
        if rng.gen_bool(self.epsilon) {
            rng.gen_range(0..self.actions.len())
        } else {
            self.best_action(state)
        }
    }

    /// TD(0) update: `Q(s,a) += α·(r + γ·max_a' Q(s',a') − Q(s,a))`.
    ///
    /// Writes exactly the one `(state, action)` entry; every other entry is
    /// numerically untouched.
    fn update(&mut self, state: TrafficState, action: usize, reward: f64, next_state: TrafficState) {
        let current = self.q_value(state, action);
        let target = reward + self.gamma * self.max_q(next_state);
        self.q
            .insert((state, action), current + self.alpha * (target - current));
    }
}
