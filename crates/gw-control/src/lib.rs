//! `gw-control` — congestion sensing and signal-timing policies.
//!
//! # Crate layout
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`state`]     | `Sensor` discretizer, `TrafficState` observation      |
//! | [`policy`]    | `Controller` trait, `FixedCycle`, `RandomPolicy`      |
//! | [`qlearning`] | `QLearning` — tabular ε-greedy TD agent               |
//!
//! # Design notes
//!
//! The decision loop in `gw-sim` is generic over [`Controller`], so every
//! policy — the traditional fixed cycle, the uniform-random baseline, and
//! the learned agent — drives the identical simulation.  Policies receive
//! the loop's `SimRng` by `&mut` at each `choose` call; none owns randomness
//! of its own, which keeps a seeded run bit-identical regardless of which
//! policy is plugged in.

pub mod policy;
pub mod qlearning;
pub mod state;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use policy::{Controller, FixedCycle, RandomPolicy};
pub use qlearning::QLearning;
pub use state::{Sensor, TrafficState};
