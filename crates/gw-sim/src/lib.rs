//! `gw-sim` — decision-loop orchestrator for the greenwave simulation.
//!
//! # The decision step
//!
//! ```text
//! while t < max_t:
//!   ① Observe  — sensor discretizes the four queue lengths
//!   ② Act      — controller picks (phase, green duration) by index
//!   ③ Arrivals — Poisson samples at fixed dt micro-steps across the phase
//!   ④ Serve    — longest-queue-first within the green pair,
//!                capacity floor(service_rate · duration)
//!   ⑤ Reward   — 10·departed − 2·(total queued after service)
//!   ⑥ Learn    — TD update fed back when training is on
//!   ⑦ Advance  — t += duration (the final step may run past max_t)
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use gw_control::QLearning;
//! use gw_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(config).build()?;
//! let mut agent = QLearning::new(actions, 0.1, 0.9, 0.3);
//! for _ in 0..20 {
//!     sim.reset();
//!     sim.run(&mut agent, 120.0, true, &mut NoopObserver);
//! }
//! ```

pub mod builder;
pub mod csv;
pub mod error;
pub mod observer;
pub mod report;
pub mod sim;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::SimBuilder;
pub use csv::CsvStepLogger;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use report::{RunSummary, StepReport};
pub use sim::Sim;
