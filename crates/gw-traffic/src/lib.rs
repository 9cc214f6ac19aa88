//! `gw-traffic` — the physical half of the simulation: vehicles, lanes, the
//! intersection's green-phase service model, and the stochastic arrival
//! process.
//!
//! # Crate layout
//!
//! | Module           | Contents                                            |
//! |------------------|-----------------------------------------------------|
//! | [`vehicle`]      | `Vehicle` — arrival record with departure stamp     |
//! | [`lane`]         | `Lane` — FIFO queue for one approach                |
//! | [`intersection`] | `Intersection` — four lanes + phase-based service   |
//! | [`arrivals`]     | `TrafficGenerator` — per-direction Poisson sampling |

pub mod arrivals;
pub mod intersection;
pub mod lane;
pub mod vehicle;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use arrivals::TrafficGenerator;
pub use intersection::Intersection;
pub use lane::Lane;
pub use vehicle::Vehicle;
