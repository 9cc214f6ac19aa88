//! `gw-core` — foundational types for the greenwave signal simulation.
//!
//! This crate is a dependency of every other `gw-*` crate.  It intentionally
//! has no `gw-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                          |
//! |---------------|---------------------------------------------------|
//! | [`direction`] | `Direction`, `PerDirection<T>`                    |
//! | [`signal`]    | `Phase`, `Action`                                 |
//! | [`config`]    | `SimConfig`                                       |
//! | [`rng`]       | `SimRng` — a run's single seedable random source  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod direction;
pub mod rng;
pub mod signal;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use direction::{Direction, PerDirection};
pub use rng::SimRng;
pub use signal::{Action, Phase};
