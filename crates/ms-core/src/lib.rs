//! `ms-core` — foundational types for the `modeshift` mode-choice simulator.
//!
//! This crate is a dependency of every other `ms-*` crate.  It intentionally
//! has no `ms-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`grid`]        | `Cell`, `Grid`, straight-line trip distance           |
//! | [`time`]        | `Step`, `SimClock`, `TRIPS_PER_DAY`                   |
//! | [`rng`]         | `AgentRng` (per-agent), `SimRng` (global)             |
//! | [`mode`]        | `TravelMode` enum (`Transit`, `Pfh`)                  |
//! | [`config`]      | `WorldConfig`, `ScoreWeights`, `parse_tax_rate`       |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod grid;
pub mod ids;
pub mod mode;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{ScoreWeights, WorldConfig, parse_tax_rate};
pub use error::{CoreError, CoreResult};
pub use grid::{Cell, Grid};
pub use ids::AgentId;
pub use mode::TravelMode;
pub use rng::{AgentRng, SimRng};
pub use time::{SimClock, Step, TRIPS_PER_DAY};
