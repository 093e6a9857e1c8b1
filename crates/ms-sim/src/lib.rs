//! `ms-sim` — world and step loop for the modeshift simulator.
//!
//! # Two-phase step
//!
//! ```text
//! for each step:
//!   ① Clock    — advance; odd steps are rush hour.
//!   ② Decide   — for every agent: draw a destination, apply the tax rule,
//!                evaluate transit then PFH, pick a mode
//!                (parallel with the `parallel` feature).
//!   ③ Apply    — in a freshly shuffled activation order:
//!                  confidences, tax flag, day pass  → agent store
//!                  time and money of chosen mode    → subtracted from budgets
//!                  destination                      → new position
//!   ④ Collect  — Aggregator records modal share and budgets.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the decision phase on Rayon's thread pool.        |
//! | `serde`    | Serialize/deserialize for `ModalShare`, snapshots.     |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ms_core::WorldConfig;
//! use ms_sim::{NoopObserver, World};
//!
//! let mut world = World::new(WorldConfig::new(100, 60, 48, 2.0, 1))?;
//! world.run(4, &mut NoopObserver);
//! for share in world.history() {
//!     println!("{}: {:.1}% transit", share.step, share.transit_percent);
//! }
//! ```

pub mod aggregator;
pub mod builder;
pub mod error;
pub mod observer;
pub mod world;


pub use aggregator::{Aggregator, BudgetSnapshot, ModalShare};
pub use builder::WorldBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, StopSignal, WorldObserver};
pub use world::World;
