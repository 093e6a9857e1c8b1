//! `ms-behavior` — trip costs, the tax rule, and mode choice.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                         |
//! |----------------|------------------------------------------------------------------|
//! | [`cost`]       | Access delays, travel time, fares, `TripCost`, `TripAggregate`   |
//! | [`tax_zone`]   | `TaxZone` — which trips pay the PFH tax                          |
//! | [`confidence`] | `Confidence` accumulators and their four adjustments             |
//! | [`decision`]   | `Trip`, `TripDecision`                                           |
//! | [`context`]    | `TripContext<'a>` — read-only step snapshot shared by all agents |
//! | [`model`]      | `ModeChoiceModel` trait, `ConfidenceModel`                       |
//! | [`error`]      | `BehaviorError`, `BehaviorResult<T>`                             |
//!
//! # Design notes
//!
//! A step in ms-sim has two phases:
//!
//! 1. **Decision phase** (parallel with ms-sim's `parallel` feature): for
//!    every agent, draw a trip and call `ModeChoiceModel::decide`.  All state
//!    reads go through `&TripContext`; the only mutation is the agent's own
//!    RNG.
//!
//! 2. **Apply phase** (sequential): write each `TripDecision` back into the
//!    agent store: budgets, confidences, tax flag, day pass, choice and
//!    position.

pub mod confidence;
pub mod context;
pub mod cost;
pub mod decision;
pub mod error;
pub mod model;
pub mod tax_zone;

#[cfg(test)]
mod tests;

pub use confidence::Confidence;
pub use context::TripContext;
pub use cost::{TripAggregate, TripCost, TripInputs};
pub use decision::{Trip, TripDecision};
pub use error::{BehaviorError, BehaviorResult};
pub use model::{ConfidenceModel, ModeChoiceModel};
pub use tax_zone::TaxZone;
