//! `ms-agent` — Structure-of-Arrays commuter storage for `modeshift`.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`store`]       | `AgentStore` (SoA arrays), `AgentRngs`, `AgentSnapshot`   |
//! | [`builder`]     | `AgentStoreBuilder` (seeded initial population)           |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                     |
//! |------------|------------------------------------------------------------|
//! | `serde`    | Derives `Serialize`/`Deserialize` on `AgentSnapshot`.      |

pub mod builder;
pub mod store;

#[cfg(test)]
mod tests;

pub use builder::AgentStoreBuilder;
pub use store::{AgentRngs, AgentSnapshot, AgentStore};
