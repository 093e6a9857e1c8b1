//! Deterministic per-agent and world-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each agent gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (agent_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive agent IDs uniformly across the seed space.
//!
//! Every random draw an agent makes (initial attributes, destinations,
//! access delays) comes from its own stream, and the number of draws per trip
//! does not depend on the mode it ends up choosing.  Two consequences:
//!
//! - The order agents act in within a step never changes any result, so the
//!   per-step loop can run in parallel and still match a sequential run.
//! - Worlds that differ only in tax rate see identical destination and delay
//!   draws, which keeps tax comparisons free of sampling noise.
//!
//! The world-level [`SimRng`] only shuffles the activation order.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::AgentId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG.
///
/// Stored in a parallel `Vec<AgentRng>` alongside the SoA agent arrays.  Each
/// Rayon worker holds exclusive `&mut` access to the streams it processes.
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Seed deterministically from the run's global seed and an agent ID.
    pub fn new(global_seed: u64, agent: AgentId) -> Self {
        let seed = global_seed ^ (agent.0 as u64).wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// World-level RNG, used single-threaded between the decision and apply
/// phases of a step.
pub struct SimRng(SmallRng);

impl SimRng {
    /// Seed from the run's global seed, offset so the stream differs from
    /// agent 0's (`global_seed ^ 0`).
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed.rotate_left(32) ^ MIXING_CONSTANT))
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.0);
    }
}
