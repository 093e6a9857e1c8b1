//! Core agent storage: `AgentStore` (SoA data) and `AgentRngs` (per-agent RNG).
//!
//! # Why two structs?
//!
//! The decision phase of a step needs `&mut AgentRngs` (exclusive access to
//! each agent's RNG) and `&AgentStore` (shared read access to every agent's
//! state) at the same time.  Keeping RNGs in a separate struct lets the
//! borrow checker see the two borrows as disjoint:
//!
//! ```ignore
//! // ms-sim decision phase (simplified):
//! let store: &AgentStore = &world.agents;
//! let decisions = world.rngs.inner
//!     .par_iter_mut()
//!     .enumerate()
//!     .map(|(i, rng)| {
//!         let trip = Trip::draw(store.position[i], &grid, &zone, rng);
//!         model.decide(AgentId(i as u32), trip, &ctx, rng)
//!     })
//!     .collect::<Vec<_>>();
//! ```

use ms_core::{AgentId, AgentRng, Cell, TravelMode};

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG state, separated from [`AgentStore`] to enable
/// simultaneous `&mut AgentRngs` + `&AgentStore` borrows.
pub struct AgentRngs {
    pub inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Allocate and seed `count` per-agent RNGs from `global_seed`.
    pub(crate) fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentRng::new(global_seed, AgentId(i)))
            .collect();
        Self { inner }
    }

    /// Mutable reference to one agent's RNG.
    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentRng {
        &mut self.inner[agent.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── AgentSnapshot ─────────────────────────────────────────────────────────────

/// A read-only copy of one agent's reportable state.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentSnapshot {
    pub id:              AgentId,
    pub position:        Cell,
    /// Remaining time budget in minutes.  May be negative.
    pub time_remaining:  f64,
    /// Remaining money budget in dollars.  May be negative.
    pub money_remaining: f64,
    pub last_choice:     Option<TravelMode>,
    pub day_pass_active: bool,
}

// ── AgentStore ────────────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for all commuter state.
///
/// Every `Vec` field has exactly `count` elements; the `AgentId` value is the
/// index into all of them:
///
/// ```ignore
/// let money = store.money_budget[agent.index()];
/// ```
///
/// Budgets and confidences are plain running totals: they are never clamped
/// and may go negative.
pub struct AgentStore {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    /// Current grid cell.
    pub position: Vec<Cell>,

    /// Remaining time budget (minutes).
    pub time_budget: Vec<f64>,

    /// Remaining money budget (dollars).
    pub money_budget: Vec<f64>,

    /// Transit confidence from the most recent trip evaluation.  Reset to
    /// 1.0 at the start of every trip.
    pub transit_confidence: Vec<f64>,

    /// PFH confidence from the most recent trip evaluation.
    pub pfh_confidence: Vec<f64>,

    /// Sensitivity to trip inconvenience in `[0, 1]`.  Fixed for life.
    pub inconvenience_weight: Vec<f64>,

    /// Set once the agent pays the upper transit fare tier; never cleared.
    pub day_pass_active: Vec<bool>,

    /// Whether the most recent trip was tax-applicable.  Recomputed per trip.
    pub in_tax_zone: Vec<bool>,

    /// Mode chosen for the most recent trip; `None` before the first.
    pub last_choice: Vec<Option<TravelMode>>,
}

impl AgentStore {
    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    /// Number of agents whose most recent trip used `mode`.
    pub fn count_choice(&self, mode: TravelMode) -> usize {
        self.last_choice.iter().filter(|&&m| m == Some(mode)).count()
    }

    /// Snapshot of one agent, or `None` if `agent` is out of range.
    pub fn snapshot(&self, agent: AgentId) -> Option<AgentSnapshot> {
        let i = agent.index();
        (i < self.count).then(|| AgentSnapshot {
            id:              agent,
            position:        self.position[i],
            time_remaining:  self.time_budget[i],
            money_remaining: self.money_budget[i],
            last_choice:     self.last_choice[i],
            day_pass_active: self.day_pass_active[i],
        })
    }

    /// Snapshots of every agent in ascending id order.
    pub fn snapshots(&self) -> Vec<AgentSnapshot> {
        self.agent_ids().filter_map(|id| self.snapshot(id)).collect()
    }

    // ── Package-private constructor used by AgentStoreBuilder ─────────────

    pub(crate) fn with_capacity(count: usize) -> Self {
        Self {
            count:                0,
            position:             Vec::with_capacity(count),
            time_budget:          Vec::with_capacity(count),
            money_budget:         Vec::with_capacity(count),
            transit_confidence:   Vec::with_capacity(count),
            pfh_confidence:       Vec::with_capacity(count),
            inconvenience_weight: Vec::with_capacity(count),
            day_pass_active:      Vec::with_capacity(count),
            in_tax_zone:          Vec::with_capacity(count),
            last_choice:          Vec::with_capacity(count),
        }
    }
}
