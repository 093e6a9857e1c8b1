//! World observer trait for progress reporting and data collection.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use ms_agent::AgentStore;
use ms_core::Step;

use crate::ModalShare;

/// Callbacks invoked by [`World::run`][crate::World::run] around every step.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl WorldObserver for ProgressPrinter {
///     fn on_step_end(&mut self, step: Step, share: &ModalShare, _agents: &AgentStore) {
///         println!("{step}: {:.1}% transit", share.transit_percent);
///     }
/// }
/// ```
pub trait WorldObserver {
    /// Called before any agent acts in `step`.
    fn on_step_start(&mut self, _step: Step) {}

    /// Called once every agent has finished `step` and the aggregator has
    /// collected it.  `agents` is the fully updated store.
    fn on_step_end(&mut self, _step: Step, _share: &ModalShare, _agents: &AgentStore) {}

    /// Called once after the last step of a run.
    fn on_sim_end(&mut self, _final_step: Step) {}

    /// Polled between steps; returning `true` ends the run before the next
    /// step starts.  Never consulted mid-step.
    fn should_stop(&self) -> bool {
        false
    }
}

/// A [`WorldObserver`] that does nothing.
pub struct NoopObserver;

impl WorldObserver for NoopObserver {}

/// A [`WorldObserver`] that stops the run once a shared flag is raised, e.g.
/// from a dashboard thread or a Ctrl-C handler.
#[derive(Clone, Debug, Default)]
pub struct StopSignal(Arc<AtomicBool>);

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a stop before the next step.
    pub fn raise(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

impl WorldObserver for StopSignal {
    fn should_stop(&self) -> bool {
        self.is_raised()
    }
}
