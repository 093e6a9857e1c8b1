use ms_behavior::BehaviorError;
use ms_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Behavior(#[from] BehaviorError),
}

impl SimError {
    /// `true` for invalid construction parameters.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            SimError::Core(CoreError::Config(_))
                | SimError::Behavior(BehaviorError::Core(CoreError::Config(_)))
        )
    }
}

pub type SimResult<T> = Result<T, SimError>;
