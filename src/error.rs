//! Error types for the simulator core.

use thiserror::Error;

use crate::simulation::RunState;

/// Errors surfaced by configuration, run-state transitions and export.
///
/// Nothing in here can be produced by [`Simulation::step`](crate::Simulation::step):
/// once a configuration has been validated every step succeeds.
#[derive(Debug, Error)]
pub enum SimError {
    /// Non-numeric or out-of-domain configuration value.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: String, reason: String },

    /// A run-state transition that is not allowed from the current state.
    #[error("cannot {action} while {from:?}")]
    InvalidTransition { from: RunState, action: &'static str },

    /// Export was requested before any step was recorded.
    #[error("no samples recorded yet")]
    EmptySeries,

    #[error("export failed: {0}")]
    Io(#[from] std::io::Error),
}

impl SimError {
    pub(crate) fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        SimError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SimError>;
