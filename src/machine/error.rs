//! Error types for action processing.

use thiserror::Error;

use crate::model::Resource;

/// Error returned by [`Machine::process`](super::Machine::process) and
/// [`Machine::apply`](super::Machine::apply).
///
/// Both kinds are reported to the user and leave the machine unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MachineError {
    #[error("Sorry, not enough {0}!")]
    InsufficientResource(Resource),

    #[error("Invalid command. Try again.")]
    InvalidAction(String),
}
