use thiserror::Error;

use crate::actor_framework::FrameworkError;

/// Errors that can occur while talking to the local user store.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LocalUsersError {
    #[error("Local user rejected: {0}")]
    Rejected(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for LocalUsersError {
    fn from(error: FrameworkError) -> Self {
        match error {
            FrameworkError::Rejected(reason) => Self::Rejected(reason),
            other => Self::ActorCommunicationError(other.to_string()),
        }
    }
}
