use thiserror::Error;

use crate::local_users::LocalUsersError;

/// Errors that can occur while driving the form service.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Could not add user: {0}")]
    AddUser(#[from] LocalUsersError),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
