use thiserror::Error;

use crate::local_users::LocalUsersError;

/// Errors that can occur while driving the directory service.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("Local user store error: {0}")]
    LocalUsers(#[from] LocalUsersError),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
