use thiserror::Error;

/// Message shown in place of the list when the fetch fails.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch users. Please try again later.";

/// Why a user listing could not be obtained. The whole listing fails together.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("listing service answered with status {0}")]
    Status(u16),
    #[error("invalid user listing payload: {0}")]
    Decode(String),
}
