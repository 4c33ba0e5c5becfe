//! The user directory: one-shot remote fetch, merge with local users, search
//! filtering and deletion.

pub mod display;
pub mod error;
pub mod service;

pub use display::*;
pub use error::*;
pub use service::*;
