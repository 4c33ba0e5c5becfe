//! System orchestration, configuration, startup, and shutdown logic.

pub mod config;
pub mod directory_system;
pub mod error;
pub mod tracing;

pub use self::config::*;
pub use self::directory_system::*;
pub use self::error::*;
pub use self::tracing::*;
