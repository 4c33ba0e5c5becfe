//! Remote user listing: the source port, its reqwest adapter, and the mapping
//! from raw records to display-ready [`RemoteUser`](crate::domain::RemoteUser)s.

pub mod dto;
pub mod enrich;
pub mod error;
pub mod http_source;
pub mod source;

pub use dto::*;
pub use enrich::*;
pub use error::*;
pub use http_source::*;
pub use source::*;
