pub mod user;
pub mod remote;
pub mod entry;

pub use user::*;
pub use remote::*;
pub use entry::*;
