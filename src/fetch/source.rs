use async_trait::async_trait;

use super::{FetchError, RawUser};

/// Port for wherever the remote user listing comes from.
#[async_trait]
pub trait UserSource: Send + Sync {
    /// Fetch the complete listing in service order.
    async fn fetch_users(&self) -> Result<Vec<RawUser>, FetchError>;
}
