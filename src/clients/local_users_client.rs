use tracing::{debug, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::{LocalUser, NewUser, UserId};
use crate::local_users::LocalUsersError;

/// Client for the local user store.
///
/// The form holds one as its add-user callback; the directory holds one as
/// read access plus mutator over the local list.
#[derive(Clone)]
pub struct LocalUsersClient {
    inner: ResourceClient<LocalUser>,
}

impl LocalUsersClient {
    pub fn new(inner: ResourceClient<LocalUser>) -> Self {
        Self { inner }
    }

    /// Stops the store. Other handles see a communication error afterwards.
    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), LocalUsersError> {
        Ok(self.inner.shutdown().await?)
    }

    #[instrument(fields(user_name = %user.name), skip(self, user))]
    pub async fn add_user(&self, user: NewUser) -> Result<UserId, LocalUsersError> {
        debug!("Sending request");
        Ok(self.inner.create(user).await?)
    }

    #[instrument(skip(self))]
    pub async fn list_users(&self) -> Result<Vec<LocalUser>, LocalUsersError> {
        debug!("Sending request");
        Ok(self.inner.list().await?)
    }

    /// Keeps only the users the predicate accepts. Returns how many were removed.
    #[instrument(skip(self, keep))]
    pub async fn retain_users(
        &self,
        keep: impl Fn(&LocalUser) -> bool + Send + Sync + 'static,
    ) -> Result<usize, LocalUsersError> {
        debug!("Sending request");
        Ok(self.inner.retain(keep).await?)
    }

    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: UserId) -> Result<bool, LocalUsersError> {
        let removed = self.retain_users(move |user| user.id != id).await?;
        Ok(removed > 0)
    }
}
