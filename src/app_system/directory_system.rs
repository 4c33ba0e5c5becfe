use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{error, info, instrument};

use super::{AppConfig, SystemError};
use crate::clients::{DirectoryClient, FormClient, LocalUsersClient};
use crate::directory::DirectoryService;
use crate::fetch::UserSource;
use crate::form::FormService;
use crate::local_users::local_user_store;

/// The running application: every service plus the handles to reach them.
///
/// The local user store is the single owner of locally added users. Its client
/// is handed to the form as the add-user callback and to the directory as read
/// access plus mutator.
pub struct DirectorySystem {
    pub form_client: FormClient,
    pub directory_client: DirectoryClient,
    pub local_users_client: LocalUsersClient,
    handles: Vec<(&'static str, JoinHandle<()>)>,
    store_handle: JoinHandle<()>,
}

impl DirectorySystem {
    /// Starts every service. The directory begins its one fetch immediately.
    #[instrument(name = "directory_system", skip(config, source), fields(endpoint = %config.endpoint))]
    pub fn start(config: &AppConfig, source: Arc<dyn UserSource>) -> Self {
        info!("Starting user directory");
        let capacity = config.channel_capacity;

        let (store, local_users_client) = local_user_store(capacity);
        let store_handle = tokio::spawn(store.run());

        let (directory, directory_client) =
            DirectoryService::new(capacity, source, local_users_client.clone());
        let directory_handle = tokio::spawn(directory.run());

        let (form, form_client) = FormService::new(capacity, local_users_client.clone());
        let form_handle = tokio::spawn(form.run());

        Self {
            form_client,
            directory_client,
            local_users_client,
            handles: vec![("form", form_handle), ("directory", directory_handle)],
            store_handle,
        }
    }

    /// Stops the form and directory, waits for them, then stops the store.
    /// Clients cloned from this system do not keep any task alive.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down user directory");

        // Already-stopped services are fine here.
        let _ = self.form_client.shutdown().await;
        let _ = self.directory_client.shutdown().await;

        for (name, handle) in self.handles {
            await_service(name, handle).await?;
        }

        let _ = self.local_users_client.shutdown().await;
        await_service("local_users", self.store_handle).await?;

        info!("User directory shutdown complete");
        Ok(())
    }
}

async fn await_service(name: &'static str, handle: JoinHandle<()>) -> Result<(), SystemError> {
    handle.await.map_err(|e| {
        error!(service = name, error = %e, "Service task failed");
        SystemError::TaskFailed(format!("{name}: {e}"))
    })
}
