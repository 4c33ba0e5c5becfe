use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, error, info, instrument};

use super::{display_list, DirectoryError, DirectoryView};
use crate::clients::{DirectoryClient, LocalUsersClient};
use crate::domain::{RemoteUser, UserId};
use crate::fetch::{enrich_users, FetchError, UserSource, FETCH_FAILED_MESSAGE};
use crate::messages::{DirectoryRequest, ServiceResponse};

type FetchOutcome = Result<Vec<RemoteUser>, FetchError>;

/// Directory actor.
///
/// Fetches the remote listing exactly once when it starts, keeps the enriched
/// result, and merges it with the local user store on every view. The mailbox
/// stays live while the fetch is outstanding.
pub struct DirectoryService {
    receiver: mpsc::Receiver<DirectoryRequest>,
    source: Arc<dyn UserSource>,
    local_users: LocalUsersClient,
    remote_users: Vec<RemoteUser>,
    loading: bool,
    error: Option<String>,
    search_term: String,
    settle_waiters: Vec<ServiceResponse<(), DirectoryError>>,
}

impl DirectoryService {
    pub fn new(
        buffer_size: usize,
        source: Arc<dyn UserSource>,
        local_users: LocalUsersClient,
    ) -> (Self, DirectoryClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            source,
            local_users,
            remote_users: Vec::new(),
            loading: true,
            error: None,
            search_term: String::new(),
            settle_waiters: Vec::new(),
        };
        (service, DirectoryClient::new(sender))
    }

    #[instrument(name = "directory_service", skip(self))]
    pub async fn run(mut self) {
        info!("DirectoryService starting");

        let mut fetch = self.spawn_fetch();

        loop {
            tokio::select! {
                joined = &mut fetch, if self.loading => {
                    self.handle_fetch_settled(joined);
                }
                msg = self.receiver.recv() => {
                    let Some(msg) = msg else { break };
                    match msg {
                        DirectoryRequest::SetSearch { term, respond_to } => {
                            self.handle_set_search(term, respond_to);
                        }
                        DirectoryRequest::View { respond_to } => {
                            self.handle_view(respond_to).await;
                        }
                        DirectoryRequest::Delete { id, respond_to } => {
                            self.handle_delete(id, respond_to).await;
                        }
                        DirectoryRequest::WaitUntilSettled { respond_to } => {
                            if self.loading {
                                self.settle_waiters.push(respond_to);
                            } else {
                                let _ = respond_to.send(Ok(()));
                            }
                        }
                        DirectoryRequest::Shutdown => {
                            info!("DirectoryService shutting down");
                            break;
                        }
                    }
                }
            }
        }

        if self.loading {
            fetch.abort();
            debug!("Outstanding fetch discarded");
        }
        info!("DirectoryService stopped");
    }

    fn spawn_fetch(&self) -> JoinHandle<FetchOutcome> {
        let source = Arc::clone(&self.source);
        tokio::spawn(async move { source.fetch_users().await.map(enrich_users) })
    }

    fn handle_fetch_settled(&mut self, joined: Result<FetchOutcome, JoinError>) {
        let outcome = joined
            .unwrap_or_else(|e| Err(FetchError::Transport(format!("fetch task failed: {e}"))));
        match outcome {
            Ok(users) => {
                info!(count = users.len(), "Users fetched");
                self.remote_users = users;
                self.error = None;
            }
            Err(e) => {
                error!(error = %e, "Error fetching users");
                self.error = Some(FETCH_FAILED_MESSAGE.to_string());
            }
        }
        self.loading = false;

        for waiter in self.settle_waiters.drain(..) {
            let _ = waiter.send(Ok(()));
        }
    }

    #[instrument(skip(self, respond_to))]
    fn handle_set_search(&mut self, term: String, respond_to: ServiceResponse<(), DirectoryError>) {
        self.search_term = term;
        let _ = respond_to.send(Ok(()));
    }

    #[instrument(skip(self, respond_to))]
    async fn handle_view(&self, respond_to: ServiceResponse<DirectoryView, DirectoryError>) {
        let result = match self.local_users.list_users().await {
            Ok(local) => Ok(DirectoryView {
                loading: self.loading,
                error: self.error.clone(),
                search_term: self.search_term.clone(),
                entries: display_list(&self.remote_users, &local, &self.search_term),
            }),
            Err(e) => {
                error!(error = %e, "Reading local users failed");
                Err(DirectoryError::from(e))
            }
        };
        let _ = respond_to.send(result);
    }

    /// Removes the record from whichever list owns its id; the other list is untouched.
    #[instrument(fields(user_id = %id), skip(self, id, respond_to))]
    async fn handle_delete(&mut self, id: UserId, respond_to: ServiceResponse<bool, DirectoryError>) {
        let result = match id {
            UserId::Remote(_) => {
                let before = self.remote_users.len();
                self.remote_users.retain(|user| user.id != id);
                Ok(self.remote_users.len() != before)
            }
            UserId::Local(_) => self.local_users.delete_user(id).await.map_err(DirectoryError::from),
        };

        match &result {
            Ok(true) => info!("User deleted"),
            Ok(false) => debug!("No user with this id"),
            Err(e) => error!(error = %e, "Deleting user failed"),
        }
        let _ = respond_to.send(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DirectoryEntry, LocalUser};
    use crate::fetch::RawUser;
    use crate::mock_framework::{create_mock_client, expect_list, expect_retain};
    use async_trait::async_trait;

    struct FixedSource(Vec<RawUser>);

    #[async_trait]
    impl UserSource for FixedSource {
        async fn fetch_users(&self) -> Result<Vec<RawUser>, FetchError> {
            Ok(self.0.clone())
        }
    }

    fn raw(id: u64, name: &str) -> RawUser {
        RawUser {
            id,
            name: name.to_string(),
            email: String::new(),
            phone: String::new(),
            company: None,
            address: None,
        }
    }

    fn local(id: u64, name: &str) -> LocalUser {
        LocalUser {
            id: UserId::Local(id),
            name: name.to_string(),
            job: "Analyst".to_string(),
            country: "UK".to_string(),
            age: 36,
            description: "x".to_string(),
        }
    }

    #[tokio::test]
    async fn test_view_merges_with_current_local_list() {
        let (inner, mut store) = create_mock_client(8);
        let source = Arc::new(FixedSource(vec![raw(1, "Leanne Graham")]));
        let (service, directory) = DirectoryService::new(8, source, LocalUsersClient::new(inner));
        tokio::spawn(service.run());
        directory.wait_until_settled().await.unwrap();

        let view = tokio::spawn({
            let directory = directory.clone();
            async move { directory.view().await }
        });
        let responder = expect_list(&mut store).await.expect("Expected List request");
        responder.send(Ok(vec![local(1, "Ada Lovelace")])).unwrap();

        let view = view.await.unwrap().unwrap();
        assert!(!view.loading);
        assert_eq!(view.error, None);
        let names: Vec<_> = view.entries.iter().map(DirectoryEntry::name).collect();
        assert_eq!(names, ["Leanne Graham", "Ada Lovelace"]);
    }

    #[tokio::test]
    async fn test_local_delete_goes_through_store_mutator() {
        let (inner, mut store) = create_mock_client(8);
        let source = Arc::new(FixedSource(vec![raw(1, "Leanne Graham")]));
        let (service, directory) = DirectoryService::new(8, source, LocalUsersClient::new(inner));
        tokio::spawn(service.run());
        directory.wait_until_settled().await.unwrap();

        let delete = tokio::spawn({
            let directory = directory.clone();
            async move { directory.delete(UserId::Local(2)).await }
        });
        let (keep, responder) = expect_retain(&mut store).await.expect("Expected Retain request");
        assert!(keep(&local(1, "Ada")));
        assert!(!keep(&local(2, "Grace")));
        responder.send(Ok(1)).unwrap();

        assert_eq!(delete.await.unwrap(), Ok(true));
    }

    #[tokio::test]
    async fn test_remote_delete_never_touches_store() {
        let (inner, mut store) = create_mock_client::<LocalUser>(8);
        let source = Arc::new(FixedSource(vec![raw(1, "Leanne Graham"), raw(2, "Ervin Howell")]));
        let (service, directory) = DirectoryService::new(8, source, LocalUsersClient::new(inner));
        tokio::spawn(service.run());
        directory.wait_until_settled().await.unwrap();

        assert_eq!(directory.delete(UserId::Remote(1)).await, Ok(true));
        assert_eq!(directory.delete(UserId::Remote(1)).await, Ok(false));
        assert!(store.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_store_failure_surfaces_on_view() {
        let (inner, store) = create_mock_client::<LocalUser>(8);
        drop(store);
        let source = Arc::new(FixedSource(Vec::new()));
        let (service, directory) = DirectoryService::new(8, source, LocalUsersClient::new(inner));
        tokio::spawn(service.run());

        let result = directory.view().await;
        assert!(matches!(result, Err(DirectoryError::LocalUsers(_))));
    }
}
