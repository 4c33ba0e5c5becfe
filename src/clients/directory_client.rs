use tokio::sync::mpsc;
use tracing::instrument;

use crate::directory::{DirectoryError, DirectoryView};
use crate::domain::UserId;
use crate::messages::DirectoryRequest;

/// Client for the directory service.
#[derive(Clone)]
pub struct DirectoryClient {
    sender: mpsc::Sender<DirectoryRequest>,
}

impl DirectoryClient {
    pub fn new(sender: mpsc::Sender<DirectoryRequest>) -> Self {
        Self { sender }
    }

    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), DirectoryError> {
        self.sender
            .send(DirectoryRequest::Shutdown)
            .await
            .map_err(|_| DirectoryError::ActorCommunicationError("Actor closed".to_string()))
    }
}

client_method!(DirectoryClient => fn set_search(term: String) -> () as DirectoryRequest::SetSearch, Error = DirectoryError);
client_method!(DirectoryClient => fn view() -> DirectoryView as DirectoryRequest::View, Error = DirectoryError);
client_method!(DirectoryClient => fn delete(id: UserId) -> bool as DirectoryRequest::Delete, Error = DirectoryError);
client_method!(DirectoryClient => fn wait_until_settled() -> () as DirectoryRequest::WaitUntilSettled, Error = DirectoryError);
