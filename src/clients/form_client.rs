use tokio::sync::mpsc;
use tracing::instrument;

use crate::form::{FormError, FormField, FormView, SubmitOutcome};
use crate::messages::FormRequest;

/// Client for the add-user form service.
#[derive(Clone)]
pub struct FormClient {
    sender: mpsc::Sender<FormRequest>,
}

impl FormClient {
    pub fn new(sender: mpsc::Sender<FormRequest>) -> Self {
        Self { sender }
    }

    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), FormError> {
        self.sender
            .send(FormRequest::Shutdown)
            .await
            .map_err(|_| FormError::ActorCommunicationError("Actor closed".to_string()))
    }
}

client_method!(FormClient => fn set_field(field: FormField, value: String) -> () as FormRequest::SetField, Error = FormError);
client_method!(FormClient => fn submit() -> SubmitOutcome as FormRequest::Submit, Error = FormError);
client_method!(FormClient => fn snapshot() -> FormView as FormRequest::Snapshot, Error = FormError);
