use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, instrument};

use super::{validate, FieldErrors, FormError, FormField, FormFields, FormView, SubmitOutcome};
use crate::clients::{FormClient, LocalUsersClient};
use crate::messages::{FormRequest, ServiceResponse};

/// How long the success banner stays up after an accepted submission.
pub const SUCCESS_BANNER_DURATION: Duration = Duration::from_secs(3);

/// Add-user form actor.
///
/// Owns the raw field values, the error map and the success banner. Accepted
/// submissions go to the local user store through `on_add_user`.
pub struct FormService {
    receiver: mpsc::Receiver<FormRequest>,
    // Weak so the banner timer never keeps the service alive on its own.
    sender: mpsc::WeakSender<FormRequest>,
    on_add_user: LocalUsersClient,
    fields: FormFields,
    errors: FieldErrors,
    banner_visible: bool,
    banner_generation: u64,
    banner_timer: Option<JoinHandle<()>>,
}

impl FormService {
    pub fn new(buffer_size: usize, on_add_user: LocalUsersClient) -> (Self, FormClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            sender: sender.downgrade(),
            on_add_user,
            fields: FormFields::default(),
            errors: FieldErrors::new(),
            banner_visible: false,
            banner_generation: 0,
            banner_timer: None,
        };
        (service, FormClient::new(sender))
    }

    #[instrument(name = "form_service", skip(self))]
    pub async fn run(mut self) {
        info!("FormService starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                FormRequest::SetField { field, value, respond_to } => {
                    self.handle_set_field(field, value, respond_to);
                }
                FormRequest::Submit { respond_to } => {
                    self.handle_submit(respond_to).await;
                }
                FormRequest::Snapshot { respond_to } => {
                    let _ = respond_to.send(Ok(self.view()));
                }
                FormRequest::HideBanner { generation } => {
                    self.handle_hide_banner(generation);
                }
                FormRequest::Shutdown => {
                    info!("FormService shutting down");
                    break;
                }
            }
        }

        if let Some(timer) = self.banner_timer.take() {
            timer.abort();
        }
        info!("FormService stopped");
    }

    fn view(&self) -> FormView {
        FormView {
            fields: self.fields.clone(),
            errors: self.errors.clone(),
            success_visible: self.banner_visible,
        }
    }

    /// Stores the value and clears that field's error, without revalidating.
    #[instrument(fields(form_field = %field), skip(self, field, value, respond_to))]
    fn handle_set_field(
        &mut self,
        field: FormField,
        value: String,
        respond_to: ServiceResponse<(), FormError>,
    ) {
        self.fields.set(field, value);
        self.errors.remove(&field);
        let _ = respond_to.send(Ok(()));
    }

    #[instrument(skip(self, respond_to))]
    async fn handle_submit(&mut self, respond_to: ServiceResponse<SubmitOutcome, FormError>) {
        let user = match validate(&self.fields) {
            Ok(user) => user,
            Err(errors) => {
                self.errors = errors.clone();
                let _ = respond_to.send(Ok(SubmitOutcome::Rejected(errors)));
                return;
            }
        };

        match self.on_add_user.add_user(user).await {
            Ok(id) => {
                info!(user_id = %id, "User added");
                self.fields = FormFields::default();
                self.errors.clear();
                self.show_banner();
                let _ = respond_to.send(Ok(SubmitOutcome::Accepted(id)));
            }
            Err(e) => {
                error!(error = %e, "Adding user failed");
                let _ = respond_to.send(Err(FormError::AddUser(e)));
            }
        }
    }

    /// Shows the banner and (re)starts its countdown.
    fn show_banner(&mut self) {
        if let Some(timer) = self.banner_timer.take() {
            timer.abort();
        }
        self.banner_generation += 1;
        self.banner_visible = true;

        let generation = self.banner_generation;
        let sender = self.sender.clone();
        self.banner_timer = Some(tokio::spawn(async move {
            tokio::time::sleep(SUCCESS_BANNER_DURATION).await;
            if let Some(sender) = sender.upgrade() {
                let _ = sender.send(FormRequest::HideBanner { generation }).await;
            }
        }));
    }

    fn handle_hide_banner(&mut self, generation: u64) {
        if generation != self.banner_generation {
            debug!(generation, current = self.banner_generation, "Stale banner timer ignored");
            return;
        }
        self.banner_visible = false;
        self.banner_timer = None;
    }
}
