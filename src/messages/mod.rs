use tokio::sync::oneshot;

use crate::directory::{DirectoryError, DirectoryView};
use crate::domain::UserId;
use crate::form::{FormError, FormField, FormView, SubmitOutcome};

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Typed message enums for actor communication. Each variant includes parameters
/// and a oneshot channel for responses.

#[derive(Debug)]
pub enum DirectoryRequest {
    SetSearch {
        term: String,
        respond_to: ServiceResponse<(), DirectoryError>,
    },
    View {
        respond_to: ServiceResponse<DirectoryView, DirectoryError>,
    },
    Delete {
        id: UserId,
        respond_to: ServiceResponse<bool, DirectoryError>,
    },
    WaitUntilSettled {
        respond_to: ServiceResponse<(), DirectoryError>,
    },
    Shutdown,
}

#[derive(Debug)]
pub enum FormRequest {
    SetField {
        field: FormField,
        value: String,
        respond_to: ServiceResponse<(), FormError>,
    },
    Submit {
        respond_to: ServiceResponse<SubmitOutcome, FormError>,
    },
    Snapshot {
        respond_to: ServiceResponse<FormView, FormError>,
    },
    /// Sent by the banner timer back to its own form service.
    HideBanner {
        generation: u64,
    },
    Shutdown,
}
