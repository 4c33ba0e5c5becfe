//! The add-user form: raw field state, validation, and the success banner.

pub mod error;
pub mod service;
pub mod validation;

pub use error::*;
pub use service::*;
pub use validation::*;

use crate::domain::UserId;

/// Everything the form currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormView {
    pub fields: FormFields,
    pub errors: FieldErrors,
    pub success_visible: bool,
}

/// Result of a submit attempt. Validation failures are data, not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted(UserId),
    Rejected(FieldErrors),
}
