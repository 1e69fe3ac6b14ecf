use crate::domain::errors::{NetworkError, ValidationError};

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("auth.invalid_credentials")]
    InvalidCredentials,
    #[error("auth.registration_rejected")]
    RegistrationRejected,
    #[error("validation.failed")]
    Validation(#[from] ValidationError),
    #[error("network.failed")]
    Network(#[from] NetworkError),
}
