use crate::domain::errors::{NetworkError, ValidationError};

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("order.not_authenticated")]
    NotAuthenticated,
    #[error("order.empty_cart")]
    EmptyCart,
    #[error("validation.failed")]
    Validation(#[from] ValidationError),
    #[error("network.failed")]
    Network(#[from] NetworkError),
}
