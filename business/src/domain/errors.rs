/// Local storage errors for the domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// A write could not be committed.
    #[error("repository.persistence")]
    Persistence,
    /// A stored row no longer maps to a valid domain value.
    #[error("repository.corrupted")]
    Corrupted,
    #[error("repository.database_error")]
    DatabaseError,
}

/// Failure talking to the remote storefront API.
///
/// Screens never retry on these; they fall back to sample data or surface an alert.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    #[error("network.unreachable")]
    Unreachable,
    #[error("network.timeout")]
    Timeout,
    #[error("network.unexpected_status")]
    UnexpectedStatus(u16),
    #[error("network.invalid_payload")]
    InvalidPayload,
}

/// A form was rejected before anything was submitted.
///
/// `MissingField` carries the human-readable label of the first empty field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("validation.missing_field")]
    MissingField(&'static str),
    #[error("validation.password_mismatch")]
    PasswordMismatch,
    #[error("validation.password_too_short")]
    PasswordTooShort,
    #[error("validation.invalid_phone")]
    InvalidPhone,
    #[error("validation.unknown_emirate")]
    UnknownEmirate,
}

/// Returns `Err(MissingField(label))` when `value` is empty or only whitespace.
pub fn require(value: &str, label: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(label));
    }
    Ok(())
}

/// Like [`require`] but only rejects an empty value; surrounding whitespace is significant.
pub fn require_present(value: &str, label: &'static str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::MissingField(label));
    }
    Ok(())
}
