use business::domain::errors::{NetworkError, ValidationError};

use crate::screens::alert::{Alert, IntoAlert};

impl IntoAlert for NetworkError {
    fn into_alert(self) -> Alert {
        let message = match self {
            NetworkError::Timeout => "The server took too long to respond. Please try again.",
            NetworkError::Unreachable => {
                "Unable to reach the store. Please check your connection and try again."
            }
            NetworkError::UnexpectedStatus(_) | NetworkError::InvalidPayload => {
                "Something went wrong. Please try again."
            }
        };
        Alert::new("Error", message)
    }
}

impl IntoAlert for ValidationError {
    fn into_alert(self) -> Alert {
        let message = match self {
            ValidationError::MissingField(label) => format!("Please fill in {}", label),
            ValidationError::PasswordMismatch => "Passwords do not match".to_string(),
            ValidationError::PasswordTooShort => {
                "Password must be at least 6 characters long".to_string()
            }
            ValidationError::InvalidPhone => "Please enter a valid phone number".to_string(),
            ValidationError::UnknownEmirate => "Please select a valid emirate".to_string(),
        };
        Alert::new("Validation Error", message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_name_missing_field() {
        let alert = ValidationError::MissingField("full name").into_alert();

        assert_eq!(alert.title, "Validation Error");
        assert_eq!(alert.message, "Please fill in full name");
    }

    #[test]
    fn should_map_timeout_to_retry_hint() {
        let alert = NetworkError::Timeout.into_alert();

        assert_eq!(alert.title, "Error");
        assert!(alert.message.contains("try again"));
    }
}
