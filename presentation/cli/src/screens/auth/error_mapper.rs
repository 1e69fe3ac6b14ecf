use business::domain::auth::errors::AuthError;
use business::domain::errors::ValidationError;

use crate::screens::alert::{Alert, IntoAlert};

impl IntoAlert for AuthError {
    fn into_alert(self) -> Alert {
        match self {
            AuthError::InvalidCredentials => {
                Alert::new("Error", "Login failed. Please check your credentials.")
            }
            AuthError::RegistrationRejected => {
                Alert::new("Registration Failed", "Unable to create account. Please try again.")
            }
            AuthError::Validation(ValidationError::MissingField(_)) => {
                Alert::new("Error", "Please fill in all required fields")
            }
            AuthError::Validation(e) => Alert {
                title: "Error".to_string(),
                ..e.into_alert()
            },
            AuthError::Network(e) => e.into_alert(),
        }
    }
}
