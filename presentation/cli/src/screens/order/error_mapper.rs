use business::domain::order::errors::OrderError;

use crate::screens::alert::{Alert, IntoAlert};

impl IntoAlert for OrderError {
    fn into_alert(self) -> Alert {
        match self {
            OrderError::NotAuthenticated => Alert::sign_in_required(),
            OrderError::EmptyCart => Alert::new(
                "Your cart is empty",
                "Add some products to proceed with checkout",
            ),
            OrderError::Validation(e) => e.into_alert(),
            OrderError::Network(_) => {
                Alert::new("Error", "Failed to place order. Please try again.")
            }
        }
    }
}
