use business::domain::cart::errors::CartError;
use business::domain::product::errors::ProductError;

use crate::screens::alert::{Alert, IntoAlert};

impl IntoAlert for ProductError {
    fn into_alert(self) -> Alert {
        match self {
            ProductError::NotFound => {
                Alert::new("Not Found", "This product is no longer available.")
            }
            ProductError::OutOfStock => {
                Alert::new("Out of Stock", "This product is currently out of stock.")
            }
            ProductError::InvalidCartItem(CartError::InvalidQuantity) => {
                Alert::new("Invalid Quantity", "Quantity must be at least 1.")
            }
            ProductError::InvalidCartItem(_) => {
                Alert::new("Error", "This product cannot be added to the cart.")
            }
            ProductError::Network(e) => e.into_alert(),
        }
    }
}
