use crate::domain::cart::errors::CartError;
use crate::domain::errors::NetworkError;

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.not_found")]
    NotFound,
    #[error("product.out_of_stock")]
    OutOfStock,
    #[error("product.invalid_cart_item")]
    InvalidCartItem(#[from] CartError),
    #[error("network.failed")]
    Network(#[from] NetworkError),
}
