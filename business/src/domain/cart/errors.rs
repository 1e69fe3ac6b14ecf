#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CartError {
    #[error("cart.id_empty")]
    IdEmpty,
    #[error("cart.negative_price")]
    NegativePrice,
    #[error("cart.invalid_quantity")]
    InvalidQuantity,
}
