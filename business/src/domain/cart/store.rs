use async_trait::async_trait;

use super::model::{Cart, CartItem};
use crate::domain::shared::value_objects::{Money, ProductId};

/// Process-wide cart, injected into whatever needs it.
///
/// Mutations never fail: unknown ids are no-ops and persistence trouble is only logged.
#[async_trait]
pub trait CartStore: Send + Sync {
    /// Replaces the in-memory cart with the persisted one.
    async fn restore(&self);
    async fn items(&self) -> Vec<CartItem>;
    async fn snapshot(&self) -> Cart;
    async fn add_to_cart(&self, item: CartItem);
    async fn remove_from_cart(&self, id: &ProductId);
    async fn update_quantity(&self, id: &ProductId, quantity: i64);
    async fn clear_cart(&self);
    async fn is_in_cart(&self, id: &ProductId) -> bool;
    async fn total_items(&self) -> u64;
    async fn total_price(&self) -> Money;
}
