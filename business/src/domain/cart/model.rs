use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::errors::CartError;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::{Money, ProductId};

/// A line item: one product and how many of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
    pub quantity: u32,
    pub category: String,
    pub image: Option<String>,
}

pub struct NewCartItemProps {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
    pub quantity: u32,
    pub category: String,
    pub image: Option<String>,
}

impl CartItem {
    pub fn new(props: NewCartItemProps) -> Result<Self, CartError> {
        if props.id.as_str().trim().is_empty() {
            return Err(CartError::IdEmpty);
        }

        if props.price < Decimal::ZERO {
            return Err(CartError::NegativePrice);
        }

        if props.quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }

        Ok(Self {
            id: props.id,
            name: props.name,
            price: props.price,
            quantity: props.quantity,
            category: props.category,
            image: props.image,
        })
    }

    /// Builds the line item the products screen adds; out-of-stock products are refused.
    pub fn from_product(product: &Product, quantity: u32) -> Result<Self, ProductError> {
        if !product.in_stock {
            return Err(ProductError::OutOfStock);
        }

        let item = Self::new(NewCartItemProps {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            quantity,
            category: product.category.clone(),
            image: product.image.clone(),
        })?;
        Ok(item)
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: ProductId,
        name: String,
        price: Money,
        quantity: u32,
        category: String,
        image: Option<String>,
    ) -> Self {
        Self {
            id,
            name,
            price,
            quantity,
            category,
            image,
        }
    }

    pub fn line_total(&self) -> Money {
        self.price * Decimal::from(self.quantity)
    }
}

/// Line items keyed by product id, in insertion order.
///
/// Invariants: ids are unique and every quantity is at least 1.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a cart from stored rows, merging duplicate ids and dropping empty lines.
    pub fn from_items(items: Vec<CartItem>) -> Self {
        let mut cart = Self::new();
        for item in items.into_iter().filter(|i| i.quantity > 0) {
            cart.add(item);
        }
        cart
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<CartItem> {
        self.items
    }

    pub fn get(&self, id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.get(id).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Inserts the item, or grows the quantity of the entry with the same id.
    /// An existing entry keeps its own name, price and image.
    pub fn add(&mut self, item: CartItem) {
        match self.items.iter_mut().find(|i| i.id == item.id) {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(item.quantity);
            }
            None => self.items.push(item),
        }
    }

    /// Returns whether an entry was removed.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|i| &i.id != id);
        self.items.len() != before
    }

    /// Sets the quantity; zero or negative removes the entry.
    /// Returns whether the cart changed.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove(id);
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        match self.items.iter_mut().find(|i| &i.id == id) {
            Some(item) if item.quantity != quantity => {
                item.quantity = quantity;
                true
            }
            _ => false,
        }
    }

    /// Returns whether there was anything to clear.
    pub fn clear(&mut self) -> bool {
        let had_items = !self.items.is_empty();
        self.items.clear();
        had_items
    }

    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    pub fn total_price(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }
}
