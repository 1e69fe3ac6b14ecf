use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::errors::OrderError;
use super::value_objects::{Emirate, OrderStatus, PaymentMethod};
use crate::domain::cart::model::{Cart, CartItem};
use crate::domain::errors::{ValidationError, require};
use crate::domain::shared::value_objects::{Money, OrderId, ProductId, UserId};

pub const MIN_PHONE_LENGTH: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    pub full_name: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub emirate: Emirate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

/// Raw checkout form fields, before validation.
#[derive(Debug, Clone, Default)]
pub struct ShippingAddressProps {
    pub full_name: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub emirate: String,
    pub postal_code: Option<String>,
}

impl ShippingAddress {
    /// Required fields are checked in form order, then the phone length.
    pub fn new(props: ShippingAddressProps) -> Result<Self, ValidationError> {
        require(&props.full_name, "full name")?;
        require(&props.phone, "phone")?;
        require(&props.address, "address")?;
        require(&props.city, "city")?;
        require(&props.emirate, "emirate")?;

        let phone = props.phone.trim().to_string();
        if phone.chars().count() < MIN_PHONE_LENGTH {
            return Err(ValidationError::InvalidPhone);
        }

        let emirate = props
            .emirate
            .parse::<Emirate>()
            .map_err(|_| ValidationError::UnknownEmirate)?;

        Ok(Self {
            full_name: props.full_name.trim().to_string(),
            phone,
            address: props.address.trim().to_string(),
            city: props.city.trim().to_string(),
            emirate,
            postal_code: props
                .postal_code
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty()),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Present on submitted orders; the read-back listing may omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<ProductId>,
    pub name: String,
    pub price: Money,
    pub quantity: u32,
}

impl From<&CartItem> for OrderItem {
    fn from(item: &CartItem) -> Self {
        Self {
            product_id: Some(item.id.clone()),
            name: item.name.clone(),
            price: item.price,
            quantity: item.quantity,
        }
    }
}

/// Order body for `POST /api/orders`, built client-side from a cart snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub user_id: UserId,
    pub items: Vec<OrderItem>,
    pub shipping_address: ShippingAddress,
    pub payment_method: PaymentMethod,
    pub notes: String,
    pub total: Money,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

pub struct NewOrderProps {
    pub user_id: UserId,
    pub shipping_address: ShippingAddress,
    pub payment_method: PaymentMethod,
    pub notes: String,
}

impl NewOrder {
    pub fn from_cart(cart: &Cart, props: NewOrderProps) -> Result<Self, OrderError> {
        if cart.is_empty() {
            return Err(OrderError::EmptyCart);
        }

        Ok(Self {
            user_id: props.user_id,
            items: cart.items().iter().map(OrderItem::from).collect(),
            shipping_address: props.shipping_address,
            payment_method: props.payment_method,
            notes: props.notes,
            total: cart.total_price(),
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        })
    }
}

/// Acknowledgement returned by the order API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub id: OrderId,
}

/// An order as listed by `GET /api/orders?userId=`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub status: OrderStatus,
    pub total: Money,
    pub items: Vec<OrderItem>,
    pub shipping_address: ShippingAddress,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_delivery: Option<DateTime<Utc>>,
}

impl Order {
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }
}
