use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;

use super::model::{Order, OrderItem, ShippingAddress};
use super::value_objects::{Emirate, OrderStatus};
use crate::domain::shared::value_objects::OrderId;

const DEFAULT_RECIPIENT: &str = "John Doe";

/// Order history shown when the order API cannot be reached.
pub fn sample_orders(recipient: Option<&str>) -> Vec<Order> {
    let full_name = recipient
        .filter(|name| !name.trim().is_empty())
        .unwrap_or(DEFAULT_RECIPIENT);

    vec![
        sample_order(
            "ORD-001",
            OrderStatus::Delivered,
            "POWER SOLUTION HES",
            580,
            full_name,
            utc(2024, 1, 15, 10, 30),
            utc(2024, 1, 18, 14, 0),
        ),
        sample_order(
            "ORD-002",
            OrderStatus::Shipped,
            "MOISTURE REPLENISHING HYALURON SERUM",
            330,
            full_name,
            utc(2024, 1, 20, 15, 45),
            utc(2024, 1, 23, 16, 0),
        ),
    ]
}

fn sample_order(
    id: &str,
    status: OrderStatus,
    product: &str,
    price: i64,
    full_name: &str,
    created_at: Option<DateTime<Utc>>,
    estimated_delivery: Option<DateTime<Utc>>,
) -> Order {
    Order {
        id: OrderId::new(id),
        status,
        total: Decimal::from(price),
        items: vec![OrderItem {
            product_id: None,
            name: product.to_string(),
            price: Decimal::from(price),
            quantity: 1,
        }],
        shipping_address: ShippingAddress {
            full_name: full_name.to_string(),
            phone: "+971501234567".to_string(),
            address: "123 Business Bay".to_string(),
            city: "Dubai".to_string(),
            emirate: Emirate::Dubai,
            postal_code: None,
        },
        created_at: created_at.unwrap_or_else(Utc::now),
        estimated_delivery,
    }
}

fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Option<DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_address_samples_to_given_recipient() {
        let orders = sample_orders(Some("Layla Haddad"));

        assert_eq!(orders.len(), 2);
        assert!(
            orders
                .iter()
                .all(|o| o.shipping_address.full_name == "Layla Haddad")
        );
    }

    #[test]
    fn should_fall_back_to_default_recipient() {
        let orders = sample_orders(None);

        assert_eq!(orders[0].id.as_str(), "ORD-001");
        assert_eq!(orders[0].status, OrderStatus::Delivered);
        assert_eq!(orders[1].status, OrderStatus::Shipped);
        assert_eq!(orders[0].shipping_address.full_name, "John Doe");
    }
}
