use business::domain::cart::model::Cart;
use business::domain::order::model::{Order, OrderReceipt};
use business::domain::order::value_objects::PaymentMethod;
use business::domain::shared::fetch::FetchOutcome;

use crate::screens::format::{date, money};

pub fn order_placed(cart: &Cart, payment_method: PaymentMethod, receipt: &OrderReceipt) -> String {
    let payment = match payment_method {
        PaymentMethod::CashOnDelivery => "Cash on Delivery",
        PaymentMethod::Card => "Credit/Debit Card",
    };
    let mut lines = vec!["Order Summary".to_string()];
    for item in cart.items() {
        lines.push(format!(
            "    {} x {} = {}",
            item.quantity,
            item.name,
            money(item.line_total())
        ));
    }
    lines.push(format!("Total: {}", money(cart.total_price())));
    lines.push(format!("Payment: {}", payment));
    lines.push(String::new());
    lines.push("Order Placed Successfully!".to_string());
    lines.push(format!(
        "Your order #{} has been placed. You will receive a confirmation email shortly.",
        receipt.id
    ));
    lines.join("\n")
}

pub fn order_list(outcome: &FetchOutcome<Vec<Order>>) -> String {
    let orders = outcome.value();
    let mut lines = vec!["My Orders".to_string()];
    if outcome.is_fallback() {
        lines.push("Showing sample orders; your order history could not be loaded.".to_string());
    }
    lines.push(String::new());

    if orders.is_empty() {
        lines.push("No orders yet".to_string());
        return lines.join("\n");
    }

    for order in orders {
        lines.push(format!(
            "Order #{} | {} | {}",
            order.id,
            order.status.to_string().to_uppercase(),
            date(&order.created_at)
        ));
        for item in &order.items {
            lines.push(format!(
                "    {} x {} ({})",
                item.quantity,
                item.name,
                money(item.price)
            ));
        }
        lines.push(format!("    Total: {}", money(order.total)));
        lines.push(format!(
            "    Ship to: {}, {}, {}",
            order.shipping_address.full_name,
            order.shipping_address.city,
            order.shipping_address.emirate
        ));
        if let Some(eta) = &order.estimated_delivery {
            lines.push(format!("    Estimated delivery: {}", date(eta)));
        }
        lines.push(String::new());
    }
    lines.join("\n").trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::order::samples::sample_orders;
    use business::domain::shared::value_objects::OrderId;

    #[test]
    fn should_render_sample_history_with_notice() {
        let outcome = FetchOutcome::Fallback(sample_orders(Some("Layla Haddad")));

        let rendered = order_list(&outcome);

        assert!(rendered.contains("Showing sample orders"));
        assert!(rendered.contains("Order #ORD-001 | DELIVERED | Jan 15, 2024"));
        assert!(rendered.contains("Order #ORD-002 | SHIPPED | Jan 20, 2024"));
        assert!(rendered.contains("Ship to: Layla Haddad, Dubai, Dubai"));
        assert!(rendered.contains("Estimated delivery: Jan 23, 2024"));
    }

    #[test]
    fn should_say_when_no_orders() {
        let rendered = order_list(&FetchOutcome::Live(Vec::new()));

        assert!(rendered.contains("No orders yet"));
        assert!(!rendered.contains("sample"));
    }

    #[test]
    fn should_confirm_placed_order() {
        let receipt = OrderReceipt {
            id: OrderId::new("ORD-100"),
        };

        let rendered = order_placed(&Cart::new(), PaymentMethod::Card, &receipt);

        assert!(rendered.contains("Payment: Credit/Debit Card"));
        assert!(rendered.contains("Your order #ORD-100 has been placed."));
    }
}
