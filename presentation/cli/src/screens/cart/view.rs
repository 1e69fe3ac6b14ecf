use business::domain::cart::model::Cart;

use crate::screens::format::money;

pub fn cart_summary(cart: &Cart) -> String {
    let mut lines = vec![
        "Shopping Cart".to_string(),
        format!("{} items", cart.total_items()),
        String::new(),
    ];

    if cart.is_empty() {
        lines.push("Your cart is empty".to_string());
        lines.push("Add some products to get started".to_string());
        return lines.join("\n");
    }

    for item in cart.items() {
        lines.push(format!("[{}] {}", item.id, item.name));
        lines.push(format!(
            "    {} x {} = {}",
            item.quantity,
            money(item.price),
            money(item.line_total())
        ));
    }
    lines.push(String::new());
    lines.push(format!("Total: {}", money(cart.total_price())));
    lines.join("\n")
}
