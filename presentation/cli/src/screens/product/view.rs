use business::domain::cart::model::CartItem;
use business::domain::product::filter::{CategoryFilter, ProductFilter};
use business::domain::product::model::Product;
use business::domain::shared::fetch::FetchOutcome;

use crate::screens::format::money;

pub fn product_list(outcome: &FetchOutcome<Vec<Product>>, filter: &ProductFilter) -> String {
    let products = outcome.value();
    let mut lines = vec![
        "Products".to_string(),
        format!("{} products", products.len()),
    ];

    let mut applied = Vec::new();
    if let Some(query) = &filter.query {
        applied.push(format!("search \"{}\"", query));
    }
    if let CategoryFilter::Named(category) = &filter.category {
        applied.push(format!("category {}", category));
    }
    if !applied.is_empty() {
        lines.push(format!("Filtered by {}", applied.join(", ")));
    }
    lines.push(String::new());

    if products.is_empty() {
        if outcome.is_fallback() {
            lines.push("Unable to load products. Please check your connection.".to_string());
        } else {
            lines.push("No products found".to_string());
        }
        return lines.join("\n");
    }

    for product in products {
        let stock = if product.in_stock { "" } else { "  (out of stock)" };
        lines.push(format!(
            "[{}] {} | {} | {}{}",
            product.id,
            product.name,
            product.category,
            money(product.price),
            stock
        ));
    }
    lines.join("\n")
}

pub fn product_detail(outcome: &FetchOutcome<Product>) -> String {
    let product = outcome.value();
    let mut lines = vec![
        product.name.clone(),
        format!("{} | {}", product.category, money(product.price)),
        if product.in_stock {
            "In stock".to_string()
        } else {
            "Out of stock".to_string()
        },
    ];
    if !product.description.is_empty() {
        lines.push(String::new());
        lines.push(product.description.clone());
    }
    if outcome.is_fallback() {
        lines.push(String::new());
        lines.push("Showing saved product details; the store could not be reached.".to_string());
    }
    lines.join("\n")
}

pub fn added_to_cart(item: &CartItem, total_items: u64) -> String {
    format!(
        "Added to Cart: {} has been added to your cart.\nCart: {} items",
        item.name, total_items
    )
}
