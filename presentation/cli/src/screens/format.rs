use business::domain::shared::value_objects::Money;
use chrono::{DateTime, Utc};

pub fn money(amount: Money) -> String {
    format!("AED {:.2}", amount)
}

pub fn date(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %Y").to_string()
}

/// Upper-cased first letter, or `fallback` for an empty name.
pub fn initial(name: &str, fallback: char) -> char {
    name.trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().next().unwrap_or(c))
        .unwrap_or(fallback)
}
