pub mod authenticator;
pub mod client;
pub mod order_gateway;
pub mod product_catalog;
