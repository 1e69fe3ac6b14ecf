use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;

use business::domain::auth::model::AuthToken;
use business::domain::errors::NetworkError;
use business::domain::order::model::{NewOrder, Order, OrderReceipt};
use business::domain::order::services::OrderGateway;
use business::domain::shared::value_objects::UserId;

use crate::client::ApiClient;

pub struct OrderGatewayHttp {
    client: Arc<ApiClient>,
}

impl OrderGatewayHttp {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl OrderGateway for OrderGatewayHttp {
    async fn submit(
        &self,
        order: &NewOrder,
        token: &AuthToken,
    ) -> Result<OrderReceipt, NetworkError> {
        let request = self
            .client
            .client
            .post(self.client.url("/api/orders"))
            .header(AUTHORIZATION, ApiClient::auth_header(token))
            .json(order);
        let response = ApiClient::ensure_success(self.client.send(request).await?)?;

        ApiClient::read_json(response).await
    }

    async fn get_by_user(
        &self,
        user_id: &UserId,
        token: &AuthToken,
    ) -> Result<Vec<Order>, NetworkError> {
        let request = self
            .client
            .client
            .get(self.client.url("/api/orders"))
            .query(&[("userId", user_id.as_str())])
            .header(AUTHORIZATION, ApiClient::auth_header(token));
        let response = ApiClient::ensure_success(self.client.send(request).await?)?;

        ApiClient::read_json(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::cart::model::{Cart, CartItem, NewCartItemProps};
    use business::domain::order::model::{NewOrderProps, ShippingAddress, ShippingAddressProps};
    use business::domain::order::value_objects::{OrderStatus, PaymentMethod};
    use business::domain::shared::value_objects::ProductId;
    use rust_decimal::Decimal;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{body_partial_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn gateway(server: &MockServer) -> OrderGatewayHttp {
        OrderGatewayHttp::new(Arc::new(ApiClient::new(
            server.uri(),
            Duration::from_secs(5),
        )))
    }

    fn new_order() -> NewOrder {
        let mut cart = Cart::new();
        cart.add(
            CartItem::new(NewCartItemProps {
                id: ProductId::new("9"),
                name: "MOISTURE REPLENISHING HYALURON SERUM".to_string(),
                price: Decimal::from(330),
                quantity: 2,
                category: "Serum".to_string(),
                image: None,
            })
            .unwrap(),
        );
        let address = ShippingAddress::new(ShippingAddressProps {
            full_name: "Layla Haddad".to_string(),
            phone: "+971501234567".to_string(),
            address: "123 Business Bay".to_string(),
            city: "Dubai".to_string(),
            emirate: "Dubai".to_string(),
            postal_code: None,
        })
        .unwrap();

        NewOrder::from_cart(
            &cart,
            NewOrderProps {
                user_id: UserId::new("u1"),
                shipping_address: address,
                payment_method: PaymentMethod::CashOnDelivery,
                notes: String::new(),
            },
        )
        .unwrap()
    }

    #[tokio::test]
    async fn should_post_order_with_bearer_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/orders"))
            .and(header("authorization", "Bearer token-123"))
            .and(body_partial_json(json!({
                "userId": "u1",
                "paymentMethod": "cod",
                "status": "pending",
                "items": [{"productId": "9", "quantity": 2}]
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "ORD-100"})))
            .expect(1)
            .mount(&server)
            .await;

        let receipt = gateway(&server)
            .submit(&new_order(), &AuthToken::new("token-123"))
            .await
            .unwrap();

        assert_eq!(receipt.id.as_str(), "ORD-100");
    }

    #[tokio::test]
    async fn should_fail_when_backend_rejects_order() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/orders"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let result = gateway(&server)
            .submit(&new_order(), &AuthToken::new("token-123"))
            .await;

        assert_eq!(result.unwrap_err(), NetworkError::UnexpectedStatus(500));
    }

    #[tokio::test]
    async fn should_list_orders_for_user() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/orders"))
            .and(query_param("userId", "u1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "id": "ORD-001",
                "status": "delivered",
                "total": 580,
                "items": [{"name": "POWER SOLUTION HES", "quantity": 1, "price": 580}],
                "shippingAddress": {
                    "fullName": "Layla Haddad",
                    "phone": "+971501234567",
                    "address": "123 Business Bay",
                    "city": "Dubai",
                    "emirate": "Dubai"
                },
                "createdAt": "2024-01-15T10:30:00Z",
                "estimatedDelivery": "2024-01-18T14:00:00Z"
            }])))
            .mount(&server)
            .await;

        let orders = gateway(&server)
            .get_by_user(&UserId::new("u1"), &AuthToken::new("token-123"))
            .await
            .unwrap();

        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].status, OrderStatus::Delivered);
        assert!(orders[0].estimated_delivery.is_some());
    }
}
