use std::sync::Arc;

use async_trait::async_trait;

use business::domain::errors::NetworkError;
use business::domain::product::model::Product;
use business::domain::product::services::ProductCatalog;
use business::domain::shared::value_objects::ProductId;

use crate::client::ApiClient;

pub struct ProductCatalogHttp {
    client: Arc<ApiClient>,
}

impl ProductCatalogHttp {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProductCatalog for ProductCatalogHttp {
    async fn get_all(&self) -> Result<Vec<Product>, NetworkError> {
        let request = self.client.client.get(self.client.url("/api/products"));
        let response = ApiClient::ensure_success(self.client.send(request).await?)?;

        ApiClient::read_json(response).await
    }

    async fn get_by_id(&self, id: &ProductId) -> Result<Product, NetworkError> {
        let url = self.client.resource_url("/api/products", id.as_str())?;
        let request = self.client.client.get(url);
        let response = ApiClient::ensure_success(self.client.send(request).await?)?;

        ApiClient::read_json(response).await
    }
}
