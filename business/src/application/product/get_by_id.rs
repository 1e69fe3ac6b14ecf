use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::model::Product;
use crate::domain::product::samples::sample_product;
use crate::domain::product::services::ProductCatalog;
use crate::domain::product::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};
use crate::domain::shared::fetch::FetchOutcome;

pub struct GetProductByIdUseCaseImpl {
    pub catalog: Arc<dyn ProductCatalog>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    async fn execute(&self, params: GetProductByIdParams) -> FetchOutcome<Product> {
        self.logger
            .info(&format!("Fetching product by id: {}", params.id));

        match self.catalog.get_by_id(&params.id).await {
            Ok(product) => FetchOutcome::Live(product),
            Err(e) => {
                self.logger.warn(&format!(
                    "Failed to fetch product {}, showing sample: {}",
                    params.id, e
                ));
                FetchOutcome::Fallback(sample_product(&params.id))
            }
        }
    }
}
