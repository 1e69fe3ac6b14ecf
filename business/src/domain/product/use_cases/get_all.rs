use async_trait::async_trait;

use crate::domain::product::filter::ProductFilter;
use crate::domain::product::model::Product;
use crate::domain::shared::fetch::FetchOutcome;

pub struct GetAllProductsParams {
    pub filter: ProductFilter,
}

/// Never fails: an unreachable catalog yields `Fallback` with an empty list.
#[async_trait]
pub trait GetAllProductsUseCase: Send + Sync {
    async fn execute(&self, params: GetAllProductsParams) -> FetchOutcome<Vec<Product>>;
}
