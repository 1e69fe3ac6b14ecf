use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::model::Product;
use crate::domain::product::services::ProductCatalog;
use crate::domain::product::use_cases::get_all::{GetAllProductsParams, GetAllProductsUseCase};
use crate::domain::shared::fetch::FetchOutcome;

pub struct GetAllProductsUseCaseImpl {
    pub catalog: Arc<dyn ProductCatalog>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self, params: GetAllProductsParams) -> FetchOutcome<Vec<Product>> {
        self.logger.info(&format!(
            "Fetching products (query: {:?}, category: {})",
            params.filter.query, params.filter.category
        ));

        match self.catalog.get_all().await {
            Ok(products) => {
                let total = products.len();
                let visible = params.filter.apply(products);
                self.logger.debug(&format!(
                    "Showing {} of {} products",
                    visible.len(),
                    total
                ));
                FetchOutcome::Live(visible)
            }
            Err(e) => {
                self.logger
                    .error(&format!("Failed to fetch products: {}", e));
                FetchOutcome::Fallback(Vec::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::NetworkError;
    use crate::domain::product::filter::{CategoryFilter, ProductFilter};
    use crate::domain::shared::value_objects::ProductId;
    use mockall::mock;
    use rust_decimal::Decimal;

    mock! {
        pub Catalog {}

        #[async_trait]
        impl ProductCatalog for Catalog {
            async fn get_all(&self) -> Result<Vec<Product>, NetworkError>;
            async fn get_by_id(&self, id: &ProductId) -> Result<Product, NetworkError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn product(id: &str, name: &str, category: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            price: Decimal::from(330),
            description: format!("{} for daily use", name),
            image: None,
            category: category.to_string(),
            in_stock: true,
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product("1", "MOISTURE REPLENISHING HYALURON SERUM", "Serum"),
            product("2", "MULTI VITA RADIANCE CREAM", "Cream"),
            product("3", "MULTI VITA RADIANCE SERUM", "Serum"),
        ]
    }

    #[tokio::test]
    async fn should_return_whole_catalog_without_filter() {
        let mut mock_catalog = MockCatalog::new();
        mock_catalog.expect_get_all().returning(|| Ok(catalog()));

        let use_case = GetAllProductsUseCaseImpl {
            catalog: Arc::new(mock_catalog),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetAllProductsParams {
                filter: ProductFilter::default(),
            })
            .await;

        assert!(!result.is_fallback());
        assert_eq!(result.value().len(), 3);
    }

    #[tokio::test]
    async fn should_apply_search_and_category() {
        let mut mock_catalog = MockCatalog::new();
        mock_catalog.expect_get_all().returning(|| Ok(catalog()));

        let use_case = GetAllProductsUseCaseImpl {
            catalog: Arc::new(mock_catalog),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetAllProductsParams {
                filter: ProductFilter::new(
                    Some("vita".to_string()),
                    CategoryFilter::Named("Serum".to_string()),
                ),
            })
            .await;

        let ids: Vec<_> = result
            .into_inner()
            .into_iter()
            .map(|p| p.id.to_string())
            .collect();
        assert_eq!(ids, vec!["3"]);
    }

    #[tokio::test]
    async fn should_fall_back_to_empty_list_when_catalog_unreachable() {
        let mut mock_catalog = MockCatalog::new();
        mock_catalog
            .expect_get_all()
            .returning(|| Err(NetworkError::Timeout));

        let use_case = GetAllProductsUseCaseImpl {
            catalog: Arc::new(mock_catalog),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetAllProductsParams {
                filter: ProductFilter::default(),
            })
            .await;

        assert_eq!(result, FetchOutcome::Fallback(Vec::new()));
    }
}
