use std::sync::Arc;

use logger::TracingLogger;
use persistence::cart_item::repository::CartRepositorySqlite;
use persistence::session::repository::SessionRepositorySqlite;

use rest_client::authenticator::AuthenticatorHttp;
use rest_client::client::ApiClient;
use rest_client::order_gateway::OrderGatewayHttp;
use rest_client::product_catalog::ProductCatalogHttp;

use business::application::auth::store::AuthStoreImpl;
use business::application::cart::store::CartStoreImpl;
use business::application::order::get_all::GetOrdersUseCaseImpl;
use business::application::order::place::PlaceOrderUseCaseImpl;
use business::application::product::add_to_cart::AddProductToCartUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::domain::auth::store::AuthStore;
use business::domain::cart::store::CartStore;
use business::domain::order::use_cases::get_all::GetOrdersUseCase;
use business::domain::order::use_cases::place::PlaceOrderUseCase;
use business::domain::product::use_cases::add_to_cart::AddProductToCartUseCase;
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_id::GetProductByIdUseCase;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub auth_store: Arc<dyn AuthStore>,
    pub cart_store: Arc<dyn CartStore>,
    pub get_all_products_use_case: Arc<dyn GetAllProductsUseCase>,
    pub get_product_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    pub add_to_cart_use_case: Arc<dyn AddProductToCartUseCase>,
    pub place_order_use_case: Arc<dyn PlaceOrderUseCase>,
    pub get_orders_use_case: Arc<dyn GetOrdersUseCase>,
}

impl DependencyContainer {
    pub async fn new(config: &AppConfig, pool: sqlx::SqlitePool) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let cart_repository = Arc::new(CartRepositorySqlite::new(pool.clone()));
        let session_repository = Arc::new(SessionRepositorySqlite::new(pool));

        let api_client = Arc::new(ApiClient::new(
            config.api.base_url.clone(),
            config.api.timeout,
        ));
        let product_catalog = Arc::new(ProductCatalogHttp::new(api_client.clone()));
        let order_gateway = Arc::new(OrderGatewayHttp::new(api_client.clone()));
        let authenticator = Arc::new(AuthenticatorHttp::new(api_client));

        // Stores
        let auth_store: Arc<dyn AuthStore> = Arc::new(AuthStoreImpl::new(
            authenticator,
            session_repository,
            logger.clone(),
        ));
        let cart_store: Arc<dyn CartStore> =
            Arc::new(CartStoreImpl::new(cart_repository, logger.clone()));

        auth_store.restore().await;
        cart_store.restore().await;

        // Product use cases
        let get_all_products_use_case = Arc::new(GetAllProductsUseCaseImpl {
            catalog: product_catalog.clone(),
            logger: logger.clone(),
        });
        let get_product_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            catalog: product_catalog.clone(),
            logger: logger.clone(),
        });
        let add_to_cart_use_case = Arc::new(AddProductToCartUseCaseImpl {
            catalog: product_catalog,
            cart_store: cart_store.clone(),
            logger: logger.clone(),
        });

        // Order use cases
        let place_order_use_case = Arc::new(PlaceOrderUseCaseImpl {
            gateway: order_gateway.clone(),
            auth_store: auth_store.clone(),
            cart_store: cart_store.clone(),
            logger: logger.clone(),
        });
        let get_orders_use_case = Arc::new(GetOrdersUseCaseImpl {
            gateway: order_gateway,
            auth_store: auth_store.clone(),
            logger,
        });

        Ok(Self {
            auth_store,
            cart_store,
            get_all_products_use_case,
            get_product_by_id_use_case,
            add_to_cart_use_case,
            place_order_use_case,
            get_orders_use_case,
        })
    }
}
