use crate::{
    abstract_trait::product::{
        repository::DynProductQueryRepository, service::ProductQueryServiceTrait,
    },
    domain::response::product::ProductResponse,
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Method, Metrics, TracingContext},
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{Instrument, error, info};

#[derive(Clone)]
pub struct ProductQueryService {
    query: DynProductQueryRepository,
    metrics: Metrics,
}

impl ProductQueryService {
    pub async fn new(query: DynProductQueryRepository, registry: Arc<Mutex<Registry>>) -> Self {
        let metrics = Metrics::new();
        metrics.register(
            &mut *registry.lock().await,
            "product_query_service",
            "ProductQueryService",
        );

        Self { query, metrics }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(&self) -> Result<Vec<ProductResponse>, ServiceError> {
        let tracing_ctx = TracingContext::start("product_find_all");
        let span = tracing_ctx.span.clone();

        async {
            match self.query.find_all().await {
                Ok(products) => {
                    info!("✅ Retrieved {} products", products.len());
                    tracing_ctx.complete_success(
                        &self.metrics,
                        Method::Get,
                        "Products retrieved successfully",
                    );
                    Ok(products.into_iter().map(ProductResponse::from).collect())
                }
                Err(e) => {
                    let msg = format!("Failed to fetch all products: {e:?}");
                    error!("❌ {msg}");
                    tracing_ctx.complete_error(&self.metrics, Method::Get, &msg);
                    Err(ServiceError::Repo(e))
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn find_by_id(&self, id: i64) -> Result<ProductResponse, ServiceError> {
        let tracing_ctx = TracingContext::start("product_find_by_id");
        let span = tracing_ctx.span.clone();

        async {
            match self.query.find_by_id(id).await {
                Ok(Some(product)) => {
                    tracing_ctx.complete_success(
                        &self.metrics,
                        Method::Get,
                        "Product retrieved successfully",
                    );
                    Ok(ProductResponse::from(product))
                }
                Ok(None) => {
                    info!("ℹ️ Product ID {id} not found");
                    tracing_ctx.complete_error(&self.metrics, Method::Get, "Product not found");
                    Err(ServiceError::NotFound("Product not found".into()))
                }
                Err(e) => {
                    let msg = format!("Failed to fetch product {id}: {e:?}");
                    error!("❌ {msg}");
                    tracing_ctx.complete_error(&self.metrics, Method::Get, &msg);
                    Err(ServiceError::Repo(e))
                }
            }
        }
        .instrument(span)
        .await
    }
}
