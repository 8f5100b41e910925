use crate::{
    abstract_trait::product::{
        repository::DynProductCommandRepository, service::ProductCommandServiceTrait,
    },
    domain::{
        requests::product::{CreateProductRequest, UpdateProductRequest},
        response::{api::MessageResponse, product::ProductResponse},
    },
    model::product::NewProduct,
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
pub struct ProductCommandService {
    command: DynProductCommandRepository,
    metrics: Metrics,
}

impl ProductCommandService {
    pub async fn new(command: DynProductCommandRepository, registry: Arc<Mutex<Registry>>) -> Self {
        let metrics = Metrics::new();
        metrics.register(
            &mut *registry.lock().await,
            "product_command_service",
            "ProductCommandService",
        );

        Self { command, metrics }
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(
        &self,
        req: CreateProductRequest,
    ) -> Result<ProductResponse, ServiceError> {
        let tracing_ctx = TracingContext::start("product_create");
        let span = tracing_ctx.span.clone();

        async {
            let product = match NewProduct::try_from(req) {
                Ok(product) => product,
                Err(e) => {
                    tracing_ctx.complete_error(&self.metrics, Method::Post, &e.to_string());
                    return Err(e);
                }
            };

            info!("🏗️ Creating product '{}'", product.name);

            match self.command.create_product(&product).await {
                Ok(created) => {
                    tracing_ctx.complete_success(
                        &self.metrics,
                        Method::Post,
                        "Product created successfully",
                    );
                    Ok(ProductResponse::from(created))
                }
                Err(e) => {
                    let msg = format!("Failed to create product: {e:?}");
                    error!("❌ {msg}");
                    tracing_ctx.complete_error(&self.metrics, Method::Post, &msg);
                    Err(ServiceError::Repo(e))
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn update_product(
        &self,
        id: i64,
        req: &UpdateProductRequest,
    ) -> Result<MessageResponse, ServiceError> {
        let tracing_ctx = TracingContext::start("product_update");
        let span = tracing_ctx.span.clone();

        async {
            match self.command.update_product(id, req).await {
                Ok(true) => {
                    tracing_ctx.complete_success(
                        &self.metrics,
                        Method::Put,
                        "Product updated successfully",
                    );
                    Ok(MessageResponse::new("Product updated successfully"))
                }
                Ok(false) => {
                    tracing_ctx.complete_error(
                        &self.metrics,
                        Method::Put,
                        "Product not found or no changes made",
                    );
                    Err(ServiceError::NotFound(
                        "Product not found or no changes made".into(),
                    ))
                }
                Err(e) => {
                    let msg = format!("Failed to update product {id}: {e:?}");
                    error!("❌ {msg}");
                    tracing_ctx.complete_error(&self.metrics, Method::Put, &msg);
                    Err(ServiceError::Repo(e))
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn delete_product(&self, id: i64) -> Result<MessageResponse, ServiceError> {
        let tracing_ctx = TracingContext::start("product_delete");
        let span = tracing_ctx.span.clone();

        async {
            match self.command.delete_product(id).await {
                Ok(true) => {
                    tracing_ctx.complete_success(
                        &self.metrics,
                        Method::Delete,
                        "Product deleted successfully",
                    );
                    Ok(MessageResponse::new("Product deleted successfully"))
                }
                Ok(false) => {
                    tracing_ctx.complete_error(&self.metrics, Method::Delete, "Product not found");
                    Err(ServiceError::NotFound("Product not found".into()))
                }
                Err(e) => {
                    let msg = format!("Failed to delete product {id}: {e:?}");
                    error!("❌ {msg}");
                    tracing_ctx.complete_error(&self.metrics, Method::Delete, &msg);
                    Err(ServiceError::Repo(e))
                }
            }
        }
        .instrument(span)
        .await
    }
}
