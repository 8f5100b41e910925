use crate::{
    abstract_trait::comment::{
        repository::DynCommentQueryRepository, service::CommentQueryServiceTrait,
    },
    domain::response::comment::CommentResponse,
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
pub struct CommentQueryService {
    query: DynCommentQueryRepository,
    metrics: Metrics,
}

impl CommentQueryService {
    pub async fn new(query: DynCommentQueryRepository, registry: Arc<Mutex<Registry>>) -> Self {
        let metrics = Metrics::new();
        metrics.register(
            &mut *registry.lock().await,
            "comment_query_service",
            "CommentQueryService",
        );

        Self { query, metrics }
    }
}

#[async_trait]
impl CommentQueryServiceTrait for CommentQueryService {
    async fn find_all(&self) -> Result<Vec<CommentResponse>, ServiceError> {
        let tracing_ctx = TracingContext::start("comment_find_all");
        let span = tracing_ctx.span.clone();

        async {
            match self.query.find_all().await {
                Ok(comments) => {
                    info!("✅ Retrieved {} comments", comments.len());
                    tracing_ctx.complete_success(
                        &self.metrics,
                        Method::Get,
                        "Comments retrieved successfully",
                    );
                    Ok(comments.into_iter().map(CommentResponse::from).collect())
                }
                Err(e) => {
                    let msg = format!("Failed to fetch all comments: {e:?}");
                    error!("❌ {msg}");
                    tracing_ctx.complete_error(&self.metrics, Method::Get, &msg);
                    Err(ServiceError::Repo(e))
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn find_by_id(&self, id: i64) -> Result<CommentResponse, ServiceError> {
        let tracing_ctx = TracingContext::start("comment_find_by_id");
        let span = tracing_ctx.span.clone();

        async {
            match self.query.find_by_id(id).await {
                Ok(Some(comment)) => {
                    tracing_ctx.complete_success(
                        &self.metrics,
                        Method::Get,
                        "Comment retrieved successfully",
                    );
                    Ok(CommentResponse::from(comment))
                }
                Ok(None) => {
                    tracing_ctx.complete_error(&self.metrics, Method::Get, "Comment not found");
                    Err(ServiceError::NotFound("Comment not found".into()))
                }
                Err(e) => {
                    let msg = format!("Failed to fetch comment {id}: {e:?}");
                    error!("❌ {msg}");
                    tracing_ctx.complete_error(&self.metrics, Method::Get, &msg);
                    Err(ServiceError::Repo(e))
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn find_by_product(&self, product_id: i64) -> Result<Vec<CommentResponse>, ServiceError> {
        let tracing_ctx = TracingContext::start("comment_find_by_product");
        let span = tracing_ctx.span.clone();

        async {
            match self.query.find_by_product(product_id).await {
                Ok(comments) => {
                    info!(
                        "✅ Retrieved {} comments for product {product_id}",
                        comments.len()
                    );
                    tracing_ctx.complete_success(
                        &self.metrics,
                        Method::Get,
                        "Product comments retrieved successfully",
                    );
                    Ok(comments.into_iter().map(CommentResponse::from).collect())
                }
                Err(e) => {
                    let msg = format!("Failed to fetch comments for product {product_id}: {e:?}");
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
