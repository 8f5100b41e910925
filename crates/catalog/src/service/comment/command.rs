use crate::{
    abstract_trait::comment::{
        repository::DynCommentCommandRepository, service::CommentCommandServiceTrait,
    },
    domain::{
        requests::comment::{CreateCommentRequest, UpdateCommentRequest},
        response::{api::MessageResponse, comment::CommentResponse},
    },
    model::comment::NewComment,
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
pub struct CommentCommandService {
    command: DynCommentCommandRepository,
    metrics: Metrics,
}

impl CommentCommandService {
    pub async fn new(command: DynCommentCommandRepository, registry: Arc<Mutex<Registry>>) -> Self {
        let metrics = Metrics::new();
        metrics.register(
            &mut *registry.lock().await,
            "comment_command_service",
            "CommentCommandService",
        );

        Self { command, metrics }
    }
}

#[async_trait]
impl CommentCommandServiceTrait for CommentCommandService {
    async fn create_comment(
        &self,
        req: CreateCommentRequest,
    ) -> Result<CommentResponse, ServiceError> {
        let tracing_ctx = TracingContext::start("comment_create");
        let span = tracing_ctx.span.clone();

        async {
            let comment = match NewComment::try_from(req) {
                Ok(comment) => comment,
                Err(e) => {
                    tracing_ctx.complete_error(&self.metrics, Method::Post, &e.to_string());
                    return Err(e);
                }
            };

            info!("💬 Creating comment for product {}", comment.product_id);

            match self.command.create_comment(&comment).await {
                Ok(created) => {
                    tracing_ctx.complete_success(
                        &self.metrics,
                        Method::Post,
                        "Comment created successfully",
                    );
                    Ok(CommentResponse::from(created))
                }
                Err(e) => {
                    let msg = format!("Failed to create comment: {e:?}");
                    error!("❌ {msg}");
                    tracing_ctx.complete_error(&self.metrics, Method::Post, &msg);
                    Err(ServiceError::Repo(e))
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn update_comment(
        &self,
        id: i64,
        req: &UpdateCommentRequest,
    ) -> Result<MessageResponse, ServiceError> {
        let tracing_ctx = TracingContext::start("comment_update");
        let span = tracing_ctx.span.clone();

        async {
            match self.command.update_comment(id, req).await {
                Ok(true) => {
                    tracing_ctx.complete_success(
                        &self.metrics,
                        Method::Put,
                        "Comment updated successfully",
                    );
                    Ok(MessageResponse::new("Comment updated successfully"))
                }
                Ok(false) => {
                    tracing_ctx.complete_error(
                        &self.metrics,
                        Method::Put,
                        "Comment not found or no changes made",
                    );
                    Err(ServiceError::NotFound(
                        "Comment not found or no changes made".into(),
                    ))
                }
                Err(e) => {
                    let msg = format!("Failed to update comment {id}: {e:?}");
                    error!("❌ {msg}");
                    tracing_ctx.complete_error(&self.metrics, Method::Put, &msg);
                    Err(ServiceError::Repo(e))
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn delete_comment(&self, id: i64) -> Result<MessageResponse, ServiceError> {
        let tracing_ctx = TracingContext::start("comment_delete");
        let span = tracing_ctx.span.clone();

        async {
            match self.command.delete_comment(id).await {
                Ok(true) => {
                    tracing_ctx.complete_success(
                        &self.metrics,
                        Method::Delete,
                        "Comment deleted successfully",
                    );
                    Ok(MessageResponse::new("Comment deleted successfully"))
                }
                Ok(false) => {
                    tracing_ctx.complete_error(&self.metrics, Method::Delete, "Comment not found");
                    Err(ServiceError::NotFound("Comment not found".into()))
                }
                Err(e) => {
                    let msg = format!("Failed to delete comment {id}: {e:?}");
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
