use crate::domain::response::comment::CommentResponse;
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynCommentQueryService = Arc<dyn CommentQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait CommentQueryServiceTrait {
    async fn find_all(&self) -> Result<Vec<CommentResponse>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<CommentResponse, ServiceError>;
    async fn find_by_product(&self, product_id: i64) -> Result<Vec<CommentResponse>, ServiceError>;
}
