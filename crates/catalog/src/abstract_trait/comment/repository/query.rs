use crate::model::comment::Comment as CommentModel;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynCommentQueryRepository = Arc<dyn CommentQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CommentQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<CommentModel>, RepositoryError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<CommentModel>, RepositoryError>;
    async fn find_by_product(&self, product_id: i64) -> Result<Vec<CommentModel>, RepositoryError>;
}
