use crate::{
    domain::requests::comment::UpdateCommentRequest,
    model::comment::{Comment as CommentModel, NewComment},
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynCommentCommandRepository = Arc<dyn CommentCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CommentCommandRepositoryTrait {
    async fn create_comment(&self, req: &NewComment) -> Result<CommentModel, RepositoryError>;
    async fn update_comment(
        &self,
        id: i64,
        req: &UpdateCommentRequest,
    ) -> Result<bool, RepositoryError>;
    async fn delete_comment(&self, id: i64) -> Result<bool, RepositoryError>;
}
