use crate::domain::{
    requests::comment::{CreateCommentRequest, UpdateCommentRequest},
    response::{api::MessageResponse, comment::CommentResponse},
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynCommentCommandService = Arc<dyn CommentCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait CommentCommandServiceTrait {
    async fn create_comment(
        &self,
        req: CreateCommentRequest,
    ) -> Result<CommentResponse, ServiceError>;
    async fn update_comment(
        &self,
        id: i64,
        req: &UpdateCommentRequest,
    ) -> Result<MessageResponse, ServiceError>;
    async fn delete_comment(&self, id: i64) -> Result<MessageResponse, ServiceError>;
}
