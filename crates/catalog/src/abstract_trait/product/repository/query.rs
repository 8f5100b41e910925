use crate::model::product::ProductWithComments;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductQueryRepository = Arc<dyn ProductQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<ProductWithComments>, RepositoryError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<ProductWithComments>, RepositoryError>;
}
