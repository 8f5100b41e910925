use crate::{
    domain::requests::product::UpdateProductRequest,
    model::product::{NewProduct, Product as ProductModel},
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandRepositoryTrait {
    async fn create_product(&self, req: &NewProduct) -> Result<ProductModel, RepositoryError>;
    /// Returns `false` without touching the store when `req` carries no fields.
    async fn update_product(
        &self,
        id: i64,
        req: &UpdateProductRequest,
    ) -> Result<bool, RepositoryError>;
    async fn delete_product(&self, id: i64) -> Result<bool, RepositoryError>;
}
