use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynSchemaInitializer = Arc<dyn SchemaInitializerTrait + Send + Sync>;

/// Idempotent bootstrap of the two tables and their sample rows.
#[async_trait]
pub trait SchemaInitializerTrait {
    /// Creates missing tables. Existing tables are never dropped or altered.
    async fn ensure_schema(&self) -> Result<(), RepositoryError>;
    /// Inserts the sample products and comments when `products` is empty.
    /// Returns whether anything was inserted.
    async fn seed_if_empty(&self) -> Result<bool, RepositoryError>;
}
