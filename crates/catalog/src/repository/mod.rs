mod comment;
mod product;
mod schema;

pub mod postgres;
pub mod seed;
pub mod sqlite;

use crate::abstract_trait::{
    DynSchemaInitializer, SchemaInitializerTrait,
    comment::repository::{DynCommentCommandRepository, DynCommentQueryRepository},
    product::repository::{DynProductCommandRepository, DynProductQueryRepository},
};
use shared::{config::ConnectionPool, errors::RepositoryError};
use std::{fmt, sync::Arc};
use tracing::info;

/// Repository trait objects for the configured backend.
#[derive(Clone)]
pub struct Repositories {
    pub product_query: DynProductQueryRepository,
    pub product_command: DynProductCommandRepository,
    pub comment_query: DynCommentQueryRepository,
    pub comment_command: DynCommentCommandRepository,
    pub schema: DynSchemaInitializer,
}

impl fmt::Debug for Repositories {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Repositories")
            .field("product_query", &"DynProductQueryRepository")
            .field("product_command", &"DynProductCommandRepository")
            .field("comment_query", &"DynCommentQueryRepository")
            .field("comment_command", &"DynCommentCommandRepository")
            .field("schema", &"DynSchemaInitializer")
            .finish()
    }
}

impl Repositories {
    pub fn new(pool: &ConnectionPool) -> Self {
        match pool {
            ConnectionPool::Sqlite(db) => {
                info!("🗄️ Using SQLite repositories");
                let product = Arc::new(sqlite::SqliteProductRepository::new(db.clone()));
                let comment = Arc::new(sqlite::SqliteCommentRepository::new(db.clone()));

                Self {
                    product_query: product.clone(),
                    product_command: product,
                    comment_query: comment.clone(),
                    comment_command: comment,
                    schema: Arc::new(sqlite::SqliteSchemaInitializer::new(db.clone())),
                }
            }
            ConnectionPool::Postgres(db) => {
                info!("🐘 Using PostgreSQL repositories");
                let product = Arc::new(postgres::PgProductRepository::new(db.clone()));
                let comment = Arc::new(postgres::PgCommentRepository::new(db.clone()));

                Self {
                    product_query: product.clone(),
                    product_command: product,
                    comment_query: comment.clone(),
                    comment_command: comment,
                    schema: Arc::new(postgres::PgSchemaInitializer::new(db.clone())),
                }
            }
        }
    }
}

/// Creates the tables, then seeds them when empty. Returns whether sample
/// rows were inserted.
pub async fn init_database(
    schema: &(dyn SchemaInitializerTrait + Send + Sync),
) -> Result<bool, RepositoryError> {
    schema.ensure_schema().await?;
    info!("✅ Database schema ready");

    let seeded = schema.seed_if_empty().await?;
    if seeded {
        info!("🌱 Sample data inserted successfully");
    }

    Ok(seeded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::requests::{comment::UpdateCommentRequest, product::UpdateProductRequest},
        model::{comment::NewComment, product::NewProduct},
    };
    use shared::config::ConnectionManager;

    async fn sqlite_repositories() -> Repositories {
        let pool = ConnectionManager::new_pool("sqlite::memory:", 1, 1)
            .await
            .unwrap();
        let repos = Repositories::new(&pool);
        repos.schema.ensure_schema().await.unwrap();
        repos
    }

    fn shelf() -> NewProduct {
        NewProduct {
            name: "Shelf".into(),
            image_url: "https://example.com/shelf.png".into(),
            count: 2,
            width: 800,
            height: 300,
            weight: "4kg".into(),
        }
    }

    #[tokio::test]
    async fn numbered_placeholders_bind_on_sqlite() {
        let repos = sqlite_repositories().await;

        let created = repos.product_command.create_product(&shelf()).await.unwrap();
        assert_eq!(created.name, "Shelf");
        assert_eq!(created.weight, "4kg");

        let comment = repos
            .comment_command
            .create_comment(&NewComment {
                product_id: created.id,
                description: "Sturdy".into(),
                date: "12:00 02.09.2021".into(),
            })
            .await
            .unwrap();
        assert_eq!(comment.product_id, created.id);

        let found = repos
            .product_query
            .find_by_id(created.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.product, created);
        assert_eq!(found.comments, vec![comment.clone()]);

        let by_product = repos
            .comment_query
            .find_by_product(created.id)
            .await
            .unwrap();
        assert_eq!(by_product, vec![comment.clone()]);
        assert_eq!(
            repos.comment_query.find_by_id(comment.id).await.unwrap(),
            Some(comment.clone())
        );
    }

    #[tokio::test]
    async fn partial_updates_and_deletes_report_affected_rows() {
        let repos = sqlite_repositories().await;
        let created = repos.product_command.create_product(&shelf()).await.unwrap();

        let rename = UpdateProductRequest {
            name: Some("Wall shelf".into()),
            ..Default::default()
        };
        assert!(
            repos
                .product_command
                .update_product(created.id, &rename)
                .await
                .unwrap()
        );
        assert!(
            !repos
                .product_command
                .update_product(created.id + 1, &rename)
                .await
                .unwrap()
        );

        let found = repos
            .product_query
            .find_by_id(created.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.product.name, "Wall shelf");
        assert_eq!(found.product.count, 2);

        let redate = UpdateCommentRequest {
            date: Some("now".into()),
            ..Default::default()
        };
        assert!(
            !repos
                .comment_command
                .update_comment(1, &redate)
                .await
                .unwrap()
        );

        assert!(repos.product_command.delete_product(created.id).await.unwrap());
        assert!(!repos.product_command.delete_product(created.id).await.unwrap());
        assert!(repos.product_query.find_all().await.unwrap().is_empty());
    }
}
