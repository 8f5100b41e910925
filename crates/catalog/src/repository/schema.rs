/// Expands to a schema initializer named `$name` over a `$pool`. Only the
/// `CREATE TABLE` statements differ between backends.
macro_rules! schema_initializer {
    ($name:ident, $pool:ty, products: $products_ddl:literal, comments: $comments_ddl:literal $(,)?) => {
        mod schema {
            use $crate::{
                abstract_trait::SchemaInitializerTrait,
                repository::seed::{SAMPLE_COMMENTS, SAMPLE_PRODUCTS},
            };
            use async_trait::async_trait;
            use shared::errors::RepositoryError;
            use tracing::{error, info};

            #[derive(Clone)]
            pub struct $name {
                db: $pool,
            }

            impl $name {
                pub fn new(db: $pool) -> Self {
                    Self { db }
                }
            }

            #[async_trait]
            impl SchemaInitializerTrait for $name {
                async fn ensure_schema(&self) -> Result<(), RepositoryError> {
                    sqlx::query($products_ddl)
                        .execute(&self.db)
                        .await
                        .map_err(|e| {
                            error!("❌ Error creating products table: {:?}", e);
                            RepositoryError::from(e)
                        })?;

                    info!("📦 Products table ready");

                    sqlx::query($comments_ddl)
                        .execute(&self.db)
                        .await
                        .map_err(|e| {
                            error!("❌ Error creating comments table: {:?}", e);
                            RepositoryError::from(e)
                        })?;

                    info!("💬 Comments table ready");
                    Ok(())
                }

                async fn seed_if_empty(&self) -> Result<bool, RepositoryError> {
                    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
                        .fetch_one(&self.db)
                        .await?;

                    if total > 0 {
                        info!("Products table holds {} row(s), skipping sample data", total);
                        return Ok(false);
                    }

                    let mut product_ids = Vec::with_capacity(SAMPLE_PRODUCTS.len());
                    for sample in &SAMPLE_PRODUCTS {
                        let id: i64 = sqlx::query_scalar(
                            r#"
                            INSERT INTO products (name, image_url, count, width, height, weight)
                            VALUES ($1, $2, $3, $4, $5, $6)
                            RETURNING id
                            "#,
                        )
                        .bind(sample.name)
                        .bind(sample.image_url)
                        .bind(sample.count)
                        .bind(sample.width)
                        .bind(sample.height)
                        .bind(sample.weight)
                        .fetch_one(&self.db)
                        .await?;

                        product_ids.push(id);
                    }

                    for sample in &SAMPLE_COMMENTS {
                        sqlx::query(
                            "INSERT INTO comments (product_id, description, date) VALUES ($1, $2, $3)",
                        )
                        .bind(product_ids[sample.product])
                        .bind(sample.description)
                        .bind(sample.date)
                        .execute(&self.db)
                        .await?;
                    }

                    Ok(true)
                }
            }
        }

        pub use self::schema::$name;
    };
}

pub(crate) use schema_initializer;
