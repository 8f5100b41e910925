/// Expands to a product repository named `$name` over a `$pool` of the
/// `$db` backend. The SQL uses `$n` placeholders, which both SQLite and
/// PostgreSQL accept.
macro_rules! product_repository {
    ($name:ident, $pool:ty, $db:ty) => {
        mod product {
            use $crate::{
                abstract_trait::product::repository::{
                    ProductCommandRepositoryTrait, ProductQueryRepositoryTrait,
                },
                domain::requests::product::UpdateProductRequest,
                model::product::{
                    NewProduct, Product as ProductModel, ProductCommentRow, ProductWithComments,
                    aggregate_products,
                },
            };
            use async_trait::async_trait;
            use shared::errors::RepositoryError;
            use sqlx::QueryBuilder;
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
            impl ProductQueryRepositoryTrait for $name {
                async fn find_all(&self) -> Result<Vec<ProductWithComments>, RepositoryError> {
                    info!("🔍 Fetching all products with comments");

                    let mut conn = self.db.acquire().await.map_err(|e| {
                        error!("❌ Failed to acquire DB connection: {:?}", e);
                        RepositoryError::from(e)
                    })?;

                    let rows = sqlx::query_as::<_, ProductCommentRow>(
                        r#"
                        SELECT
                            p.id,
                            p.name,
                            p.image_url,
                            p.count,
                            p.width,
                            p.height,
                            p.weight,
                            c.id AS comment_id,
                            c.description,
                            c.date
                        FROM products p
                        LEFT JOIN comments c ON c.product_id = p.id
                        ORDER BY p.id, c.id
                        "#,
                    )
                    .fetch_all(&mut *conn)
                    .await
                    .map_err(|e| {
                        error!("❌ Failed to fetch products: {:?}", e);
                        RepositoryError::from(e)
                    })?;

                    Ok(aggregate_products(rows))
                }

                async fn find_by_id(&self, id: i64) -> Result<Option<ProductWithComments>, RepositoryError> {
                    info!("🆔 Fetching product by ID: {}", id);

                    let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

                    let rows = sqlx::query_as::<_, ProductCommentRow>(
                        r#"
                        SELECT
                            p.id,
                            p.name,
                            p.image_url,
                            p.count,
                            p.width,
                            p.height,
                            p.weight,
                            c.id AS comment_id,
                            c.description,
                            c.date
                        FROM products p
                        LEFT JOIN comments c ON c.product_id = p.id
                        WHERE p.id = $1
                        ORDER BY c.id
                        "#,
                    )
                    .bind(id)
                    .fetch_all(&mut *conn)
                    .await
                    .map_err(|e| {
                        error!("❌ Failed to fetch product {}: {:?}", id, e);
                        RepositoryError::from(e)
                    })?;

                    Ok(aggregate_products(rows).into_iter().next())
                }
            }

            #[async_trait]
            impl ProductCommandRepositoryTrait for $name {
                async fn create_product(&self, product: &NewProduct) -> Result<ProductModel, RepositoryError> {
                    let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

                    let result = sqlx::query_as::<_, ProductModel>(
                        r#"
                        INSERT INTO products (name, image_url, count, width, height, weight)
                        VALUES ($1, $2, $3, $4, $5, $6)
                        RETURNING id, name, image_url, count, width, height, weight
                        "#,
                    )
                    .bind(&product.name)
                    .bind(&product.image_url)
                    .bind(product.count)
                    .bind(product.width)
                    .bind(product.height)
                    .bind(&product.weight)
                    .fetch_one(&mut *conn)
                    .await
                    .map_err(|err| {
                        error!("❌ Failed to create product {}: {:?}", product.name, err);
                        RepositoryError::from(err)
                    })?;

                    info!("✅ Created product ID {} ({})", result.id, result.name);
                    Ok(result)
                }

                async fn update_product(
                    &self,
                    id: i64,
                    product: &UpdateProductRequest,
                ) -> Result<bool, RepositoryError> {
                    if product.is_empty() {
                        info!("⏭️ No fields to update for product ID {}", id);
                        return Ok(false);
                    }

                    let mut builder = QueryBuilder::<$db>::new("UPDATE products SET ");
                    let mut fields = builder.separated(", ");

                    if let Some(image_url) = &product.image_url {
                        fields.push("image_url = ").push_bind_unseparated(image_url.clone());
                    }
                    if let Some(name) = &product.name {
                        fields.push("name = ").push_bind_unseparated(name.clone());
                    }
                    if let Some(count) = product.count {
                        fields.push("count = ").push_bind_unseparated(count);
                    }
                    if let Some(width) = product.width {
                        fields.push("width = ").push_bind_unseparated(width);
                    }
                    if let Some(height) = product.height {
                        fields.push("height = ").push_bind_unseparated(height);
                    }
                    if let Some(weight) = &product.weight {
                        fields.push("weight = ").push_bind_unseparated(weight.clone());
                    }

                    builder.push(" WHERE id = ").push_bind(id);

                    let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

                    let result = builder
                        .build()
                        .execute(&mut *conn)
                        .await
                        .map_err(|err| {
                            error!("❌ Failed to update product ID {}: {:?}", id, err);
                            RepositoryError::from(err)
                        })?;

                    info!(
                        "🔄 Updated product ID {} ({} row(s))",
                        id,
                        result.rows_affected()
                    );
                    Ok(result.rows_affected() > 0)
                }

                async fn delete_product(&self, id: i64) -> Result<bool, RepositoryError> {
                    let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

                    let result = sqlx::query("DELETE FROM products WHERE id = $1")
                        .bind(id)
                        .execute(&mut *conn)
                        .await
                        .map_err(|err| {
                            error!("❌ Failed to delete product ID {}: {:?}", id, err);
                            RepositoryError::from(err)
                        })?;

                    info!(
                        "🗑️ Deleted product ID {} ({} row(s))",
                        id,
                        result.rows_affected()
                    );
                    Ok(result.rows_affected() > 0)
                }
            }
        }

        pub use self::product::$name;
    };
}

pub(crate) use product_repository;
