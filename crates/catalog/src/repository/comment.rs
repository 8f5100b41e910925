/// Expands to a comment repository named `$name` over a `$pool` of the
/// `$db` backend.
macro_rules! comment_repository {
    ($name:ident, $pool:ty, $db:ty) => {
        mod comment {
            use $crate::{
                abstract_trait::comment::repository::{
                    CommentCommandRepositoryTrait, CommentQueryRepositoryTrait,
                },
                domain::requests::comment::UpdateCommentRequest,
                model::comment::{Comment as CommentModel, NewComment},
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
            impl CommentQueryRepositoryTrait for $name {
                async fn find_all(&self) -> Result<Vec<CommentModel>, RepositoryError> {
                    info!("🔍 Fetching all comments");

                    let mut conn = self.db.acquire().await.map_err(|e| {
                        error!("❌ Failed to acquire DB connection: {:?}", e);
                        RepositoryError::from(e)
                    })?;

                    let comments = sqlx::query_as::<_, CommentModel>(
                        "SELECT id, product_id, description, date FROM comments ORDER BY id",
                    )
                    .fetch_all(&mut *conn)
                    .await
                    .map_err(|e| {
                        error!("❌ Failed to fetch comments: {:?}", e);
                        RepositoryError::from(e)
                    })?;

                    Ok(comments)
                }

                async fn find_by_id(&self, id: i64) -> Result<Option<CommentModel>, RepositoryError> {
                    info!("🆔 Fetching comment by ID: {}", id);

                    let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

                    let result = sqlx::query_as::<_, CommentModel>(
                        "SELECT id, product_id, description, date FROM comments WHERE id = $1",
                    )
                    .bind(id)
                    .fetch_optional(&mut *conn)
                    .await
                    .map_err(RepositoryError::from)?;

                    Ok(result)
                }

                async fn find_by_product(&self, product_id: i64) -> Result<Vec<CommentModel>, RepositoryError> {
                    info!("🔍 Fetching comments for product ID: {}", product_id);

                    let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

                    let comments = sqlx::query_as::<_, CommentModel>(
                        r#"
                        SELECT id, product_id, description, date
                        FROM comments
                        WHERE product_id = $1
                        ORDER BY id
                        "#,
                    )
                    .bind(product_id)
                    .fetch_all(&mut *conn)
                    .await
                    .map_err(|e| {
                        error!(
                            "❌ Failed to fetch comments for product {}: {:?}",
                            product_id, e
                        );
                        RepositoryError::from(e)
                    })?;

                    Ok(comments)
                }
            }

            #[async_trait]
            impl CommentCommandRepositoryTrait for $name {
                async fn create_comment(&self, comment: &NewComment) -> Result<CommentModel, RepositoryError> {
                    let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

                    let result = sqlx::query_as::<_, CommentModel>(
                        r#"
                        INSERT INTO comments (product_id, description, date)
                        VALUES ($1, $2, $3)
                        RETURNING id, product_id, description, date
                        "#,
                    )
                    .bind(comment.product_id)
                    .bind(&comment.description)
                    .bind(&comment.date)
                    .fetch_one(&mut *conn)
                    .await
                    .map_err(|err| {
                        error!(
                            "❌ Failed to create comment for product {}: {:?}",
                            comment.product_id, err
                        );
                        RepositoryError::from(err)
                    })?;

                    info!(
                        "✅ Created comment ID {} on product {}",
                        result.id, result.product_id
                    );
                    Ok(result)
                }

                async fn update_comment(
                    &self,
                    id: i64,
                    comment: &UpdateCommentRequest,
                ) -> Result<bool, RepositoryError> {
                    if comment.is_empty() {
                        info!("⏭️ No fields to update for comment ID {}", id);
                        return Ok(false);
                    }

                    let mut builder = QueryBuilder::<$db>::new("UPDATE comments SET ");
                    let mut fields = builder.separated(", ");

                    if let Some(product_id) = comment.product_id {
                        fields.push("product_id = ").push_bind_unseparated(product_id);
                    }
                    if let Some(description) = &comment.description {
                        fields
                            .push("description = ")
                            .push_bind_unseparated(description.clone());
                    }
                    if let Some(date) = &comment.date {
                        fields.push("date = ").push_bind_unseparated(date.clone());
                    }

                    builder.push(" WHERE id = ").push_bind(id);

                    let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

                    let result = builder
                        .build()
                        .execute(&mut *conn)
                        .await
                        .map_err(|err| {
                            error!("❌ Failed to update comment ID {}: {:?}", id, err);
                            RepositoryError::from(err)
                        })?;

                    info!(
                        "🔄 Updated comment ID {} ({} row(s))",
                        id,
                        result.rows_affected()
                    );
                    Ok(result.rows_affected() > 0)
                }

                async fn delete_comment(&self, id: i64) -> Result<bool, RepositoryError> {
                    let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

                    let result = sqlx::query("DELETE FROM comments WHERE id = $1")
                        .bind(id)
                        .execute(&mut *conn)
                        .await
                        .map_err(|err| {
                            error!("❌ Failed to delete comment ID {}: {:?}", id, err);
                            RepositoryError::from(err)
                        })?;

                    info!(
                        "🗑️ Deleted comment ID {} ({} row(s))",
                        id,
                        result.rows_affected()
                    );
                    Ok(result.rows_affected() > 0)
                }
            }
        }

        pub use self::comment::$name;
    };
}

pub(crate) use comment_repository;
