use super::{
    comment::comment_repository, product::product_repository, schema::schema_initializer,
};

product_repository!(PgProductRepository, sqlx::PgPool, sqlx::Postgres);
comment_repository!(PgCommentRepository, sqlx::PgPool, sqlx::Postgres);

schema_initializer!(
    PgSchemaInitializer,
    sqlx::PgPool,
    products: r#"
        CREATE TABLE IF NOT EXISTS products (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            image_url TEXT NOT NULL,
            count INTEGER NOT NULL DEFAULT 0,
            width INTEGER NOT NULL,
            height INTEGER NOT NULL,
            weight TEXT NOT NULL,
            created_at TIMESTAMPTZ DEFAULT NOW()
        )
    "#,
    comments: r#"
        CREATE TABLE IF NOT EXISTS comments (
            id BIGSERIAL PRIMARY KEY,
            product_id BIGINT NOT NULL REFERENCES products(id) ON DELETE CASCADE,
            description TEXT NOT NULL,
            date TEXT NOT NULL,
            created_at TIMESTAMPTZ DEFAULT NOW()
        )
    "#,
);
