use super::{
    comment::comment_repository, product::product_repository, schema::schema_initializer,
};

product_repository!(SqliteProductRepository, sqlx::SqlitePool, sqlx::Sqlite);
comment_repository!(SqliteCommentRepository, sqlx::SqlitePool, sqlx::Sqlite);

schema_initializer!(
    SqliteSchemaInitializer,
    sqlx::SqlitePool,
    products: r#"
        CREATE TABLE IF NOT EXISTS products (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            image_url TEXT NOT NULL,
            count INTEGER NOT NULL DEFAULT 0,
            width INTEGER NOT NULL,
            height INTEGER NOT NULL,
            weight TEXT NOT NULL,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP
        )
    "#,
    comments: r#"
        CREATE TABLE IF NOT EXISTS comments (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            product_id INTEGER NOT NULL,
            description TEXT NOT NULL,
            date TEXT NOT NULL,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
            FOREIGN KEY (product_id) REFERENCES products(id) ON DELETE CASCADE
        )
    "#,
);
