use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Comment {
    pub id: i64,
    pub product_id: i64,
    pub description: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub product_id: i64,
    pub description: String,
    pub date: String,
}
