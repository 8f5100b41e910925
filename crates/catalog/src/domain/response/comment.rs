use crate::model::comment::Comment as CommentModel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: i64,
    pub product_id: i64,
    pub description: String,
    pub date: String,
}

impl From<CommentModel> for CommentResponse {
    fn from(value: CommentModel) -> Self {
        CommentResponse {
            id: value.id,
            product_id: value.product_id,
            description: value.description,
            date: value.date,
        }
    }
}
