use crate::{
    domain::response::comment::CommentResponse,
    model::product::{Product as ProductModel, ProductWithComments},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
pub struct SizeResponse {
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: i64,
    pub image_url: String,
    pub name: String,
    pub count: i32,
    pub size: SizeResponse,
    pub weight: String,
    pub comments: Vec<CommentResponse>,
}

// freshly created products carry no comments
impl From<ProductModel> for ProductResponse {
    fn from(value: ProductModel) -> Self {
        ProductWithComments::from(value).into()
    }
}

impl From<ProductWithComments> for ProductResponse {
    fn from(value: ProductWithComments) -> Self {
        let ProductWithComments { product, comments } = value;

        ProductResponse {
            id: product.id,
            image_url: product.image_url,
            name: product.name,
            count: product.count,
            size: SizeResponse {
                width: product.width,
                height: product.height,
            },
            weight: product.weight,
            comments: comments.into_iter().map(CommentResponse::from).collect(),
        }
    }
}
