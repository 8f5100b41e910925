use crate::model::comment::Comment;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub image_url: String,
    pub count: i32,
    pub width: i32,
    pub height: i32,
    pub weight: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub image_url: String,
    pub count: i32,
    pub width: i32,
    pub height: i32,
    pub weight: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductWithComments {
    pub product: Product,
    pub comments: Vec<Comment>,
}

impl From<Product> for ProductWithComments {
    fn from(product: Product) -> Self {
        Self {
            product,
            comments: Vec::new(),
        }
    }
}

/// One row of `products LEFT JOIN comments`. The comment columns are all
/// NULL when the product has no comments.
#[derive(Debug, Clone, FromRow)]
pub struct ProductCommentRow {
    pub id: i64,
    pub name: String,
    pub image_url: String,
    pub count: i32,
    pub width: i32,
    pub height: i32,
    pub weight: String,
    pub comment_id: Option<i64>,
    pub description: Option<String>,
    pub date: Option<String>,
}

impl ProductCommentRow {
    pub fn into_parts(self) -> (Product, Option<Comment>) {
        let comment = self.comment_id.map(|comment_id| Comment {
            id: comment_id,
            product_id: self.id,
            description: self.description.unwrap_or_default(),
            date: self.date.unwrap_or_default(),
        });

        let product = Product {
            id: self.id,
            name: self.name,
            image_url: self.image_url,
            count: self.count,
            width: self.width,
            height: self.height,
            weight: self.weight,
        };

        (product, comment)
    }
}

/// Folds join rows into products, keeping the order in which product ids
/// first appear and the row order of each product's comments.
pub fn aggregate_products<I>(rows: I) -> Vec<ProductWithComments>
where
    I: IntoIterator<Item = ProductCommentRow>,
{
    let mut positions: HashMap<i64, usize> = HashMap::new();
    let mut products: Vec<ProductWithComments> = Vec::new();

    for row in rows {
        let (product, comment) = row.into_parts();

        let position = *positions.entry(product.id).or_insert_with(|| {
            products.push(ProductWithComments::from(product));
            products.len() - 1
        });

        if let Some(comment) = comment {
            products[position].comments.push(comment);
        }
    }

    products
}
