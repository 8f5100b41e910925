use crate::model::product::NewProduct;
use serde::{Deserialize, Serialize};
use shared::errors::ServiceError;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    #[validate(
        required(message = "imageUrl is required"),
        length(min = 1, message = "imageUrl is required")
    )]
    #[schema(example = "https://via.placeholder.com/200x200")]
    pub image_url: Option<String>,

    #[validate(
        required(message = "name is required"),
        length(min = 1, message = "name is required")
    )]
    #[schema(example = "Sample Product 1")]
    pub name: Option<String>,

    #[validate(
        required(message = "count is required"),
        range(min = 0, message = "count cannot be negative")
    )]
    #[schema(example = 10)]
    pub count: Option<i32>,

    #[validate(required(message = "width is required"))]
    #[schema(example = 200)]
    pub width: Option<i32>,

    #[validate(required(message = "height is required"))]
    #[schema(example = 200)]
    pub height: Option<i32>,

    #[validate(
        required(message = "weight is required"),
        length(min = 1, message = "weight is required")
    )]
    #[schema(example = "200g")]
    pub weight: Option<String>,
}

impl CreateProductRequest {
    /// Names of required fields that are absent or empty.
    pub fn missing_fields(&self) -> Vec<String> {
        let mut missing = Vec::new();

        if self.image_url.as_deref().is_none_or(str::is_empty) {
            missing.push("imageUrl".to_string());
        }
        if self.name.as_deref().is_none_or(str::is_empty) {
            missing.push("name".to_string());
        }
        if self.count.is_none() {
            missing.push("count".to_string());
        }
        if self.width.is_none() {
            missing.push("width".to_string());
        }
        if self.height.is_none() {
            missing.push("height".to_string());
        }
        if self.weight.as_deref().is_none_or(str::is_empty) {
            missing.push("weight".to_string());
        }

        missing
    }
}

impl TryFrom<CreateProductRequest> for NewProduct {
    type Error = ServiceError;

    fn try_from(req: CreateProductRequest) -> Result<Self, Self::Error> {
        let missing = req.missing_fields();

        match req {
            CreateProductRequest {
                image_url: Some(image_url),
                name: Some(name),
                count: Some(count),
                width: Some(width),
                height: Some(height),
                weight: Some(weight),
            } if missing.is_empty() => Ok(NewProduct {
                name,
                image_url,
                count,
                width,
                height,
                weight,
            }),
            _ => Err(ServiceError::Validation(missing)),
        }
    }
}

/// Partial product update; absent (or `null`) fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    #[schema(example = "https://via.placeholder.com/300x300")]
    pub image_url: Option<String>,

    #[schema(example = "Renamed product")]
    pub name: Option<String>,

    #[validate(range(min = 0, message = "count cannot be negative"))]
    #[schema(example = 4)]
    pub count: Option<i32>,

    pub width: Option<i32>,

    pub height: Option<i32>,

    #[schema(example = "250g")]
    pub weight: Option<String>,
}

impl UpdateProductRequest {
    pub fn is_empty(&self) -> bool {
        self.image_url.is_none()
            && self.name.is_none()
            && self.count.is_none()
            && self.width.is_none()
            && self.height.is_none()
            && self.weight.is_none()
    }
}
