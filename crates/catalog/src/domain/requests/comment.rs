use crate::model::comment::NewComment;
use serde::{Deserialize, Serialize};
use shared::errors::ServiceError;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    #[validate(
        required(message = "productId is required"),
        range(min = 1, code = "required", message = "productId is required")
    )]
    #[schema(example = 1)]
    pub product_id: Option<i64>,

    #[validate(
        required(message = "description is required"),
        length(min = 1, message = "description is required")
    )]
    #[schema(example = "Great product!")]
    pub description: Option<String>,

    #[validate(
        required(message = "date is required"),
        length(min = 1, message = "date is required")
    )]
    #[schema(example = "14:00 22.08.2021")]
    pub date: Option<String>,
}

impl CreateCommentRequest {
    pub fn missing_fields(&self) -> Vec<String> {
        let mut missing = Vec::new();

        if self.product_id.is_none_or(|id| id == 0) {
            missing.push("productId".to_string());
        }
        if self.description.as_deref().is_none_or(str::is_empty) {
            missing.push("description".to_string());
        }
        if self.date.as_deref().is_none_or(str::is_empty) {
            missing.push("date".to_string());
        }

        missing
    }
}

impl TryFrom<CreateCommentRequest> for NewComment {
    type Error = ServiceError;

    fn try_from(req: CreateCommentRequest) -> Result<Self, Self::Error> {
        let missing = req.missing_fields();

        match req {
            CreateCommentRequest {
                product_id: Some(product_id),
                description: Some(description),
                date: Some(date),
            } if missing.is_empty() => Ok(NewComment {
                product_id,
                description,
                date,
            }),
            _ => Err(ServiceError::Validation(missing)),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCommentRequest {
    #[schema(example = 2)]
    pub product_id: Option<i64>,

    #[schema(example = "Changed my mind")]
    pub description: Option<String>,

    #[schema(example = "09:15 23.08.2021")]
    pub date: Option<String>,
}

impl UpdateCommentRequest {
    pub fn is_empty(&self) -> bool {
        self.product_id.is_none() && self.description.is_none() && self.date.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_id_zero_is_missing() {
        let req = CreateCommentRequest {
            product_id: Some(0),
            description: Some("ok".into()),
            date: Some("today".into()),
        };

        assert!(req.validate().is_err());
        assert_eq!(req.missing_fields(), vec!["productId"]);
        assert!(NewComment::try_from(req).is_err());
    }

    #[test]
    fn complete_request_converts() {
        let req: CreateCommentRequest = serde_json::from_str(
            r#"{"productId": 4, "description": "Nice", "date": "16:00 22.08.2021"}"#,
        )
        .unwrap();

        assert!(req.validate().is_ok());
        let comment = NewComment::try_from(req).unwrap();
        assert_eq!(comment.product_id, 4);
        assert_eq!(comment.date, "16:00 22.08.2021");
    }

    #[test]
    fn update_detects_present_fields() {
        assert!(UpdateCommentRequest::default().is_empty());

        let req: UpdateCommentRequest = serde_json::from_str(r#"{"date": "later"}"#).unwrap();
        assert!(!req.is_empty());
    }
}
