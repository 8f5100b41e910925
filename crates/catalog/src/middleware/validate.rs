use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{HeaderMap, StatusCode, header::CONTENT_TYPE},
};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use validator::{Validate, ValidationErrors};

type JsonRejection = (StatusCode, axum::Json<Value>);

/// JSON body that must deserialize and pass its `validator` rules.
///
/// A body that is blank or not sent as JSON carries no fields, so it fails
/// with "Missing required fields". Every rejection is a 400.
pub struct SimpleValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for SimpleValidatedJson<T>
where
    T: DeserializeOwned + Default + Validate + Send,
    S: Send + Sync,
{
    type Rejection = JsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let value: T = read_json_body(req, state).await?;

        value.validate().map_err(validation_rejection)?;

        Ok(Self(value))
    }
}

/// Partial-update body. A blank or non-JSON body stands for "no fields" and
/// yields `T::default()`.
pub struct PartialJson<T>(pub T);

impl<S, T> FromRequest<S> for PartialJson<T>
where
    T: DeserializeOwned + Default + Validate + Send,
    S: Send + Sync,
{
    type Rejection = JsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let value: T = read_json_body(req, state).await?;

        value.validate().map_err(validation_rejection)?;

        Ok(Self(value))
    }
}

fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json" || (essence.contains('/') && essence.ends_with("+json"))
}

async fn read_json_body<S, T>(req: Request, state: &S) -> Result<T, JsonRejection>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    let is_json = is_json_content_type(req.headers());

    let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
        let payload = json!({
            "error": "Invalid body",
            "message": rejection.body_text(),
        });
        (StatusCode::BAD_REQUEST, axum::Json(payload))
    })?;

    if !is_json || bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    serde_json::from_slice(&bytes).map_err(|e| {
        let payload = json!({
            "error": "Invalid JSON",
            "message": e.to_string(),
        });
        (StatusCode::BAD_REQUEST, axum::Json(payload))
    })
}

fn validation_rejection(errors: ValidationErrors) -> JsonRejection {
    let label = if has_missing_field(&errors) {
        "Missing required fields"
    } else {
        "Validation failed"
    };

    let payload = json!({
        "error": label,
        "message": format_validation_errors(&errors),
        "details": format_validation_errors_detailed(&errors),
    });
    (StatusCode::BAD_REQUEST, axum::Json(payload))
}

fn has_missing_field(errors: &ValidationErrors) -> bool {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .any(|e| matches!(e.code.as_ref(), "required" | "length"))
}

fn describe(field: &str, code: &str, message: Option<String>) -> String {
    message.unwrap_or_else(|| match code {
        "required" => format!("{field} is required"),
        "length" => "Invalid length".to_string(),
        "range" => "Value out of range".to_string(),
        _ => format!("Invalid {field}"),
    })
}

fn sorted_field_errors(errors: &ValidationErrors) -> Vec<(String, Vec<String>)> {
    let mut fields: Vec<(String, Vec<String>)> = errors
        .field_errors()
        .into_iter()
        .map(|(field, field_errors)| {
            let messages = field_errors
                .iter()
                .map(|e| {
                    describe(
                        field.as_ref(),
                        e.code.as_ref(),
                        e.message.as_ref().map(|m| m.to_string()),
                    )
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));
    fields
}

fn format_validation_errors(errors: &ValidationErrors) -> String {
    let error_messages: Vec<String> = sorted_field_errors(errors)
        .into_iter()
        .flat_map(|(field, messages)| {
            messages
                .into_iter()
                .map(move |message| format!("{field}: {message}"))
        })
        .collect();

    if error_messages.is_empty() {
        "Validation failed".to_string()
    } else {
        error_messages.join("; ")
    }
}

fn format_validation_errors_detailed(errors: &ValidationErrors) -> Value {
    let mut error_map = serde_json::Map::new();

    for (field, messages) in sorted_field_errors(errors) {
        error_map.insert(field, json!(messages));
    }

    Value::Object(error_map)
}
