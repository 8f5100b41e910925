use crate::{
    abstract_trait::comment::service::{DynCommentCommandService, DynCommentQueryService},
    domain::{
        requests::comment::{CreateCommentRequest, UpdateCommentRequest},
        response::{api::MessageResponse, comment::CommentResponse},
    },
    handler::parse_id,
    middleware::validate::{PartialJson, SimpleValidatedJson},
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use shared::errors::{ErrorResponse, HttpError};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

const INVALID_COMMENT_ID: &str = "Invalid comment ID";

#[utoipa::path(
    get,
    path = "/api/comments",
    tag = "Comment",
    responses(
        (status = 200, description = "All comments", body = Vec<CommentResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_comments(
    Extension(service): Extension<DynCommentQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/comments/{id}",
    tag = "Comment",
    params(("id" = i64, Path, description = "Comment ID")),
    responses(
        (status = 200, description = "Comment details", body = CommentResponse),
        (status = 400, description = "Invalid comment ID", body = ErrorResponse),
        (status = 404, description = "Comment not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_comment(
    Extension(service): Extension<DynCommentQueryService>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let id = parse_id(&id, INVALID_COMMENT_ID)?;

    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/comments/product/{product_id}",
    tag = "Comment",
    params(("product_id" = i64, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Comments of one product", body = Vec<CommentResponse>),
        (status = 400, description = "Invalid product ID", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_comments_by_product(
    Extension(service): Extension<DynCommentQueryService>,
    Path(product_id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let product_id = parse_id(&product_id, "Invalid product ID")?;

    let response = service.find_by_product(product_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/comments",
    tag = "Comment",
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "Comment created", body = CommentResponse),
        (status = 400, description = "Missing required fields", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_comment(
    Extension(service): Extension<DynCommentCommandService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateCommentRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_comment(body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/comments/{id}",
    tag = "Comment",
    params(("id" = i64, Path, description = "Comment ID")),
    request_body = UpdateCommentRequest,
    responses(
        (status = 200, description = "Comment updated", body = MessageResponse),
        (status = 400, description = "Invalid comment ID", body = ErrorResponse),
        (status = 404, description = "Comment not found or no changes made", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn update_comment(
    Extension(service): Extension<DynCommentCommandService>,
    Path(id): Path<String>,
    PartialJson(body): PartialJson<UpdateCommentRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let id = parse_id(&id, INVALID_COMMENT_ID)?;

    let response = service.update_comment(id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/comments/{id}",
    tag = "Comment",
    params(("id" = i64, Path, description = "Comment ID")),
    responses(
        (status = 200, description = "Comment deleted", body = MessageResponse),
        (status = 400, description = "Invalid comment ID", body = ErrorResponse),
        (status = 404, description = "Comment not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn delete_comment(
    Extension(service): Extension<DynCommentCommandService>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let id = parse_id(&id, INVALID_COMMENT_ID)?;

    let response = service.delete_comment(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn comment_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/comments", get(get_comments).post(create_comment))
        .route(
            "/api/comments/{id}",
            get(get_comment).put(update_comment).delete(delete_comment),
        )
        .route(
            "/api/comments/product/{product_id}",
            get(get_comments_by_product),
        )
        .layer(Extension(app_state.di_container.comment_query.clone()))
        .layer(Extension(app_state.di_container.comment_command.clone()))
}
