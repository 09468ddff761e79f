use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{Content, ContentType, Tone, UserProfile};
use super::evaluation::QualityError;
use super::generation::IdeaRequest;
use super::service::ContentQualityService;

#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    pub content: Content,
    #[serde(default)]
    pub profile: UserProfile,
}

#[derive(Debug, Deserialize)]
pub struct VariationsRequest {
    pub content: Content,
    #[serde(default)]
    pub count: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct EnhanceRequest {
    pub content: Content,
    #[serde(default)]
    pub profile: UserProfile,
}

#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    pub raw: String,
    #[serde(default)]
    pub content_type: ContentType,
    #[serde(default)]
    pub tone: Tone,
}

/// Router builder exposing the content quality endpoints.
pub fn content_router(service: Arc<ContentQualityService>) -> Router {
    Router::new()
        .route("/api/v1/content/validate", post(validate_handler))
        .route("/api/v1/content/variations", post(variations_handler))
        .route("/api/v1/content/enhance", post(enhance_handler))
        .route("/api/v1/content/ideas", post(ideas_handler))
        .route("/api/v1/content/parse", post(parse_handler))
        .with_state(service)
}

fn rejection(error: QualityError) -> Response {
    let payload = json!({ "error": error.to_string() });
    (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
}

pub(crate) async fn validate_handler(
    State(service): State<Arc<ContentQualityService>>,
    Json(request): Json<ValidateRequest>,
) -> Response {
    match service.validate(&request.content, &request.profile) {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(error) => rejection(error),
    }
}

pub(crate) async fn variations_handler(
    State(service): State<Arc<ContentQualityService>>,
    Json(request): Json<VariationsRequest>,
) -> Response {
    match service.variations(&request.content, request.count) {
        Ok(variations) => (StatusCode::OK, Json(variations)).into_response(),
        Err(error) => rejection(error),
    }
}

pub(crate) async fn enhance_handler(
    State(service): State<Arc<ContentQualityService>>,
    Json(request): Json<EnhanceRequest>,
) -> Response {
    match service.enhance(&request.content, &request.profile) {
        Ok(enhanced) => (StatusCode::OK, Json(enhanced)).into_response(),
        Err(error) => rejection(error),
    }
}

pub(crate) async fn ideas_handler(
    State(service): State<Arc<ContentQualityService>>,
    Json(request): Json<IdeaRequest>,
) -> Response {
    (StatusCode::OK, Json(service.ideas(&request))).into_response()
}

pub(crate) async fn parse_handler(
    State(service): State<Arc<ContentQualityService>>,
    Json(request): Json<ParseRequest>,
) -> Response {
    match service.parse_draft(&request.raw, request.content_type, request.tone) {
        Ok(content) => (StatusCode::OK, Json(content)).into_response(),
        Err(error) => rejection(error),
    }
}
