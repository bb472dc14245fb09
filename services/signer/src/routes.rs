//! Signer service routes

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::{debug, error, info};

use crate::{
    error::{ApiError, ApiResult},
    extractors::BearerPresent,
    fingerprint::fingerprint,
    models::{SignRequest, SignResponse, VerifyRequest, VerifyResponse},
    state::AppState,
    validation::{validate_sign_request, validate_verify_request},
};

/// Create the router for the signer service
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/sign", post(sign_answers).fallback(method_not_allowed))
        .route("/verify", post(verify_signature).fallback(method_not_allowed))
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let database = state.session_store.health_check().await.unwrap_or(false);

    Json(json!({
        "status": "ok",
        "service": "signer-service",
        "database": database
    }))
}

/// Any method other than POST on a signer route
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Decode a JSON body regardless of the declared content type
fn parse_body<T: DeserializeOwned>(body: &Bytes) -> ApiResult<T> {
    serde_json::from_slice(body).map_err(|e| {
        debug!("Rejected request body: {}", e);
        ApiError::BadRequest("Invalid request format".to_string())
    })
}

/// Fingerprint a user's answers and store them
pub async fn sign_answers(
    State(state): State<AppState>,
    _bearer: BearerPresent,
    body: Bytes,
) -> ApiResult<impl IntoResponse> {
    let payload: SignRequest = parse_body(&body)?;
    let answers = validate_sign_request(&payload).map_err(ApiError::BadRequest)?;

    let signature = fingerprint(&payload.user_id, answers);

    state
        .session_store
        .insert(&payload.user_id, &signature, answers)
        .await
        .map_err(|e| {
            error!("Failed to save session: {}", e);
            ApiError::InternalServerError
        })?;

    info!(user_id = %payload.user_id, "Answers signed");

    Ok((StatusCode::CREATED, Json(SignResponse { signature })))
}

/// Return the answers stored under a user id and signature
pub async fn verify_signature(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<VerifyResponse>> {
    let payload: VerifyRequest = parse_body(&body)?;
    validate_verify_request(&payload).map_err(ApiError::BadRequest)?;

    let session = state
        .session_store
        .lookup(&payload.user_id, &payload.signature)
        .await
        .map_err(|e| {
            error!("Failed to fetch session: {}", e);
            ApiError::InternalServerError
        })?
        .ok_or_else(|| ApiError::NotFound("No matching session found".to_string()))?;

    info!(user_id = %payload.user_id, "Signature verified");

    Ok(Json(VerifyResponse::from(session)))
}
