//! Request extractors

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use tracing::warn;

use crate::{
    error::ApiError,
    state::AppState,
    validation::{BEARER_FORMAT_MESSAGE, validate_bearer_present},
};

/// Marker proving the request carried an `Authorization: Bearer <token>` header
///
/// Only the header shape is checked; the token is never decoded. The check is
/// skipped when `require_bearer` is off.
pub struct BearerPresent;

#[async_trait]
impl FromRequestParts<AppState> for BearerPresent {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if !state.require_bearer {
            return Ok(BearerPresent);
        }

        let auth_header = match parts.headers.get(AUTHORIZATION) {
            Some(value) => Some(
                value
                    .to_str()
                    .map_err(|_| ApiError::Unauthorized(BEARER_FORMAT_MESSAGE.to_string()))?,
            ),
            None => None,
        };

        validate_bearer_present(auth_header).map_err(|e| {
            warn!("Rejected request without bearer header: {}", e);
            ApiError::Unauthorized(e)
        })?;

        Ok(BearerPresent)
    }
}
