//! Caller identity

use crate::{ApiError, AppState};

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

pub const USER_ID_HEADER: &str = "X-User-Id";

/// Extracts the acting user from the request
///
/// Reads the `X-User-Id` header. A missing or malformed header falls back
/// to the configured default user.
pub struct UserId(pub Uuid);

impl FromRequestParts<AppState> for UserId {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            #[allow(clippy::collapsible_if)]
            if let Some(header_value) = parts.headers.get(USER_ID_HEADER) {
                if let Ok(user_id_str) = header_value.to_str() {
                    if let Ok(uuid) = Uuid::parse_str(user_id_str) {
                        log::debug!("Using user ID from {} header: {}", USER_ID_HEADER, uuid);
                        return Ok(UserId(uuid));
                    }
                    log::warn!("Invalid UUID in {} header: {}", USER_ID_HEADER, user_id_str);
                }
            }

            let default_user_id = state.api_config.default_user_uuid();
            log::debug!("Using default user ID: {}", default_user_id);

            Ok(UserId(default_user_id))
        }
    }
}
