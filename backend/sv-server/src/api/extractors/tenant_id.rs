//! Tenant (organization) scoping

use crate::{ApiError, AppState};

use sv_db::is_valid_tenant_id;

use std::future::Future;
use std::panic::Location;

use axum::{extract::FromRequestParts, http::request::Parts};
use error_location::ErrorLocation;

pub const TENANT_ID_HEADER: &str = "X-Tenant-Id";

/// Extracts the tenant every survey operation is scoped to
///
/// Reads the `X-Tenant-Id` header, falling back to the configured default
/// tenant when absent. A header that is present but malformed is rejected
/// rather than silently mapped onto the default tenant.
pub struct TenantId(pub String);

impl FromRequestParts<AppState> for TenantId {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let Some(header_value) = parts.headers.get(TENANT_ID_HEADER) else {
                return Ok(TenantId(state.api_config.default_tenant_id.clone()));
            };

            match header_value.to_str() {
                Ok(tenant_id) if is_valid_tenant_id(tenant_id) => {
                    Ok(TenantId(tenant_id.to_string()))
                }
                _ => Err(ApiError::BadRequest {
                    message: format!(
                        "{} must match [A-Za-z0-9_-]{{1,64}}",
                        TENANT_ID_HEADER
                    ),
                    location: ErrorLocation::from(Location::caller()),
                }),
            }
        }
    }
}
