use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use launchpad_core::error::CoreError;
use launchpad_core::roles::ROLE_ADMIN;
use launchpad_core::types::DbId;
use launchpad_db::repositories::UserRepo;

use crate::auth::cookie::access_token_from_headers;
use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// The caller, as proven by a valid access token.
///
/// The token is taken from `Authorization: Bearer <token>` when present,
/// otherwise from the `access_token` cookie. A malformed `Authorization`
/// header is rejected outright rather than falling back to the cookie.
///
/// `role` is read from the account row on every request, so a deactivated
/// account is refused and a role change applies before the token expires.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: DbId,
    pub role: String,
}

impl AuthUser {
    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }
}

fn unauthorized(msg: &str) -> AppError {
    AppError::Core(CoreError::Unauthorized(msg.into()))
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = match parts.headers.get(AUTHORIZATION) {
            Some(value) => value
                .to_str()
                .ok()
                .and_then(|v| v.strip_prefix("Bearer "))
                .map(str::to_string)
                .ok_or_else(|| {
                    unauthorized("Invalid Authorization format. Expected: Bearer <token>")
                })?,
            None => access_token_from_headers(&parts.headers)
                .ok_or_else(|| unauthorized("Authentication required"))?,
        };

        let claims = validate_token(&token, &state.config.jwt)
            .map_err(|_| unauthorized("Invalid or expired token"))?;

        let role = UserRepo::active_role(&state.pool, claims.sub)
            .await?
            .ok_or_else(|| unauthorized("Account is inactive or no longer exists"))?;
        if role != claims.role {
            tracing::debug!(user_id = claims.sub, token_role = %claims.role, %role, "Role changed since token issue");
        }

        Ok(AuthUser {
            user_id: claims.sub,
            role,
        })
    }
}
