use axum::{extract::FromRequestParts, http::header};

use crate::{error::AppError, state::AppState};

/// Every caller maps to this user; the demo has no real accounts.
pub const DEMO_USER_ID: u64 = 1;

#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: u64,
}

impl AuthUser {
    pub fn demo() -> Self {
        Self {
            user_id: DEMO_USER_ID,
        }
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if !state.config.require_auth {
            return Ok(AuthUser::demo());
        }

        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .ok_or_else(|| AppError::Unauthorized("Missing Authorization header".into()))?;

        let auth_str = auth_header
            .to_str()
            .map_err(|_| AppError::Unauthorized("Invalid Authorization header".into()))?;

        let token = auth_str
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::Unauthorized("Invalid Authorization scheme".into()))?
            .trim();

        // Tokens are not verified; any non-empty bearer value is accepted.
        if token.is_empty() {
            return Err(AppError::Unauthorized("Missing bearer token".into()));
        }

        Ok(AuthUser::demo())
    }
}
