use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::{error::AppError, state::AppState};

/// Bearer-token guard. Resolves to the user id of a live session.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser(pub Uuid);

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(AppError::unauthorized)?;

        // Expect "Bearer <token>"
        let token = header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(AppError::unauthorized)?;

        let claims = state.keys.verify(token).map_err(|e| {
            warn!(error = %e, "rejected bearer token");
            AppError::unauthorized()
        })?;

        // A signature alone is not enough: the token must belong to a stored session.
        let session = state.store.find_session_by_token(token).await?;
        match session {
            Some(s) if s.user_id == claims.sub => {
                debug!(user_id = %s.user_id, session_id = %s.id, "session resolved");
                Ok(AuthUser(s.user_id))
            }
            _ => {
                warn!(user_id = %claims.sub, "token has no live session");
                Err(AppError::unauthorized())
            }
        }
    }
}
