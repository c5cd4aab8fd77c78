use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::instrument;

use crate::{
    auth::extractors::AuthUser,
    error::AppError,
    state::AppState,
    users::{
        dto::{CreatedUser, RegisterRequest, UserProfile},
        services::{create_user, get_user},
    },
    validation::ValidatedJson,
};

pub fn user_routes() -> Router<AppState> {
    Router::new().route("/users", get(get_me).post(register))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<CreatedUser>), AppError> {
    let user = create_user(state.store.as_ref(), payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedUser {
            id: user.id,
            name: user.name,
            email: user.email,
        }),
    ))
}

#[instrument(skip(state))]
pub async fn get_me(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<UserProfile>, AppError> {
    let profile = get_user(state.store.as_ref(), user_id).await?;
    Ok(Json(profile))
}
