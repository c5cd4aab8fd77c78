use axum::{extract::State, routing::post, Json, Router};
use tracing::instrument;

use crate::{
    auth::{dto::{LoginRequest, LoginResponse}, services::sign_in},
    error::AppError,
    state::AppState,
    validation::ValidatedJson,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/auth/login", post(login))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let res = sign_in(state.store.as_ref(), &state.keys, payload).await?;
    Ok(Json(res))
}
