use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use tracing::instrument;

use crate::{
    auth::extractors::AuthUser,
    error::AppError,
    materials::{
        dto::CreateMaterialsRequest,
        repo_types::Material,
        services::{create_materials, list_materials},
    },
    state::AppState,
    validation::ValidatedJson,
};

pub fn material_routes() -> Router<AppState> {
    Router::new().route("/materials", get(list).post(create))
}

#[instrument(skip(state, payload))]
pub async fn create(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    ValidatedJson(payload): ValidatedJson<CreateMaterialsRequest>,
) -> Result<(StatusCode, Json<Vec<Material>>), AppError> {
    let created = create_materials(state.store.as_ref(), payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[instrument(skip(state))]
pub async fn list(
    State(state): State<AppState>,
    AuthUser(_user_id): AuthUser,
) -> Result<Json<Vec<Material>>, AppError> {
    Ok(Json(list_materials(state.store.as_ref()).await?))
}
