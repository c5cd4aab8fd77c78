use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::instrument;
use uuid::Uuid;

use crate::{
    auth::extractors::AuthUser,
    constructions::{
        dto::ConstructionRequest,
        repo_types::Construction,
        services::{
            create_construction, delete_construction, get_construction, list_constructions,
            update_construction,
        },
    },
    error::AppError,
    state::AppState,
    validation::{ValidatedJson, ValidatedPath},
};

pub fn construction_routes() -> Router<AppState> {
    Router::new()
        .route("/constructions", get(list).post(create))
        .route("/constructions/:id", get(show).patch(update).delete(remove))
}

#[instrument(skip(state, payload))]
pub async fn create(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    ValidatedJson(payload): ValidatedJson<ConstructionRequest>,
) -> Result<(StatusCode, Json<Construction>), AppError> {
    let construction = create_construction(state.store.as_ref(), payload, user_id).await?;
    Ok((StatusCode::CREATED, Json(construction)))
}

#[instrument(skip(state))]
pub async fn list(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<Construction>>, AppError> {
    Ok(Json(list_constructions(state.store.as_ref(), user_id).await?))
}

#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    ValidatedPath(id): ValidatedPath<Uuid>,
) -> Result<Json<Construction>, AppError> {
    Ok(Json(get_construction(state.store.as_ref(), user_id, id).await?))
}

#[instrument(skip(state, payload))]
pub async fn update(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    ValidatedPath(id): ValidatedPath<Uuid>,
    ValidatedJson(payload): ValidatedJson<ConstructionRequest>,
) -> Result<Json<Construction>, AppError> {
    let construction = update_construction(state.store.as_ref(), payload, user_id, id).await?;
    Ok(Json(construction))
}

#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    ValidatedPath(id): ValidatedPath<Uuid>,
) -> Result<StatusCode, AppError> {
    delete_construction(state.store.as_ref(), user_id, id).await?;
    Ok(StatusCode::OK)
}
