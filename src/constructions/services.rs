use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    constructions::repo_types::{Construction, ConstructionParams},
    error::AppError,
    store::{Store, StoreError},
};

const NAME_TAKEN: &str = "A construction with this name already exists";

fn name_taken() -> AppError {
    AppError::Conflict(NAME_TAKEN.into())
}

fn not_found() -> AppError {
    AppError::NotFound("Construction not found".into())
}

fn map_unique(e: StoreError) -> AppError {
    match e {
        StoreError::UniqueViolation { .. } => name_taken(),
        other => other.into(),
    }
}

/// Fails with Conflict when `name` belongs to a construction other than `exclude`.
async fn check_name_conflict(
    store: &dyn Store,
    name: &str,
    exclude: Option<Uuid>,
) -> Result<(), AppError> {
    match store.find_construction_by_name(name).await? {
        Some(existing) if Some(existing.id) != exclude => {
            warn!(
                construction_name = %name,
                construction_id = %existing.id,
                "construction name taken"
            );
            Err(name_taken())
        }
        _ => Ok(()),
    }
}

/// Existence is checked before the link, so a missing id is always NotFound.
async fn check_access(
    store: &dyn Store,
    user_id: Uuid,
    construction_id: Uuid,
) -> Result<Construction, AppError> {
    let construction = store
        .find_construction_by_id(construction_id)
        .await?
        .ok_or_else(not_found)?;

    if !store.is_user_linked(user_id, construction_id).await? {
        warn!(%user_id, %construction_id, "construction access denied");
        return Err(AppError::Unauthorized(
            "You do not have access to this construction".into(),
        ));
    }
    Ok(construction)
}

pub async fn create_construction(
    store: &dyn Store,
    params: ConstructionParams,
    user_id: Uuid,
) -> Result<Construction, AppError> {
    check_name_conflict(store, &params.name, None).await?;

    let construction = store
        .create_construction(&params, user_id)
        .await
        .map_err(map_unique)?;

    info!(%user_id, construction_id = %construction.id, "construction created");
    Ok(construction)
}

pub async fn list_constructions(
    store: &dyn Store,
    user_id: Uuid,
) -> Result<Vec<Construction>, AppError> {
    Ok(store.list_constructions_by_user(user_id).await?)
}

pub async fn get_construction(
    store: &dyn Store,
    user_id: Uuid,
    construction_id: Uuid,
) -> Result<Construction, AppError> {
    check_access(store, user_id, construction_id).await
}

pub async fn update_construction(
    store: &dyn Store,
    params: ConstructionParams,
    user_id: Uuid,
    construction_id: Uuid,
) -> Result<Construction, AppError> {
    check_name_conflict(store, &params.name, Some(construction_id)).await?;
    check_access(store, user_id, construction_id).await?;

    let construction = store
        .update_construction(construction_id, &params)
        .await
        .map_err(map_unique)?
        .ok_or_else(not_found)?;

    info!(%user_id, %construction_id, "construction updated");
    Ok(construction)
}

pub async fn delete_construction(
    store: &dyn Store,
    user_id: Uuid,
    construction_id: Uuid,
) -> Result<(), AppError> {
    check_access(store, user_id, construction_id).await?;

    if !store.delete_construction(construction_id).await? {
        return Err(not_found());
    }

    info!(%user_id, %construction_id, "construction deleted");
    Ok(())
}
