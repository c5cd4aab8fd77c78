use std::collections::HashSet;

use tracing::{info, warn};

use crate::{
    error::AppError,
    materials::repo_types::{Material, NewMaterial},
    store::{Store, StoreError},
};

const NAME_TAKEN: &str = "A material with this name already exists";

/// Creates the whole batch or nothing.
pub async fn create_materials(
    store: &dyn Store,
    batch: Vec<NewMaterial>,
) -> Result<Vec<Material>, AppError> {
    let mut seen = HashSet::with_capacity(batch.len());
    for m in &batch {
        if !seen.insert(m.name.as_str()) {
            warn!(material = %m.name, "duplicate material name in request");
            return Err(AppError::Conflict("The request repeats a material name".into()));
        }
    }

    for m in &batch {
        if store.find_material_by_name(&m.name).await?.is_some() {
            warn!(material = %m.name, "material name taken");
            return Err(AppError::Conflict(NAME_TAKEN.into()));
        }
    }

    let created = store.create_materials(&batch).await.map_err(|e| match e {
        StoreError::UniqueViolation { .. } => AppError::Conflict(NAME_TAKEN.into()),
        other => other.into(),
    })?;

    info!(count = created.len(), "materials created");
    Ok(created)
}

pub async fn list_materials(store: &dyn Store) -> Result<Vec<Material>, AppError> {
    Ok(store.list_materials().await?)
}
