use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    auth::password::hash_password,
    error::AppError,
    store::{Store, StoreError},
    users::{
        dto::{NewUserParams, UserProfile},
        repo_types::{NewUser, User},
    },
};

/// Registers a user. The password is stored only as an Argon2 hash.
pub async fn create_user(store: &dyn Store, params: NewUserParams) -> Result<User, AppError> {
    if store.find_user_by_email(&params.email).await?.is_some() {
        warn!(email = %params.email, "email already registered");
        return Err(AppError::DuplicatedEmail);
    }

    let password_hash = hash_password(&params.password)?;
    let new = NewUser {
        name: params.name,
        email: params.email,
        password_hash,
    };

    let user = store.create_user(&new).await.map_err(|e| match e {
        StoreError::UniqueViolation { .. } => AppError::DuplicatedEmail,
        other => other.into(),
    })?;

    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok(user)
}

pub async fn get_user(store: &dyn Store, user_id: Uuid) -> Result<UserProfile, AppError> {
    let user = store
        .find_user_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;
    Ok(UserProfile {
        name: user.name,
        email: user.email,
    })
}
