use tracing::{info, warn};

use crate::{
    auth::{
        dto::{LoginParams, LoginResponse, SessionUser},
        jwt::JwtKeys,
        password::verify_password,
    },
    error::AppError,
    store::Store,
};

/// Checks the credentials, issues a token and records it as a session.
/// Unknown e-mail and wrong password fail identically.
pub async fn sign_in(
    store: &dyn Store,
    keys: &JwtKeys,
    params: LoginParams,
) -> Result<LoginResponse, AppError> {
    let Some(user) = store.find_user_by_email(&params.email).await? else {
        warn!(email = %params.email, "login unknown email");
        return Err(AppError::InvalidCredentials);
    };

    if !verify_password(&params.password, &user.password_hash)? {
        warn!(user_id = %user.id, "login invalid password");
        return Err(AppError::InvalidCredentials);
    }

    let token = keys.sign(user.id)?;
    let session = store.create_session(user.id, &token).await?;

    info!(user_id = %user.id, session_id = %session.id, "user logged in");
    Ok(LoginResponse {
        user: SessionUser {
            id: user.id,
            email: user.email,
        },
        token: session.token,
    })
}
