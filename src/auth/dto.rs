use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::validation::{normalize_email, require_email, Validate};

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct LoginParams {
    pub email: String,
    pub password: String,
}

impl Validate for LoginRequest {
    type Valid = LoginParams;

    fn validate(self) -> Result<LoginParams, Vec<String>> {
        let mut errors = Vec::new();
        let email = normalize_email(&self.email);
        require_email("email", &email, &mut errors);
        if self.password.is_empty() {
            errors.push("password - Required".into());
        }
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(LoginParams {
            email,
            password: self.password,
        })
    }
}

/// Response returned after a successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user: SessionUser,
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct SessionUser {
    pub id: Uuid,
    pub email: String,
}
