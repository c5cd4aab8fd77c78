use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::validation::{normalize_email, require_email, require_text, Validate};

pub const MIN_PASSWORD_LEN: usize = 6;

/// Request body for user registration.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct NewUserParams {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl Validate for RegisterRequest {
    type Valid = NewUserParams;

    fn validate(self) -> Result<NewUserParams, Vec<String>> {
        let mut errors = Vec::new();
        let name = require_text("name", &self.name, &mut errors);
        let email = normalize_email(&self.email);
        require_email("email", &email, &mut errors);
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.push(format!(
                "password - String must contain at least {MIN_PASSWORD_LEN} character(s)"
            ));
        }
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(NewUserParams {
            name,
            email,
            password: self.password,
        })
    }
}

/// Returned once a user is created.
#[derive(Debug, Serialize)]
pub struct CreatedUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

/// Public profile of the authenticated user.
#[derive(Debug, Serialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
}
