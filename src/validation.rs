//! Request validation. Every failure is reported as a `field - message` line.

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use lazy_static::lazy_static;
use regex::Regex;
use serde::de::DeserializeOwned;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

use crate::error::AppError;

/// Turns a raw deserialized body into checked domain parameters.
pub trait Validate {
    type Valid;

    fn validate(self) -> Result<Self::Valid, Vec<String>>;
}

/// `Json` that only reaches the handler once `T::validate` has passed.
pub struct ValidatedJson<T: Validate>(pub T::Valid);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: Validate + DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(raw) = Json::<serde_json::Value>::from_request(req, state)
            .await
            .map_err(|rejection| {
                AppError::Validation(vec![format!("body - {}", rejection.body_text())])
            })?;

        if !raw.is_object() {
            return Err(AppError::Validation(vec!["body - Expected object".into()]));
        }

        let body: T = serde_json::from_value(raw)
            .map_err(|e| AppError::Validation(vec![format!("body - {e}")]))?;

        body.validate().map(ValidatedJson).map_err(AppError::Validation)
    }
}

/// `Path` whose parse failures are reported like body validation errors.
pub struct ValidatedPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ValidatedPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                AppError::Validation(vec![format!("id - {}", rejection.body_text())])
            })?;
        Ok(ValidatedPath(value))
    }
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

pub fn require_email(field: &str, email: &str, errors: &mut Vec<String>) {
    if email.is_empty() {
        errors.push(format!("{field} - Required"));
    } else if !is_valid_email(email) {
        errors.push(format!("{field} - Invalid email"));
    }
}

/// Trims `value` and records an error when nothing is left.
pub fn require_text(field: &str, value: &str, errors: &mut Vec<String>) -> String {
    let value = value.trim();
    if value.is_empty() {
        errors.push(format!("{field} - Required"));
    }
    value.to_string()
}

pub fn require_datetime(
    field: &str,
    value: &str,
    errors: &mut Vec<String>,
) -> Option<OffsetDateTime> {
    if value.trim().is_empty() {
        errors.push(format!("{field} - Required"));
        return None;
    }
    match OffsetDateTime::parse(value.trim(), &Rfc3339) {
        Ok(dt) => Some(dt),
        Err(_) => {
            errors.push(format!("{field} - Invalid datetime"));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_rules() {
        assert!(is_valid_email("ana@obra.com"));
        assert!(!is_valid_email("ana@obra"));
        assert!(!is_valid_email("ana obra@x.com"));
        assert_eq!(normalize_email("  Ana@Obra.COM "), "ana@obra.com");

        let mut errors = Vec::new();
        require_email("email", "", &mut errors);
        require_email("email", "nope", &mut errors);
        assert_eq!(errors, vec!["email - Required", "email - Invalid email"]);
    }

    #[test]
    fn text_is_trimmed_and_required() {
        let mut errors = Vec::new();
        assert_eq!(require_text("name", "  Torre A ", &mut errors), "Torre A");
        require_text("client", "   ", &mut errors);
        assert_eq!(errors, vec!["client - Required"]);
    }

    #[test]
    fn datetime_must_be_rfc3339() {
        let mut errors = Vec::new();
        assert!(require_datetime("initialDate", "2024-03-01T08:00:00Z", &mut errors).is_some());
        assert!(require_datetime("endDate", "01/03/2024", &mut errors).is_none());
        assert_eq!(errors, vec!["endDate - Invalid datetime"]);
    }
}
