use sqlx::FromRow;
use uuid::Uuid;

/// Issued login token. One row per successful login.
#[derive(Debug, Clone, FromRow)]
pub struct Session {
    pub id: Uuid,
    pub user_id: Uuid,
    pub token: String,
}
