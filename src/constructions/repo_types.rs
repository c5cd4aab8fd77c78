use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Construction {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub client: String,
    pub technical_manager: String,
    #[serde(with = "time::serde::rfc3339")]
    pub initial_date: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub end_date: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Validated fields shared by create and update.
#[derive(Debug, Clone)]
pub struct ConstructionParams {
    pub name: String,
    pub address: String,
    pub client: String,
    pub technical_manager: String,
    pub initial_date: OffsetDateTime,
    pub end_date: OffsetDateTime,
}
