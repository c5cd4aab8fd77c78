use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    auth::repo_types::Session,
    store::{PgStore, StoreResult},
};

#[async_trait]
pub trait SessionRepo: Send + Sync {
    async fn create_session(&self, user_id: Uuid, token: &str) -> StoreResult<Session>;
    async fn find_session_by_token(&self, token: &str) -> StoreResult<Option<Session>>;
}

#[async_trait]
impl SessionRepo for PgStore {
    async fn create_session(&self, user_id: Uuid, token: &str) -> StoreResult<Session> {
        let session = sqlx::query_as::<_, Session>(
            r#"
            INSERT INTO sessions (id, user_id, token)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, token
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(token)
        .fetch_one(&self.pool)
        .await?;
        Ok(session)
    }

    async fn find_session_by_token(&self, token: &str) -> StoreResult<Option<Session>> {
        let session = sqlx::query_as::<_, Session>(
            r#"
            SELECT id, user_id, token
            FROM sessions
            WHERE token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;
        Ok(session)
    }
}
