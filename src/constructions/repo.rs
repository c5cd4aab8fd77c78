use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    constructions::repo_types::{Construction, ConstructionParams},
    store::{PgStore, StoreResult},
};

#[async_trait]
pub trait ConstructionRepo: Send + Sync {
    async fn find_construction_by_name(&self, name: &str) -> StoreResult<Option<Construction>>;
    async fn find_construction_by_id(&self, id: Uuid) -> StoreResult<Option<Construction>>;
    async fn list_constructions_by_user(&self, user_id: Uuid) -> StoreResult<Vec<Construction>>;
    async fn is_user_linked(&self, user_id: Uuid, construction_id: Uuid) -> StoreResult<bool>;
    /// Inserts the construction and links it to `owner` in one transaction.
    async fn create_construction(
        &self,
        params: &ConstructionParams,
        owner: Uuid,
    ) -> StoreResult<Construction>;
    async fn update_construction(
        &self,
        id: Uuid,
        params: &ConstructionParams,
    ) -> StoreResult<Option<Construction>>;
    /// Removes every user link first, then the record. Returns whether a record was removed.
    async fn delete_construction(&self, id: Uuid) -> StoreResult<bool>;
}

const CONSTRUCTION_COLUMNS: &str = "id, name, address, client, technical_manager, \
     initial_date, end_date, created_at, updated_at";

#[async_trait]
impl ConstructionRepo for PgStore {
    async fn find_construction_by_name(&self, name: &str) -> StoreResult<Option<Construction>> {
        let row = sqlx::query_as::<_, Construction>(&format!(
            "SELECT {CONSTRUCTION_COLUMNS} FROM constructions WHERE name = $1"
        ))
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn find_construction_by_id(&self, id: Uuid) -> StoreResult<Option<Construction>> {
        let row = sqlx::query_as::<_, Construction>(&format!(
            "SELECT {CONSTRUCTION_COLUMNS} FROM constructions WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn list_constructions_by_user(&self, user_id: Uuid) -> StoreResult<Vec<Construction>> {
        let rows = sqlx::query_as::<_, Construction>(
            r#"
            SELECT c.id, c.name, c.address, c.client, c.technical_manager,
                   c.initial_date, c.end_date, c.created_at, c.updated_at
            FROM constructions c
            JOIN user_constructions uc ON uc.construction_id = c.id
            WHERE uc.user_id = $1
            ORDER BY c.created_at ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn is_user_linked(&self, user_id: Uuid, construction_id: Uuid) -> StoreResult<bool> {
        let linked: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM user_constructions
                WHERE user_id = $1 AND construction_id = $2
            )
            "#,
        )
        .bind(user_id)
        .bind(construction_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(linked)
    }

    async fn create_construction(
        &self,
        params: &ConstructionParams,
        owner: Uuid,
    ) -> StoreResult<Construction> {
        let mut tx = self.pool.begin().await?;

        let construction = sqlx::query_as::<_, Construction>(&format!(
            r#"
            INSERT INTO constructions
                (id, name, address, client, technical_manager, initial_date, end_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {CONSTRUCTION_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(&params.name)
        .bind(&params.address)
        .bind(&params.client)
        .bind(&params.technical_manager)
        .bind(params.initial_date)
        .bind(params.end_date)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO user_constructions (id, user_id, construction_id)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(owner)
        .bind(construction.id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(construction)
    }

    async fn update_construction(
        &self,
        id: Uuid,
        params: &ConstructionParams,
    ) -> StoreResult<Option<Construction>> {
        let row = sqlx::query_as::<_, Construction>(&format!(
            r#"
            UPDATE constructions
               SET name = $2, address = $3, client = $4, technical_manager = $5,
                   initial_date = $6, end_date = $7, updated_at = now()
             WHERE id = $1
            RETURNING {CONSTRUCTION_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&params.name)
        .bind(&params.address)
        .bind(&params.client)
        .bind(&params.technical_manager)
        .bind(params.initial_date)
        .bind(params.end_date)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete_construction(&self, id: Uuid) -> StoreResult<bool> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM user_constructions WHERE construction_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let removed = sqlx::query("DELETE FROM constructions WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        tx.commit().await?;
        Ok(removed > 0)
    }
}
