use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    materials::repo_types::{Material, NewMaterial},
    store::{PgStore, StoreResult},
};

#[async_trait]
pub trait MaterialRepo: Send + Sync {
    async fn find_material_by_name(&self, name: &str) -> StoreResult<Option<Material>>;
    async fn list_materials(&self) -> StoreResult<Vec<Material>>;
    /// All-or-nothing insert of a batch.
    async fn create_materials(&self, batch: &[NewMaterial]) -> StoreResult<Vec<Material>>;
}

#[async_trait]
impl MaterialRepo for PgStore {
    async fn find_material_by_name(&self, name: &str) -> StoreResult<Option<Material>> {
        let row = sqlx::query_as::<_, Material>(
            r#"
            SELECT id, name, unit, created_at, updated_at
            FROM materials
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn list_materials(&self) -> StoreResult<Vec<Material>> {
        let rows = sqlx::query_as::<_, Material>(
            r#"
            SELECT id, name, unit, created_at, updated_at
            FROM materials
            ORDER BY name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn create_materials(&self, batch: &[NewMaterial]) -> StoreResult<Vec<Material>> {
        let mut tx = self.pool.begin().await?;
        let mut created = Vec::with_capacity(batch.len());
        for m in batch {
            let row = sqlx::query_as::<_, Material>(
                r#"
                INSERT INTO materials (id, name, unit)
                VALUES ($1, $2, $3)
                RETURNING id, name, unit, created_at, updated_at
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(&m.name)
            .bind(&m.unit)
            .fetch_one(&mut *tx)
            .await?;
            created.push(row);
        }
        // Dropping `tx` on an early return above rolls everything back.
        tx.commit().await?;
        Ok(created)
    }
}
