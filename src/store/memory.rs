//! In-memory store with the same uniqueness rules as the Postgres schema.

use async_trait::async_trait;
use time::OffsetDateTime;
use tokio::sync::Mutex;
use uuid::Uuid;

use super::{StoreError, StoreResult};
use crate::{
    auth::{repo::SessionRepo, repo_types::Session},
    constructions::{
        repo::ConstructionRepo,
        repo_types::{Construction, ConstructionParams},
    },
    materials::{
        repo::MaterialRepo,
        repo_types::{Material, NewMaterial},
    },
    users::{
        repo::UserRepo,
        repo_types::{NewUser, User},
    },
};

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    sessions: Vec<Session>,
    constructions: Vec<Construction>,
    user_constructions: Vec<(Uuid, Uuid)>,
    materials: Vec<Material>,
}

#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grants `user_id` access to an existing construction.
    pub async fn link(&self, user_id: Uuid, construction_id: Uuid) {
        self.tables
            .lock()
            .await
            .user_constructions
            .push((user_id, construction_id));
    }

    pub async fn user_count(&self) -> usize {
        self.tables.lock().await.users.len()
    }

    pub async fn session_count(&self) -> usize {
        self.tables.lock().await.sessions.len()
    }

    pub async fn link_count(&self, construction_id: Uuid) -> usize {
        self.tables
            .lock()
            .await
            .user_constructions
            .iter()
            .filter(|(_, c)| *c == construction_id)
            .count()
    }
}

fn unique(constraint: &str) -> StoreError {
    StoreError::UniqueViolation {
        constraint: constraint.to_string(),
    }
}

#[async_trait]
impl UserRepo for MemoryStore {
    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let t = self.tables.lock().await;
        Ok(t.users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_user_by_id(&self, id: Uuid) -> StoreResult<Option<User>> {
        let t = self.tables.lock().await;
        Ok(t.users.iter().find(|u| u.id == id).cloned())
    }

    async fn create_user(&self, new: &NewUser) -> StoreResult<User> {
        let mut t = self.tables.lock().await;
        if t.users.iter().any(|u| u.email == new.email) {
            return Err(unique("users_email_key"));
        }
        let user = User {
            id: Uuid::new_v4(),
            name: new.name.clone(),
            email: new.email.clone(),
            password_hash: new.password_hash.clone(),
        };
        t.users.push(user.clone());
        Ok(user)
    }
}

#[async_trait]
impl SessionRepo for MemoryStore {
    async fn create_session(&self, user_id: Uuid, token: &str) -> StoreResult<Session> {
        let mut t = self.tables.lock().await;
        if t.sessions.iter().any(|s| s.token == token) {
            return Err(unique("sessions_token_key"));
        }
        let session = Session {
            id: Uuid::new_v4(),
            user_id,
            token: token.to_string(),
        };
        t.sessions.push(session.clone());
        Ok(session)
    }

    async fn find_session_by_token(&self, token: &str) -> StoreResult<Option<Session>> {
        let t = self.tables.lock().await;
        Ok(t.sessions.iter().find(|s| s.token == token).cloned())
    }
}

#[async_trait]
impl ConstructionRepo for MemoryStore {
    async fn find_construction_by_name(&self, name: &str) -> StoreResult<Option<Construction>> {
        let t = self.tables.lock().await;
        Ok(t.constructions.iter().find(|c| c.name == name).cloned())
    }

    async fn find_construction_by_id(&self, id: Uuid) -> StoreResult<Option<Construction>> {
        let t = self.tables.lock().await;
        Ok(t.constructions.iter().find(|c| c.id == id).cloned())
    }

    async fn list_constructions_by_user(&self, user_id: Uuid) -> StoreResult<Vec<Construction>> {
        let t = self.tables.lock().await;
        Ok(t
            .constructions
            .iter()
            .filter(|c| t.user_constructions.contains(&(user_id, c.id)))
            .cloned()
            .collect())
    }

    async fn is_user_linked(&self, user_id: Uuid, construction_id: Uuid) -> StoreResult<bool> {
        let t = self.tables.lock().await;
        Ok(t.user_constructions.contains(&(user_id, construction_id)))
    }

    async fn create_construction(
        &self,
        params: &ConstructionParams,
        owner: Uuid,
    ) -> StoreResult<Construction> {
        let mut t = self.tables.lock().await;
        if t.constructions.iter().any(|c| c.name == params.name) {
            return Err(unique("constructions_name_key"));
        }
        let now = OffsetDateTime::now_utc();
        let construction = Construction {
            id: Uuid::new_v4(),
            name: params.name.clone(),
            address: params.address.clone(),
            client: params.client.clone(),
            technical_manager: params.technical_manager.clone(),
            initial_date: params.initial_date,
            end_date: params.end_date,
            created_at: now,
            updated_at: now,
        };
        t.constructions.push(construction.clone());
        t.user_constructions.push((owner, construction.id));
        Ok(construction)
    }

    async fn update_construction(
        &self,
        id: Uuid,
        params: &ConstructionParams,
    ) -> StoreResult<Option<Construction>> {
        let mut t = self.tables.lock().await;
        if t.constructions.iter().any(|c| c.name == params.name && c.id != id) {
            return Err(unique("constructions_name_key"));
        }
        let Some(c) = t.constructions.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };
        c.name = params.name.clone();
        c.address = params.address.clone();
        c.client = params.client.clone();
        c.technical_manager = params.technical_manager.clone();
        c.initial_date = params.initial_date;
        c.end_date = params.end_date;
        c.updated_at = OffsetDateTime::now_utc();
        Ok(Some(c.clone()))
    }

    async fn delete_construction(&self, id: Uuid) -> StoreResult<bool> {
        let mut t = self.tables.lock().await;
        t.user_constructions.retain(|(_, c)| *c != id);
        let before = t.constructions.len();
        t.constructions.retain(|c| c.id != id);
        Ok(t.constructions.len() < before)
    }
}

#[async_trait]
impl MaterialRepo for MemoryStore {
    async fn find_material_by_name(&self, name: &str) -> StoreResult<Option<Material>> {
        let t = self.tables.lock().await;
        Ok(t.materials.iter().find(|m| m.name == name).cloned())
    }

    async fn list_materials(&self) -> StoreResult<Vec<Material>> {
        let t = self.tables.lock().await;
        let mut all = t.materials.clone();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }

    async fn create_materials(&self, batch: &[NewMaterial]) -> StoreResult<Vec<Material>> {
        let mut t = self.tables.lock().await;
        // Validate the whole batch before touching the table.
        for (i, m) in batch.iter().enumerate() {
            let taken = t.materials.iter().any(|e| e.name == m.name)
                || batch[..i].iter().any(|e| e.name == m.name);
            if taken {
                return Err(unique("materials_name_key"));
            }
        }
        let now = OffsetDateTime::now_utc();
        let created: Vec<Material> = batch
            .iter()
            .map(|m| Material {
                id: Uuid::new_v4(),
                name: m.name.clone(),
                unit: m.unit.clone(),
                created_at: now,
                updated_at: now,
            })
            .collect();
        t.materials.extend(created.iter().cloned());
        Ok(created)
    }
}
