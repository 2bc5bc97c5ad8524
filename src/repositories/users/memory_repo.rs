//! 인메모리 사용자 리포지토리

use std::sync::RwLock;
use async_trait::async_trait;
use crate::{
    domain::entities::users::{User, UserChanges},
    repositories::{poisoned_lock, StoreError, StoreResult},
};
use super::UserRepository;

#[derive(Default)]
pub struct InMemoryUserRepository {
    records: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: User) -> StoreResult<User> {
        let mut records = self.records.write().map_err(|_| poisoned_lock())?;

        records.push(user.clone());
        Ok(user)
    }

    async fn find_all(&self) -> StoreResult<Vec<User>> {
        let records = self.records.read().map_err(|_| poisoned_lock())?;

        Ok(records.clone())
    }

    async fn update_by_id(&self, id: &str, changes: &UserChanges) -> StoreResult<User> {
        let mut records = self.records.write().map_err(|_| poisoned_lock())?;

        let user = records
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(StoreError::NotFound)?;

        user.apply(changes);
        Ok(user.clone())
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<()> {
        let mut records = self.records.write().map_err(|_| poisoned_lock())?;

        let before = records.len();
        records.retain(|u| u.id != id);

        if records.len() == before {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }
}
