//! 인메모리 의사 리포지토리
//!
//! 프로세스 메모리에 레코드를 보관합니다. 삽입 순서가 목록 순서가 됩니다.

use std::sync::RwLock;
use async_trait::async_trait;
use crate::{
    domain::entities::physicians::{Physician, PhysicianChanges, PhysicianFilter},
    repositories::{poisoned_lock, StoreError, StoreResult},
};
use super::PhysicianRepository;

#[derive(Default)]
pub struct InMemoryPhysicianRepository {
    records: RwLock<Vec<Physician>>,
}

impl InMemoryPhysicianRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PhysicianRepository for InMemoryPhysicianRepository {
    async fn find_by_crm(&self, crm: &str) -> StoreResult<Option<Physician>> {
        let records = self.records.read().map_err(|_| poisoned_lock())?;

        Ok(records.iter().find(|p| p.crm == crm).cloned())
    }

    async fn find_all(&self, filter: &PhysicianFilter) -> StoreResult<Vec<Physician>> {
        let records = self.records.read().map_err(|_| poisoned_lock())?;

        Ok(records
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect())
    }

    async fn insert(&self, physician: Physician) -> StoreResult<Physician> {
        let mut records = self.records.write().map_err(|_| poisoned_lock())?;

        if records.iter().any(|p| p.crm == physician.crm) {
            return Err(StoreError::DuplicateKey(format!("crm: {}", physician.crm)));
        }

        records.push(physician.clone());
        Ok(physician)
    }

    async fn update_by_crm(&self, crm: &str, changes: &PhysicianChanges) -> StoreResult<Physician> {
        let mut records = self.records.write().map_err(|_| poisoned_lock())?;

        let physician = records
            .iter_mut()
            .find(|p| p.crm == crm)
            .ok_or(StoreError::NotFound)?;

        physician.apply(changes);
        Ok(physician.clone())
    }

    async fn delete_by_crm(&self, crm: &str) -> StoreResult<()> {
        let mut records = self.records.write().map_err(|_| poisoned_lock())?;

        let position = records
            .iter()
            .position(|p| p.crm == crm)
            .ok_or(StoreError::NotFound)?;

        records.remove(position);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn physician(name: &str, crm: &str, specialties: &[&str]) -> Physician {
        Physician::new(
            name.to_string(),
            crm.to_string(),
            None,
            None,
            None,
            specialties.iter().map(|s| s.to_string()).collect(),
        )
    }

    #[actix_web::test]
    async fn test_insert_rejects_duplicate_crm() {
        let repo = InMemoryPhysicianRepository::new();
        repo.insert(physician("Ana", "1", &[])).await.unwrap();

        let result = repo.insert(physician("Outra", "1", &[])).await;

        assert!(matches!(result, Err(StoreError::DuplicateKey(_))));
        let stored = repo.find_by_crm("1").await.unwrap().unwrap();
        assert_eq!(stored.name, "Ana");
    }

    #[actix_web::test]
    async fn test_find_all_keeps_insertion_order_and_filters() {
        let repo = InMemoryPhysicianRepository::new();
        repo.insert(physician("João", "1", &["Cardiologia"])).await.unwrap();
        repo.insert(physician("Pedro", "2", &["Cardiologia"])).await.unwrap();
        repo.insert(physician("Joana", "3", &["Pediatria"])).await.unwrap();

        let all = repo.find_all(&PhysicianFilter::default()).await.unwrap();
        let crms: Vec<&str> = all.iter().map(|p| p.crm.as_str()).collect();
        assert_eq!(crms, vec!["1", "2", "3"]);

        let by_name = repo
            .find_all(&PhysicianFilter::new(Some("jo".to_string()), None))
            .await
            .unwrap();
        assert_eq!(by_name.len(), 2);

        let by_both = repo
            .find_all(&PhysicianFilter::new(Some("jo".to_string()), Some("Cardiologia".to_string())))
            .await
            .unwrap();
        assert_eq!(by_both.len(), 1);
        assert_eq!(by_both[0].name, "João");
    }

    #[actix_web::test]
    async fn test_update_and_delete_missing_crm() {
        let repo = InMemoryPhysicianRepository::new();
        let changes = PhysicianChanges::new(Some("X".to_string()), None, None, None, None);

        assert_eq!(repo.update_by_crm("404", &changes).await, Err(StoreError::NotFound));
        assert_eq!(repo.delete_by_crm("404").await, Err(StoreError::NotFound));
    }

    #[actix_web::test]
    async fn test_update_then_delete() {
        let repo = InMemoryPhysicianRepository::new();
        repo.insert(physician("Ana", "1", &["Pediatria"])).await.unwrap();

        let changes = PhysicianChanges::new(None, Some(Some("1111".to_string())), None, None, None);
        let updated = repo.update_by_crm("1", &changes).await.unwrap();
        assert_eq!(updated.name, "Ana");
        assert_eq!(updated.phone.as_deref(), Some("1111"));
        assert_eq!(updated.specialties, vec!["Pediatria".to_string()]);

        repo.delete_by_crm("1").await.unwrap();
        assert!(repo.find_by_crm("1").await.unwrap().is_none());
    }
}
