//! 인메모리 전문분야 리포지토리

use std::sync::RwLock;
use async_trait::async_trait;
use crate::{
    domain::entities::specialties::Specialty,
    repositories::{poisoned_lock, StoreResult},
};
use super::SpecialtyRepository;

#[derive(Default)]
pub struct InMemorySpecialtyRepository {
    records: RwLock<Vec<Specialty>>,
}

impl InMemorySpecialtyRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SpecialtyRepository for InMemorySpecialtyRepository {
    async fn insert(&self, specialty: Specialty) -> StoreResult<Specialty> {
        let mut records = self.records.write().map_err(|_| poisoned_lock())?;

        records.push(specialty.clone());
        Ok(specialty)
    }

    async fn find_all(&self) -> StoreResult<Vec<Specialty>> {
        let records = self.records.read().map_err(|_| poisoned_lock())?;

        Ok(records.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_duplicate_names_are_allowed() {
        let repo = InMemorySpecialtyRepository::new();
        repo.insert(Specialty::new("Cardiologia".to_string())).await.unwrap();
        repo.insert(Specialty::new("Cardiologia".to_string())).await.unwrap();
        repo.insert(Specialty::new("Pediatria".to_string())).await.unwrap();

        let names: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();

        assert_eq!(names, vec!["Cardiologia", "Cardiologia", "Pediatria"]);
    }
}
