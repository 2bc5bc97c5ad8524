//! 전문분야 데이터 액세스 계층

use async_trait::async_trait;
use crate::domain::entities::specialties::Specialty;
use super::StoreResult;

pub mod specialty_repo;
pub mod memory_repo;

pub use specialty_repo::MongoSpecialtyRepository;
pub use memory_repo::InMemorySpecialtyRepository;

/// 전문분야 저장소 트레이트
#[async_trait]
pub trait SpecialtyRepository: Send + Sync {
    async fn insert(&self, specialty: Specialty) -> StoreResult<Specialty>;

    /// 모든 전문분야를 저장 순서대로 반환합니다.
    async fn find_all(&self) -> StoreResult<Vec<Specialty>>;
}
