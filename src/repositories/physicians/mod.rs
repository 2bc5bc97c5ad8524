//! 의사 데이터 액세스 계층
//!
//! [`PhysicianRepository`] 트레이트와 MongoDB / 인메모리 구현체를 제공합니다.
//! 의사는 CRM으로 식별되며, CRM의 고유성은 저장소 수준에서도 보장됩니다.

use async_trait::async_trait;
use crate::domain::entities::physicians::{Physician, PhysicianChanges, PhysicianFilter};
use super::StoreResult;

pub mod physician_repo;
pub mod memory_repo;

pub use physician_repo::MongoPhysicianRepository;
pub use memory_repo::InMemoryPhysicianRepository;

/// 의사 저장소 트레이트
#[async_trait]
pub trait PhysicianRepository: Send + Sync {
    /// CRM으로 의사를 조회합니다.
    async fn find_by_crm(&self, crm: &str) -> StoreResult<Option<Physician>>;

    /// 필터 조건에 맞는 의사 목록을 저장 순서대로 반환합니다.
    async fn find_all(&self, filter: &PhysicianFilter) -> StoreResult<Vec<Physician>>;

    /// 새 의사를 저장합니다. 같은 CRM이 이미 있으면 `DuplicateKey`를 반환합니다.
    async fn insert(&self, physician: Physician) -> StoreResult<Physician>;

    /// CRM으로 찾은 의사에 수정 내용을 적용하고 수정된 레코드를 반환합니다.
    ///
    /// 대상이 없으면 `NotFound`를 반환합니다.
    async fn update_by_crm(&self, crm: &str, changes: &PhysicianChanges) -> StoreResult<Physician>;

    /// CRM으로 의사를 삭제합니다. 대상이 없으면 `NotFound`를 반환합니다.
    async fn delete_by_crm(&self, crm: &str) -> StoreResult<()>;
}
