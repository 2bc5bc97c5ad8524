//! 사용자 데이터 액세스 계층
//!
//! [`UserRepository`] 트레이트와 MongoDB / 인메모리 구현체를 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::{InMemoryUserRepository, UserRepository};
//!
//! let repo = InMemoryUserRepository::new();
//! let users = repo.find_all().await?;
//! ```

use async_trait::async_trait;
use crate::domain::entities::users::{User, UserChanges};
use super::StoreResult;

pub mod user_repo;
pub mod memory_repo;

pub use user_repo::MongoUserRepository;
pub use memory_repo::InMemoryUserRepository;

/// 사용자 저장소 트레이트
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, user: User) -> StoreResult<User>;

    async fn find_all(&self) -> StoreResult<Vec<User>>;

    /// ID로 찾은 사용자를 수정합니다. 대상이 없으면 `NotFound`를 반환합니다.
    async fn update_by_id(&self, id: &str, changes: &UserChanges) -> StoreResult<User>;

    /// ID로 사용자를 삭제합니다. 대상이 없으면 `NotFound`를 반환합니다.
    async fn delete_by_id(&self, id: &str) -> StoreResult<()>;
}
