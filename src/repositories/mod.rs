//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 엔티티별 저장소 트레이트와 두 가지 구현체를 제공합니다.
//!
//! - **MongoDB 구현체**: `medicos`, `especialidades`, `usuarios` 컬렉션에 영구 저장
//! - **인메모리 구현체**: `RwLock`으로 보호되는 벡터에 저장 (로컬 실행, 테스트용)
//!
//! 모든 메서드는 [`StoreResult`]를 반환합니다. HTTP 상태 코드로의 매핑은
//! 서비스 계층이 담당하며, 이 계층은 저장소 수준의 에러 종류만 구분합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::physicians::{InMemoryPhysicianRepository, PhysicianRepository};
//!
//! let repo: Arc<dyn PhysicianRepository> = Arc::new(InMemoryPhysicianRepository::new());
//! let physician = repo.find_by_crm("12345-SP").await?;
//! ```

use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};
use thiserror::Error;

pub mod physicians;
pub mod specialties;
pub mod users;

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 저장소 계층 에러
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StoreError {
    /// 조건에 맞는 레코드가 없음
    #[error("레코드를 찾을 수 없습니다")]
    NotFound,

    /// 고유 제약 조건 위반
    #[error("중복 키: {0}")]
    DuplicateKey(String),

    /// 연결, 쿼리, 직렬화 등 그 밖의 저장소 오류
    #[error("저장소 오류: {0}")]
    Backend(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<MongoError> for StoreError {
    fn from(err: MongoError) -> Self {
        if is_duplicate_key(&err) {
            StoreError::DuplicateKey(err.to_string())
        } else {
            StoreError::Backend(err.to_string())
        }
    }
}

impl From<mongodb::bson::ser::Error> for StoreError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        StoreError::Backend(format!("BSON 직렬화 실패: {}", err))
    }
}

/// 쓰기 에러가 고유 인덱스 위반(11000)인지 확인합니다.
fn is_duplicate_key(err: &MongoError) -> bool {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

/// 인메모리 저장소의 잠금이 오염(poisoned)된 경우의 에러
pub(crate) fn poisoned_lock() -> StoreError {
    StoreError::Backend("인메모리 저장소 잠금 획득 실패".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        assert_eq!(StoreError::NotFound.to_string(), "레코드를 찾을 수 없습니다");
        assert_eq!(
            StoreError::DuplicateKey("crm".to_string()).to_string(),
            "중복 키: crm"
        );
        assert!(poisoned_lock().to_string().starts_with("저장소 오류"));
    }
}
