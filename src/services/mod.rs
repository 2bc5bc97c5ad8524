//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 엔티티별 서비스가 저장소 트레이트 객체(`Arc<dyn ...Repository>`)를 보유하며,
//! 중복 CRM 검사, 삭제 전 존재 확인, 저장소 에러의 HTTP 에러 매핑을 담당합니다.
//! 서비스 인스턴스는 [`AppContext`](crate::core::context::AppContext)가 생성하여
//! `web::Data`로 핸들러에 주입합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::physicians::InMemoryPhysicianRepository;
//! use crate::services::physicians::PhysicianService;
//!
//! let service = PhysicianService::new(Arc::new(InMemoryPhysicianRepository::new()));
//! let physicians = service.list_physicians(PhysicianFilter::default()).await?;
//! ```

use log::error;
use crate::{core::errors::AppError, repositories::StoreError};

pub mod physicians;
pub mod specialties;
pub mod users;

/// 저장소 에러 원인을 기록하고 라우트의 실패 메시지를 담은 500 에러로 변환합니다.
pub(crate) fn store_failure(message: &'static str) -> impl FnOnce(StoreError) -> AppError {
    move |err| {
        error!("{}: {}", message, err);
        AppError::DatabaseError(message.to_string())
    }
}
