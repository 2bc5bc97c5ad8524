//! # Core Module
//!
//! 애플리케이션 전역에서 사용하는 핵심 구성 요소입니다.
//!
//! - [`context`] - 의존성 컨테이너 (`AppContext`): 저장소 선택, 서비스 조립, `web::Data` 등록
//! - [`errors`] - 통합 에러 타입 (`AppError`): HTTP 응답 매핑과 `ErrorContext` 확장 trait
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::{context::AppContext, errors::AppError};
//!
//! let context = AppContext::in_memory();
//!
//! async fn handler(service: web::Data<UserService>) -> Result<HttpResponse, AppError> {
//!     let users = service.list_users().await?;
//!     Ok(HttpResponse::Ok().json(users))
//! }
//! ```

pub mod context;
pub mod errors;

pub use context::*;
pub use errors::*;
