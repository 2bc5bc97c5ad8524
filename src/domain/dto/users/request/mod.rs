//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 데이터를 구조화된 Rust 타입으로 변환하고 검증합니다.
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::domain::dto::users::request::CreateUserRequest;
//!
//! #[post("")]
//! async fn create_user(payload: web::Json<CreateUserRequest>) -> Result<HttpResponse, AppError> {
//!     payload.validate().map_err(|e| AppError::ValidationError(e.to_string()))?;
//!     // ...
//! }
//! ```
//!
//! 검증 실패 시 `validator::ValidationErrors`가 발생하며,
//! 핸들러에서 HTTP 400 Bad Request 응답으로 변환됩니다.

pub mod create_user_request;
pub mod update_user_request;

pub use create_user_request::CreateUserRequest;
pub use update_user_request::UpdateUserRequest;
