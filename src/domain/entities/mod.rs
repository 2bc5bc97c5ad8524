//! # Domain Entities Module
//!
//! 클리닉 도메인의 핵심 엔티티들을 정의합니다.
//! 각 엔티티는 MongoDB 컬렉션 문서와 1:1로 대응하며, 인메모리 저장소에서도 같은 구조를 사용합니다.
//!
//! ```text
//! entities/
//! ├── physicians/   - 의사 (컬렉션: medicos)
//! ├── specialties/  - 전문분야 (컬렉션: especialidades)
//! └── users/        - 사용자 계정 (컬렉션: usuarios)
//! ```
//!
//! ## 공통 규칙
//!
//! - `_id`는 생성 시 할당되는 UUID v4 문자열입니다.
//! - 생성/수정 시각은 `chrono::DateTime<Utc>`로 기록됩니다.
//! - 수정은 `*Changes` 타입으로 표현하며, `None` 필드는 기존 값을 유지합니다.

pub mod physicians;
pub mod specialties;
pub mod users;

pub use physicians::*;
pub use specialties::*;
pub use users::*;
