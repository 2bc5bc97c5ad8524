//! # 의사 관련 요청 DTO 모듈
//!
//! HTTP 요청 본문과 쿼리 문자열을 구조화된 타입으로 변환하고 `validator`로 검증합니다.
//! JSON 필드명은 외부 API 계약에 따라 포르투갈어(`nome`, `telefone`, `biografia`, `especialidades`)를 사용합니다.

pub mod create_physician_request;
pub mod update_physician_request;
pub mod physician_list_query;

pub use create_physician_request::CreatePhysicianRequest;
pub use update_physician_request::UpdatePhysicianRequest;
pub use physician_list_query::PhysicianListQuery;
