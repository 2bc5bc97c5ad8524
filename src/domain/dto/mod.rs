//! # Data Transfer Objects Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들입니다.
//!
//! ## 설계 원칙
//!
//! - **API 계약**: JSON 필드명은 포르투갈어(`nome`, `crm`, `telefone`, `email`,
//!   `biografia`, `especialidades`, `senha`)로 고정됩니다.
//! - **유효성 검증**: 요청 DTO는 `validator::Validate`를 구현하며, 핸들러가 서비스 호출 전에 검증합니다.
//! - **변환 패턴**:
//!   - Request → Entity: `into_entity()` / `into_changes()`
//!   - Entity → Response: `impl From<Entity> for Response`
//!
//! ## 구조
//!
//! ```text
//! dto/
//! ├── physicians/
//! │   ├── request/   - CreatePhysicianRequest, UpdatePhysicianRequest, PhysicianListQuery
//! │   └── response/  - PhysicianResponse
//! ├── specialties/
//! │   ├── request/   - CreateSpecialtyRequest
//! │   └── response/  - SpecialtyResponse
//! └── users/
//!     ├── request/   - CreateUserRequest, UpdateUserRequest
//!     └── response/  - UserResponse
//! ```

pub mod physicians;
pub mod specialties;
pub mod users;

