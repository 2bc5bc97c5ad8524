//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 모듈로, 저장되는 엔티티와 HTTP 경계의 DTO를 담당합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - 저장소에 기록되는 도메인 객체 (Physician, Specialty, User)
//! └── DTOs          - 요청/응답 데이터 전송 객체 (포르투갈어 JSON 필드명)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories: MongoDB / In-Memory)
//! ```
//!
//! ## 엔티티와 DTO의 분리
//!
//! 엔티티는 영어 필드명(`name`, `crm`, `specialties`)으로 저장되고,
//! 외부 API 계약은 DTO가 포르투갈어 필드명(`nome`, `crm`, `especialidades`)으로 정의합니다.
//! 변환은 항상 `From` 구현 또는 `into_*` 메서드를 통해 이루어집니다.
//!
//! ```rust,ignore
//! use crate::domain::dto::physicians::{CreatePhysicianRequest, PhysicianResponse};
//!
//! let physician = request.into_entity();
//! let response = PhysicianResponse::from(physician);
//! ```

pub mod entities;
pub mod dto;

