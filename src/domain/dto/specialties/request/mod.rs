//! 전문분야 관련 요청 DTO

pub mod create_specialty_request;

pub use create_specialty_request::CreateSpecialtyRequest;
