//! 의사 관련 응답 DTO

pub mod physician_response;

pub use physician_response::PhysicianResponse;
