//! 전문분야 관련 응답 DTO

pub mod specialty_response;

pub use specialty_response::SpecialtyResponse;
