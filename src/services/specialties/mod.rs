//! 전문분야 관리 서비스

pub mod specialty_service;

pub use specialty_service::SpecialtyService;
