//! 의사 관리 서비스

pub mod physician_service;

pub use physician_service::PhysicianService;
