//! Physicians Entity Module
//!
//! 의사 엔티티와 목록 필터, 수정 내용 타입을 포함합니다.
//!
//! ```rust,ignore
//! use crate::domain::entities::physicians::{Physician, PhysicianFilter};
//!
//! let filter = PhysicianFilter::new(Some("jo".to_string()), Some("Cardiologia".to_string()));
//! let matched: Vec<&Physician> = physicians.iter().filter(|p| filter.matches(p)).collect();
//! ```

pub mod physician;

pub use physician::{Physician, PhysicianChanges, PhysicianFilter};
