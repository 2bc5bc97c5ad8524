//! Users Entity Module
//!
//! 사용자 계정 엔티티를 정의하는 모듈입니다.
//!
//! ```rust,ignore
//! use crate::domain::entities::users::User;
//!
//! let user = User::new("recepcao@clinica.com".to_string(), "senha123".to_string());
//! ```

pub mod user;

pub use user::{User, UserChanges};
