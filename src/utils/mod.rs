//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 문자열 처리 유틸리티를 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 검증, 정리, 쿼리 이스케이프 유틸리티
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::{clean_optional_string, escape_regex};
//!
//! let name = clean_optional_string(Some("  jo ".to_string()));
//! let pattern = escape_regex("Dr. (João)");
//! ```

pub mod string_utils;
