//! # Configuration Module
//!
//! 클리닉 API의 설정 관리를 담당하는 모듈입니다.
//! 모든 설정값은 환경 변수에서 읽으며, 개발 환경에서 안전한 기본값을 제공합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 데이터 저장소(MongoDB / 인메모리) 설정
//! - [`server_config`] - 바인딩 주소, 워커 수, CORS, Rate Limiting 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="3000"
//! export SERVER_WORKERS="4"
//!
//! # 데이터 저장소
//! export DATA_STORE="mongodb"            # mongodb | memory
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="clinica_dev"
//!
//! # 보안/트래픽
//! export CORS_ALLOWED_ORIGINS="http://localhost:3000"
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//!
//! # 환경
//! export ENVIRONMENT="development"       # development, test, staging, production
//! ```

pub mod data_config;
pub mod server_config;

pub use data_config::*;
pub use server_config::*;
