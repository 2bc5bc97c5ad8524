//! # Clinica Backend
//!
//! 병원/클리닉 기록 관리를 위한 REST API 라이브러리입니다.
//! 의사(médicos), 전문분야(especialidades), 사용자 계정(usuarios)의 CRUD를 제공합니다.
//!
//! ## 아키텍처
//!
//! ```text
//! ┌──────────────┐
//! │    routes    │  web::scope("/medicos"), ("/especialidades"), ("/usuarios"), /health
//! └──────┬───────┘
//!        ▼
//! ┌──────────────┐
//! │   handlers   │  입력 추출, validator 검증, HttpResponse 생성
//! └──────┬───────┘
//!        ▼
//! ┌──────────────┐
//! │   services   │  중복 CRM 검사, 존재 확인, StoreError → AppError 매핑
//! └──────┬───────┘
//!        ▼
//! ┌──────────────┐
//! │ repositories │  async trait
//! └──┬────────┬──┘
//!    ▼        ▼
//!  MongoDB  In-Memory
//! ```
//!
//! 서비스들은 [`core::context::AppContext`]가 조립하여 `web::Data`로 주입합니다.
//!
//! ## 빠른 시작
//!
//! ```bash
//! # 인메모리 저장소로 실행
//! DATA_STORE=memory cargo run
//!
//! # MongoDB로 실행
//! MONGODB_URI="mongodb://localhost:27017" DATABASE_NAME="clinica_dev" cargo run
//! ```
//!
//! ## 테스트에서 사용
//!
//! ```rust,ignore
//! use actix_web::{test, App};
//! use clinica_backend::{core::context::AppContext, routes::configure_all_routes};
//!
//! let context = AppContext::in_memory();
//! let app = test::init_service(
//!     App::new()
//!         .configure(|cfg| context.register(cfg))
//!         .configure(configure_all_routes),
//! ).await;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
