//! # Route Configuration
//!
//! 모든 HTTP 라우트를 한곳에서 등록합니다.
//!
//! ```text
//! /health                  GET            헬스체크
//! /medicos                 POST, GET      의사 등록 / 목록
//! /medicos/{crm}           PUT, DELETE    의사 수정 / 삭제
//! /especialidades          POST, GET      전문분야 등록 / 목록
//! /usuarios                POST, GET      사용자 생성 / 목록
//! /usuarios/{id}           PUT, DELETE    사용자 수정 / 삭제
//! ```
//!
//! 서비스 인스턴스는 [`AppContext::register`](crate::core::context::AppContext::register)가
//! `app_data`로 등록해야 합니다.

use crate::config::StoreBackend;
use crate::core::errors::AppError;
use crate::handlers;
use actix_web::web;
use serde_json::json;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // 잘못된 JSON 본문도 {"error": ...} 형식으로 응답
    cfg.app_data(json_config());

    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_physician_routes(cfg);
    configure_specialty_routes(cfg);
    configure_user_routes(cfg);
}

/// JSON 본문 추출 설정
///
/// 파싱 실패를 `AppError::ValidationError`로 변환해 400 응답을 만듭니다.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into())
}

fn configure_physician_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/medicos")
            .service(handlers::physicians::create_physician)
            .service(handlers::physicians::list_physicians)
            .service(handlers::physicians::update_physician)
            .service(handlers::physicians::delete_physician)
    );
}

fn configure_specialty_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/especialidades")
            .service(handlers::specialties::create_specialty)
            .service(handlers::specialties::list_specialties)
    );
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/usuarios")
            .service(handlers::users::create_user)
            .service(handlers::users::list_users)
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user)
    );
}

#[actix_web::get("/health")]
async fn health_check(store: web::Data<StoreBackend>) -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "store": store.as_str()
    }))
}
