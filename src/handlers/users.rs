//! # User Management HTTP Handlers
//!
//! 사용자 계정 관리와 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/usuarios` | 새 사용자 생성 | 201 Created |
//! | `GET` | `/usuarios` | 사용자 목록 조회 | 200 OK |
//! | `PUT` | `/usuarios/{id}` | 사용자 수정 | 200 OK / 404 |
//! | `DELETE` | `/usuarios/{id}` | 사용자 삭제 | 200 OK / 404 |
//!
//! 서비스는 `web::Data<UserService>`로 주입됩니다.
//!
//! ```rust,ignore
//! App::new()
//!     .app_data(web::Data::new(UserService::new(repo)))
//!     .service(web::scope("/usuarios").service(create_user));
//! ```

use actix_web::{web, HttpResponse, get, post, put, delete};
use serde_json::json;
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::users::{CreateUserRequest, UpdateUserRequest};
use crate::services::users::UserService;

#[post("")]
pub async fn create_user(
    service: web::Data<UserService>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = service.create_user(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

#[get("")]
pub async fn list_users(
    service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let users = service.list_users().await?;

    Ok(HttpResponse::Ok().json(users))
}

#[put("/{user_id}")]
pub async fn update_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user = service.update_user(&user_id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(user))
}

#[delete("/{user_id}")]
pub async fn delete_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete_user(&user_id).await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Usuario deletado"
    })))
}
