//! # Physician HTTP Handlers
//!
//! `/medicos` 스코프의 엔드포인트를 처리합니다. 의사는 CRM으로 식별됩니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/medicos` | 의사 등록 | 201 / 400 (중복 CRM, 검증 실패) |
//! | `GET` | `/medicos?nome=&especialidade=` | 의사 목록 조회 | 200 |
//! | `PUT` | `/medicos/{crm}` | 의사 정보 수정 | 200 / 404 |
//! | `DELETE` | `/medicos/{crm}` | 의사 삭제 | 200 / 404 |

use actix_web::{web, HttpResponse, get, post, put, delete};
use serde_json::json;
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::physicians::{CreatePhysicianRequest, PhysicianListQuery, UpdatePhysicianRequest};
use crate::services::physicians::PhysicianService;

/// 의사 등록
#[post("")]
pub async fn create_physician(
    service: web::Data<PhysicianService>,
    payload: web::Json<CreatePhysicianRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = service.create_physician(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 의사 목록 조회
///
/// `nome`은 대소문자를 무시한 부분 일치, `especialidade`는 전문분야 목록에 정확히 포함되는지로 검사합니다.
#[get("")]
pub async fn list_physicians(
    service: web::Data<PhysicianService>,
    query: web::Query<PhysicianListQuery>,
) -> Result<HttpResponse, AppError> {
    let physicians = service.list_physicians(query.into_inner().into()).await?;

    Ok(HttpResponse::Ok().json(physicians))
}

#[put("/{crm}")]
pub async fn update_physician(
    service: web::Data<PhysicianService>,
    crm: web::Path<String>,
    payload: web::Json<UpdatePhysicianRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let physician = service.update_physician(&crm, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(physician))
}

#[delete("/{crm}")]
pub async fn delete_physician(
    service: web::Data<PhysicianService>,
    crm: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete_physician(&crm).await?;

    Ok(HttpResponse::Ok().json(json!({
        "mensagem": "Médico deletado com sucesso"
    })))
}
