//! # Specialty HTTP Handlers
//!
//! `/especialidades` 스코프의 엔드포인트를 처리합니다.

use actix_web::{web, HttpResponse, get, post};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::specialties::CreateSpecialtyRequest;
use crate::services::specialties::SpecialtyService;

#[post("")]
pub async fn create_specialty(
    service: web::Data<SpecialtyService>,
    payload: web::Json<CreateSpecialtyRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = service.create_specialty(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

#[get("")]
pub async fn list_specialties(
    service: web::Data<SpecialtyService>,
) -> Result<HttpResponse, AppError> {
    let specialties = service.list_specialties().await?;

    Ok(HttpResponse::Ok().json(specialties))
}
