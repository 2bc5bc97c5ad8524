use std::sync::Arc;
use log::{error, info};
use crate::{
    core::errors::{AppError, AppResult},
    domain::dto::specialties::{CreateSpecialtyRequest, SpecialtyResponse},
    repositories::specialties::SpecialtyRepository,
    services::store_failure,
};

const CREATE_FAILED: &str = "Erro ao criar especialidade";
const LIST_FAILED: &str = "Erro ao procurar especialidades";

/// 전문분야 등록/조회 서비스
pub struct SpecialtyService {
    specialty_repo: Arc<dyn SpecialtyRepository>,
}

impl SpecialtyService {
    pub fn new(specialty_repo: Arc<dyn SpecialtyRepository>) -> Self {
        Self { specialty_repo }
    }

    /// 전문분야를 등록합니다. 실패 응답 본문의 키는 `"erro"`입니다.
    pub async fn create_specialty(&self, request: CreateSpecialtyRequest) -> AppResult<SpecialtyResponse> {
        let specialty = self.specialty_repo
            .insert(request.into_entity())
            .await
            .map_err(|err| store_failure(CREATE_FAILED)(err).with_body_key("erro"))?;

        info!("전문분야 등록 완료: {}", specialty.name);

        Ok(SpecialtyResponse::from(specialty))
    }

    /// 모든 전문분야를 반환합니다.
    ///
    /// 조회 실패는 기존 클라이언트와의 호환을 위해 400으로 응답합니다.
    pub async fn list_specialties(&self) -> AppResult<Vec<SpecialtyResponse>> {
        let specialties = self.specialty_repo
            .find_all()
            .await
            .map_err(|err| {
                error!("{}: {}", LIST_FAILED, err);
                AppError::BadRequest(LIST_FAILED.to_string())
            })?;

        Ok(specialties.into_iter().map(SpecialtyResponse::from).collect())
    }
}
