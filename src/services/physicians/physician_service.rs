//! # 의사 관리 서비스 구현
//!
//! 의사 등록, 목록 조회, 수정, 삭제의 비즈니스 규칙을 구현합니다.
//!
//! ## 규칙
//!
//! - **등록**: 같은 CRM이 있으면 400 `CRM já cadastrado`. 사전 검사와 삽입 사이의
//!   경쟁으로 저장소가 중복 키를 보고해도 같은 응답을 돌려줍니다.
//! - **조회**: 이름(부분 일치, 대소문자 무시)과 전문분야(정확히 일치) 필터를 AND로 결합합니다.
//! - **수정**: CRM은 변경되지 않으며, 대상이 없으면 404입니다.
//! - **삭제**: 존재 여부를 먼저 확인하고, 없으면 404입니다.

use std::sync::Arc;
use std::time::Instant;
use log::info;
use crate::{
    core::errors::{AppError, AppResult},
    domain::{
        dto::physicians::{CreatePhysicianRequest, PhysicianResponse, UpdatePhysicianRequest},
        entities::physicians::PhysicianFilter,
    },
    repositories::{physicians::PhysicianRepository, StoreError},
    services::store_failure,
};

const DUPLICATE_CRM: &str = "CRM já cadastrado";
const NOT_FOUND: &str = "Médico não encontrado";
const CREATE_FAILED: &str = "Erro ao criar médico";
const LIST_FAILED: &str = "Erro ao buscar médicos";
const UPDATE_FAILED: &str = "Erro ao atualizar médico";
const DELETE_FAILED: &str = "Erro ao deletar médico";

pub struct PhysicianService {
    physician_repo: Arc<dyn PhysicianRepository>,
}

impl PhysicianService {
    pub fn new(physician_repo: Arc<dyn PhysicianRepository>) -> Self {
        Self { physician_repo }
    }

    /// 새 의사를 등록합니다.
    pub async fn create_physician(&self, request: CreatePhysicianRequest) -> AppResult<PhysicianResponse> {
        let start_time = Instant::now();

        let existing = self.physician_repo
            .find_by_crm(&request.crm)
            .await
            .map_err(store_failure(CREATE_FAILED))?;

        if existing.is_some() {
            info!("중복 CRM 등록 시도: {}", request.crm);
            return Err(AppError::DuplicateKey(DUPLICATE_CRM.to_string()));
        }

        let physician = self.physician_repo
            .insert(request.into_entity())
            .await
            .map_err(|err| match err {
                StoreError::DuplicateKey(detail) => {
                    info!("삽입 중 CRM 중복 감지: {}", detail);
                    AppError::DuplicateKey(DUPLICATE_CRM.to_string())
                }
                other => store_failure(CREATE_FAILED)(other),
            })?;

        info!("의사 등록 완료: crm={} ({:?})", physician.crm, start_time.elapsed());

        Ok(PhysicianResponse::from(physician))
    }

    /// 필터 조건에 맞는 의사 목록을 반환합니다.
    pub async fn list_physicians(&self, filter: PhysicianFilter) -> AppResult<Vec<PhysicianResponse>> {
        let physicians = self.physician_repo
            .find_all(&filter)
            .await
            .map_err(store_failure(LIST_FAILED))?;

        Ok(physicians.into_iter().map(PhysicianResponse::from).collect())
    }

    /// CRM으로 지정한 의사 정보를 수정합니다.
    pub async fn update_physician(
        &self,
        crm: &str,
        request: UpdatePhysicianRequest,
    ) -> AppResult<PhysicianResponse> {
        let changes = request.into_changes();

        let physician = self.physician_repo
            .update_by_crm(crm, &changes)
            .await
            .map_err(|err| match err {
                StoreError::NotFound => AppError::NotFound(NOT_FOUND.to_string()),
                other => store_failure(UPDATE_FAILED)(other),
            })?;

        info!("의사 정보 수정 완료: crm={}", crm);

        Ok(PhysicianResponse::from(physician))
    }

    /// CRM으로 지정한 의사를 삭제합니다.
    pub async fn delete_physician(&self, crm: &str) -> AppResult<()> {
        let existing = self.physician_repo
            .find_by_crm(crm)
            .await
            .map_err(store_failure(DELETE_FAILED))?;

        if existing.is_none() {
            return Err(AppError::NotFound(NOT_FOUND.to_string()));
        }

        self.physician_repo
            .delete_by_crm(crm)
            .await
            .map_err(|err| match err {
                StoreError::NotFound => AppError::NotFound(NOT_FOUND.to_string()),
                other => store_failure(DELETE_FAILED)(other),
            })?;

        info!("의사 삭제 완료: crm={}", crm);

        Ok(())
    }
}
