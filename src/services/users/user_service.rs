//! # 사용자 관리 서비스 구현
//!
//! 사용자 계정 레코드의 생성, 조회, 수정, 삭제를 담당합니다.
//! 인증 흐름은 없으며, 비밀번호(`senha`)는 입력값 그대로 저장되고 응답에 포함됩니다.

use std::sync::Arc;
use std::time::Instant;
use log::info;
use crate::{
    core::errors::{AppError, AppResult},
    domain::dto::users::{CreateUserRequest, UpdateUserRequest, UserResponse},
    repositories::{users::UserRepository, StoreError},
    services::store_failure,
};

const CREATE_FAILED: &str = "Erro ao criar usuario";
const LIST_FAILED: &str = "Erro ao buscar usuario";
const UPDATE_NOT_FOUND: &str = "Usuário não encontrado";
const UPDATE_FAILED: &str = "Erro ao atualizar usuario";
const DELETE_NOT_FOUND: &str = "Usuário não existe";
const DELETE_FAILED: &str = "Erro ao deletar usuario";

pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    pub async fn create_user(&self, request: CreateUserRequest) -> AppResult<UserResponse> {
        let start_time = Instant::now();

        let user = self.user_repo
            .insert(request.into_entity())
            .await
            .map_err(store_failure(CREATE_FAILED))?;

        info!("사용자 생성 완료: id={} ({:?})", user.id, start_time.elapsed());

        Ok(UserResponse::from(user))
    }

    pub async fn list_users(&self) -> AppResult<Vec<UserResponse>> {
        let users = self.user_repo
            .find_all()
            .await
            .map_err(store_failure(LIST_FAILED))?;

        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// 사용자를 수정합니다. 대상이 없을 때의 404 본문 키는 `"message"`입니다.
    pub async fn update_user(&self, id: &str, request: UpdateUserRequest) -> AppResult<UserResponse> {
        let user = self.user_repo
            .update_by_id(id, &request.into_changes())
            .await
            .map_err(|err| match err {
                StoreError::NotFound => {
                    AppError::NotFound(UPDATE_NOT_FOUND.to_string()).with_body_key("message")
                }
                other => store_failure(UPDATE_FAILED)(other),
            })?;

        info!("사용자 수정 완료: id={}", id);

        Ok(UserResponse::from(user))
    }

    /// ID로 사용자를 삭제합니다. 존재하지 않는 ID(형식 오류 포함)는 404입니다.
    pub async fn delete_user(&self, id: &str) -> AppResult<()> {
        self.user_repo
            .delete_by_id(id)
            .await
            .map_err(|err| match err {
                StoreError::NotFound => AppError::NotFound(DELETE_NOT_FOUND.to_string()),
                other => store_failure(DELETE_FAILED)(other),
            })?;

        info!("사용자 삭제 완료: id={}", id);

        Ok(())
    }
}
