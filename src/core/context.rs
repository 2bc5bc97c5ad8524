//! # Application Context
//!
//! 프로세스 시작 시 한 번 구성되는 의존성 컨테이너입니다.
//! 저장소 백엔드를 선택해 리포지토리를 만들고, 그 위에 서비스를 조립한 뒤
//! `web::Data`로 actix 워커들에 공유합니다. 전역 상태는 없습니다.
//!
//! ```text
//! AppContext
//! ├── PhysicianService  ── Arc<dyn PhysicianRepository>
//! ├── SpecialtyService  ── Arc<dyn SpecialtyRepository>
//! ├── UserService       ── Arc<dyn UserRepository>
//! └── StoreBackend      (헬스체크 응답용)
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! let context = AppContext::from_config().await?;
//!
//! HttpServer::new(move || {
//!     App::new()
//!         .configure(|cfg| context.register(cfg))
//!         .configure(configure_all_routes)
//! })
//! ```

use std::sync::Arc;
use actix_web::web;
use log::info;
use crate::{
    config::{DataStoreConfig, StoreBackend},
    core::errors::{AppError, AppResult, ErrorContext},
    db::Database,
    repositories::{
        physicians::{InMemoryPhysicianRepository, MongoPhysicianRepository, PhysicianRepository},
        specialties::{InMemorySpecialtyRepository, MongoSpecialtyRepository, SpecialtyRepository},
        users::{InMemoryUserRepository, MongoUserRepository, UserRepository},
    },
    services::{
        physicians::PhysicianService,
        specialties::SpecialtyService,
        users::UserService,
    },
};

/// 애플리케이션 의존성 컨테이너
#[derive(Clone)]
pub struct AppContext {
    physicians: web::Data<PhysicianService>,
    specialties: web::Data<SpecialtyService>,
    users: web::Data<UserService>,
    backend: StoreBackend,
}

impl AppContext {
    /// 환경 설정(`DATA_STORE`)에 따라 컨텍스트를 구성합니다.
    ///
    /// MongoDB 백엔드는 연결과 `ping` 검증, 인덱스 생성까지 마친 뒤 반환됩니다.
    pub async fn from_config() -> AppResult<Self> {
        match DataStoreConfig::backend() {
            StoreBackend::Memory => {
                info!("📦 인메모리 저장소 사용 (재시작 시 데이터 소멸)");
                Ok(Self::in_memory())
            }
            StoreBackend::MongoDb => {
                info!("📡 데이터베이스 연결 중...");

                let database = Database::new()
                    .await
                    .context("MongoDB 연결 실패")?;

                Self::with_mongodb(&database).await
            }
        }
    }

    /// 인메모리 저장소로 컨텍스트를 구성합니다.
    pub fn in_memory() -> Self {
        Self::from_repositories(
            Arc::new(InMemoryPhysicianRepository::new()),
            Arc::new(InMemorySpecialtyRepository::new()),
            Arc::new(InMemoryUserRepository::new()),
            StoreBackend::Memory,
        )
    }

    /// MongoDB 저장소로 컨텍스트를 구성하고 필요한 인덱스를 생성합니다.
    pub async fn with_mongodb(database: &Database) -> AppResult<Self> {
        let physician_repo = MongoPhysicianRepository::new(database);

        physician_repo
            .create_indexes()
            .await
            .map_err(|e| AppError::DatabaseError(format!("인덱스 생성 실패: {}", e)))?;

        info!("✅ MongoDB 저장소 준비 완료: {}", database.database_name());

        Ok(Self::from_repositories(
            Arc::new(physician_repo),
            Arc::new(MongoSpecialtyRepository::new(database)),
            Arc::new(MongoUserRepository::new(database)),
            StoreBackend::MongoDb,
        ))
    }

    /// 임의의 리포지토리 구현으로 컨텍스트를 구성합니다.
    pub fn from_repositories(
        physician_repo: Arc<dyn PhysicianRepository>,
        specialty_repo: Arc<dyn SpecialtyRepository>,
        user_repo: Arc<dyn UserRepository>,
        backend: StoreBackend,
    ) -> Self {
        Self {
            physicians: web::Data::new(PhysicianService::new(physician_repo)),
            specialties: web::Data::new(SpecialtyService::new(specialty_repo)),
            users: web::Data::new(UserService::new(user_repo)),
            backend,
        }
    }

    pub fn backend(&self) -> StoreBackend {
        self.backend
    }

    /// 서비스들과 백엔드 정보를 actix `app_data`로 등록합니다.
    pub fn register(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.physicians.clone())
            .app_data(self.specialties.clone())
            .app_data(self.users.clone())
            .app_data(web::Data::new(self.backend));
    }
}
