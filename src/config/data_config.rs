//! 데이터 저장소 및 실행 환경 설정 관리 모듈
//!
//! 실행 환경과 데이터 저장소(MongoDB / 인메모리) 관련 설정을 관리합니다.

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 또는 `NODE_ENV` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        let value = env::var("ENVIRONMENT")
            .unwrap_or_else(|_| env::var("NODE_ENV").unwrap_or_else(|_| "production".to_string()));

        Self::from_str(&value)
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// 개발용 느슨한 설정(CORS 전체 허용 등)을 적용할 환경인지 확인합니다.
    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development | Environment::Test)
    }
}

/// 데이터 저장소 백엔드 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// MongoDB 컬렉션에 영구 저장
    MongoDb,
    /// 프로세스 메모리에 저장 (재시작 시 소멸)
    Memory,
}

impl StoreBackend {
    /// 문자열에서 백엔드 종류를 해석합니다.
    ///
    /// `memory`, `in-memory`, `mem` 이외의 값은 모두 MongoDB로 간주합니다.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "memory" | "in-memory" | "inmemory" | "mem" => StoreBackend::Memory,
            _ => StoreBackend::MongoDb,
        }
    }

    /// 로그와 헬스체크 응답에 쓰이는 이름
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreBackend::MongoDb => "mongodb",
            StoreBackend::Memory => "memory",
        }
    }
}

/// 데이터 저장소 연결 설정
pub struct DataStoreConfig;

impl DataStoreConfig {
    /// 사용할 저장소 백엔드를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `DATA_STORE`: `mongodb` (기본값) 또는 `memory`
    pub fn backend() -> StoreBackend {
        env::var("DATA_STORE")
            .map(|value| StoreBackend::from_str(&value))
            .unwrap_or(StoreBackend::MongoDb)
    }

    /// MongoDB 연결 URI. 기본값: `mongodb://localhost:27017`
    pub fn mongodb_uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    /// 사용할 데이터베이스 이름. 기본값: `clinica_dev`
    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "clinica_dev".to_string())
    }
}
