//! # Application Error Handling
//!
//! 클리닉 API 전역에서 사용하는 에러 타입입니다.
//! 서비스 계층은 저장소의 [`StoreError`](crate::repositories::StoreError)를 받아
//! 라우트별 실패 메시지를 붙인 `AppError`로 변환하고,
//! `actix_web::ResponseError` 구현이 이를 HTTP 응답으로 바꿉니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 입력값 검증 실패, 잘못된 JSON |
//! | `BadRequest` | 400 Bad Request | 특수 케이스 (전문분야 목록 조회 실패) |
//! | `DuplicateKey` | 400 Bad Request | 이미 등록된 CRM |
//! | `NotFound` | 404 Not Found | 수정/삭제 대상 없음 |
//! | `DatabaseError` | 500 Internal Server Error | 저장소 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! ## 응답 형식
//!
//! ```json
//! { "error": "Médico não encontrado" }
//! ```
//!
//! 응답 본문에는 변형(variant) 접두어 없이 메시지만 담깁니다.
//! `Display` 출력(`"Not found: ..."`)은 로그용입니다.
//!
//! 일부 경로는 기존 클라이언트가 다른 키를 읽으므로
//! [`AppError::with_body_key`]로 본문 키를 바꿉니다.
//!
//! ```rust,ignore
//! AppError::NotFound("Usuário não encontrado".to_string()).with_body_key("message")
//! // => 404 { "message": "Usuário não encontrado" }
//! ```

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400)
    ///
    /// `validator` 검증 실패와 JSON 본문 파싱 실패에 사용됩니다.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 잘못된 요청 (400)
    ///
    /// 서버 측 실패지만 기존 클라이언트가 400을 기대하는 경로에서 사용됩니다.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// 리소스 찾을 수 없음 (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 고유 키 중복 (400)
    ///
    /// 이미 등록된 CRM으로 의사를 생성하려 할 때 발생합니다.
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    /// 내부 서버 에러 (500)
    #[error("Internal server error: {0}")]
    InternalError(String),

    /// 본문 키만 `"error"`가 아닌 에러. 상태 코드와 메시지는 `inner`를 따릅니다.
    #[error("{inner}")]
    Keyed {
        key: &'static str,
        inner: Box<AppError>,
    },
}

impl AppError {
    /// 클라이언트에게 전달할 메시지를 반환합니다.
    pub fn message(&self) -> &str {
        match self {
            AppError::DatabaseError(msg)
            | AppError::ValidationError(msg)
            | AppError::BadRequest(msg)
            | AppError::NotFound(msg)
            | AppError::DuplicateKey(msg)
            | AppError::InternalError(msg) => msg,
            AppError::Keyed { inner, .. } => inner.message(),
        }
    }

    /// 응답 본문에서 메시지를 담는 키
    pub fn body_key(&self) -> &'static str {
        match self {
            AppError::Keyed { key, .. } => *key,
            _ => "error",
        }
    }

    /// 응답 본문 키를 바꾼 에러를 반환합니다.
    pub fn with_body_key(self, key: &'static str) -> Self {
        let inner = match self {
            AppError::Keyed { inner, .. } => inner,
            other => Box::new(other),
        };

        AppError::Keyed { key, inner }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::DuplicateKey(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Keyed { inner, .. } => inner.status_code(),
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// `{"<body_key>": "<message>"}` 형식으로 응답합니다. 기본 키는 `"error"`입니다.
    fn error_response(&self) -> HttpResponse {
        let mut body = serde_json::Map::new();
        body.insert(self.body_key().to_string(), self.message().into());

        HttpResponse::build(self.status_code()).json(body)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// use crate::core::errors::ErrorContext;
///
/// let options = ClientOptions::parse(&uri).await
///     .context("MongoDB URI 파싱 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
