//! 사용자 생성 요청 DTO
//!
//! 새로운 사용자 계정 생성을 위한 HTTP 요청 데이터 구조를 정의합니다.

use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::domain::entities::users::User;

/// `POST /usuarios` 요청 본문
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// 사용자 이메일 주소
    #[validate(email(message = "email inválido"))]
    pub email: String,

    /// 비밀번호. 입력값 그대로 저장됩니다.
    #[serde(rename = "senha")]
    #[validate(length(min = 1, message = "senha é obrigatória"))]
    pub password: String,
}

impl CreateUserRequest {
    pub fn into_entity(self) -> User {
        User::new(self.email, self.password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request() {
        let json = r#"{"email": "recepcao@clinica.com", "senha": "123"}"#;
        let request: CreateUserRequest = serde_json::from_str(json).unwrap();

        assert!(request.validate().is_ok());
        assert_eq!(request.password, "123");
    }

    #[test]
    fn test_invalid_email_and_empty_password() {
        let json = r#"{"email": "not-an-email", "senha": ""}"#;
        let request: CreateUserRequest = serde_json::from_str(json).unwrap();

        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert_eq!(fields.len(), 2);
        assert!(fields.contains_key("email"));
    }
}
