//! 사용자 수정 요청 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::domain::entities::users::UserChanges;

/// `PUT /usuarios/{id}` 요청 본문. 없거나 `null`인 필드는 변경하지 않습니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[serde(default)]
    #[validate(email(message = "email inválido"))]
    pub email: Option<String>,

    #[serde(rename = "senha", default)]
    #[validate(length(min = 1, message = "senha não pode ser vazia"))]
    pub password: Option<String>,
}

impl UpdateUserRequest {
    pub fn into_changes(self) -> UserChanges {
        UserChanges::new(self.email, self.password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_update() {
        let request: UpdateUserRequest = serde_json::from_str(r#"{"senha": "nova"}"#).unwrap();
        assert!(request.validate().is_ok());

        let changes = request.into_changes();
        assert_eq!(changes.email, None);
        assert_eq!(changes.password.as_deref(), Some("nova"));
    }

    #[test]
    fn test_present_email_is_validated() {
        let request: UpdateUserRequest = serde_json::from_str(r#"{"email": "x"}"#).unwrap();
        assert!(request.validate().is_err());
    }
}
