use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::domain::entities::users::User;

/// 사용자 응답 DTO
///
/// 저장된 레코드를 그대로 노출하며 `senha`를 포함합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    #[serde(rename = "senha")]
    pub password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            email,
            password,
            created_at,
            updated_at,
        } = user;

        Self {
            id,
            email,
            password,
            created_at,
            updated_at,
        }
    }
}
