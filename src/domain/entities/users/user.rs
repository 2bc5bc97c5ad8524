//! User Entity Implementation
//!
//! 사용자 계정 엔티티입니다. 인증 흐름은 없으며 계정 레코드만 관리합니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 사용자 엔티티
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    /// 사용자 이메일
    pub email: String,
    /// 입력받은 비밀번호 원문
    pub password: String,
    /// 생성 시간
    pub created_at: DateTime<Utc>,
    /// 수정 시간
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// 새 사용자 생성
    pub fn new(email: String, password: String) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4().to_string(),
            email,
            password,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, changes: &UserChanges) {
        if let Some(email) = &changes.email {
            self.email = email.clone();
        }
        if let Some(password) = &changes.password {
            self.password = password.clone();
        }
        self.updated_at = changes.updated_at;
    }
}

/// 사용자 수정 내용. `None` 필드는 변경하지 않습니다.
#[derive(Debug, Clone, PartialEq)]
pub struct UserChanges {
    pub email: Option<String>,
    pub password: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl UserChanges {
    pub fn new(email: Option<String>, password: Option<String>) -> Self {
        Self {
            email,
            password,
            updated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_replaces_only_given_fields() {
        let mut user = User::new("a@x.com".to_string(), "p1".to_string());
        let created_at = user.created_at;

        user.apply(&UserChanges::new(None, Some("p2".to_string())));

        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.password, "p2");
        assert_eq!(user.created_at, created_at);
        assert!(user.updated_at >= created_at);
    }
}
