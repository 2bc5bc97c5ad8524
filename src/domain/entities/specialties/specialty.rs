//! Specialty Entity Implementation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 전문분야 엔티티
///
/// 이름만 가지는 단순한 참조 데이터입니다. 이름의 고유성은 강제하지 않으며,
/// 의사의 `specialties` 목록과도 연결(참조 무결성)되지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Specialty {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Specialty {
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_specialty_gets_unique_id() {
        let first = Specialty::new("Cardiologia".to_string());
        let second = Specialty::new("Cardiologia".to_string());

        assert_eq!(first.name, second.name);
        assert_ne!(first.id, second.id);
        assert!(Uuid::parse_str(&first.id).is_ok());
    }
}
