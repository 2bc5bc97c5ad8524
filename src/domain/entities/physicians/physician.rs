//! Physician Entity Implementation
//!
//! 의사(médico) 엔티티와 목록 필터, 수정 내용(changes) 타입을 정의합니다.
//! CRM(지역 의사 등록 번호)은 시스템 전체에서 고유한 자연 키입니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 의사 엔티티
///
/// `medicos` 컬렉션의 문서 구조와 1:1로 대응합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Physician {
    /// 시스템 생성 ID (UUID v4)
    #[serde(rename = "_id")]
    pub id: String,
    /// 표시 이름
    pub name: String,
    /// 등록 번호 (unique)
    pub crm: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    /// 자유 형식 소개글
    pub biography: Option<String>,
    /// 전문분야 이름 목록 (순서 무관, 포함 여부로만 검사)
    #[serde(default)]
    pub specialties: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Physician {
    /// 새 의사 엔티티를 생성합니다. ID와 생성 시각은 자동으로 할당됩니다.
    pub fn new(
        name: String,
        crm: String,
        phone: Option<String>,
        email: Option<String>,
        biography: Option<String>,
        specialties: Vec<String>,
    ) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4().to_string(),
            name,
            crm,
            phone,
            email,
            biography,
            specialties,
            created_at: now,
            updated_at: now,
        }
    }

    /// 주어진 전문분야를 정확히(대소문자 구분) 포함하는지 확인
    pub fn has_specialty(&self, specialty: &str) -> bool {
        self.specialties.iter().any(|s| s == specialty)
    }

    /// 수정 내용을 적용합니다.
    ///
    /// `None`인 필드는 기존 값을 유지하고, `Some`인 필드는 통째로 교체합니다.
    /// 선택 필드의 `Some(None)`은 값을 지웁니다. CRM은 변경되지 않습니다.
    pub fn apply(&mut self, changes: &PhysicianChanges) {
        if let Some(name) = &changes.name {
            self.name = name.clone();
        }
        if let Some(phone) = &changes.phone {
            self.phone = phone.clone();
        }
        if let Some(email) = &changes.email {
            self.email = email.clone();
        }
        if let Some(biography) = &changes.biography {
            self.biography = biography.clone();
        }
        if let Some(specialties) = &changes.specialties {
            self.specialties = specialties.clone();
        }
        self.updated_at = changes.updated_at;
    }
}

/// 의사 목록 조회 필터
///
/// 두 조건은 AND로 결합되며, `None`인 조건은 무시됩니다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhysicianFilter {
    /// 이름 부분 일치 (대소문자 무시)
    pub name: Option<String>,
    /// 전문분야 목록 포함 여부 (정확히 일치)
    pub specialty: Option<String>,
}

impl PhysicianFilter {
    pub fn new(name: Option<String>, specialty: Option<String>) -> Self {
        Self { name, specialty }
    }

    /// 엔티티가 필터 조건을 모두 만족하는지 확인합니다.
    pub fn matches(&self, physician: &Physician) -> bool {
        let name_matches = self.name.as_ref().is_none_or(|needle| {
            physician
                .name
                .to_lowercase()
                .contains(&needle.to_lowercase())
        });

        let specialty_matches = self
            .specialty
            .as_ref()
            .is_none_or(|specialty| physician.has_specialty(specialty));

        name_matches && specialty_matches
    }
}

/// 의사 정보 수정 내용
///
/// 선택 필드는 `None`(유지), `Some(None)`(삭제), `Some(Some(v))`(교체) 세 가지 상태를 가집니다.
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicianChanges {
    pub name: Option<String>,
    pub phone: Option<Option<String>>,
    pub email: Option<Option<String>>,
    pub biography: Option<Option<String>>,
    pub specialties: Option<Vec<String>>,
    pub updated_at: DateTime<Utc>,
}

impl PhysicianChanges {
    pub fn new(
        name: Option<String>,
        phone: Option<Option<String>>,
        email: Option<Option<String>>,
        biography: Option<Option<String>>,
        specialties: Option<Vec<String>>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            biography,
            specialties,
            updated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn physician(name: &str, specialties: &[&str]) -> Physician {
        Physician::new(
            name.to_string(),
            format!("CRM-{}", name),
            None,
            None,
            None,
            specialties.iter().map(|s| s.to_string()).collect(),
        )
    }

    #[test]
    fn test_name_filter_is_case_insensitive_substring() {
        let filter = PhysicianFilter::new(Some("jo".to_string()), None);

        assert!(filter.matches(&physician("João", &[])));
        assert!(filter.matches(&physician("Joana", &[])));
        assert!(filter.matches(&physician("Ana JOSÉ", &[])));
        assert!(!filter.matches(&physician("Pedro", &[])));
    }

    #[test]
    fn test_specialty_filter_is_exact_membership() {
        let filter = PhysicianFilter::new(None, Some("Cardiologia".to_string()));

        assert!(filter.matches(&physician("A", &["Pediatria", "Cardiologia"])));
        assert!(!filter.matches(&physician("B", &["cardiologia"])));
        assert!(!filter.matches(&physician("C", &["Cardiologia Infantil"])));
        assert!(!filter.matches(&physician("D", &[])));
    }

    #[test]
    fn test_filters_combine_with_and() {
        let filter = PhysicianFilter::new(Some("ana".to_string()), Some("Pediatria".to_string()));

        assert!(filter.matches(&physician("Joana", &["Pediatria"])));
        assert!(!filter.matches(&physician("Joana", &["Cardiologia"])));
        assert!(!filter.matches(&physician("Pedro", &["Pediatria"])));
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = PhysicianFilter::default();

        assert!(filter.matches(&physician("Qualquer", &[])));
    }

    #[test]
    fn test_apply_keeps_absent_fields() {
        let mut record = Physician::new(
            "João".to_string(),
            "123".to_string(),
            Some("1111".to_string()),
            Some("joao@clinica.com".to_string()),
            Some("bio".to_string()),
            vec!["Cardiologia".to_string()],
        );
        let changes = PhysicianChanges::new(
            Some("João Silva".to_string()),
            None,
            None,
            None,
            Some(vec!["Pediatria".to_string()]),
        );

        record.apply(&changes);

        assert_eq!(record.name, "João Silva");
        assert_eq!(record.crm, "123");
        assert_eq!(record.phone.as_deref(), Some("1111"));
        assert_eq!(record.email.as_deref(), Some("joao@clinica.com"));
        assert_eq!(record.specialties, vec!["Pediatria".to_string()]);
        assert_eq!(record.updated_at, changes.updated_at);
    }

    #[test]
    fn test_apply_clears_nulled_fields() {
        let mut record = Physician::new(
            "Ana".to_string(),
            "1".to_string(),
            Some("1111".to_string()),
            Some("ana@clinica.com".to_string()),
            Some("bio".to_string()),
            vec![],
        );

        record.apply(&PhysicianChanges::new(None, Some(None), None, Some(None), None));

        assert_eq!(record.phone, None);
        assert_eq!(record.email.as_deref(), Some("ana@clinica.com"));
        assert_eq!(record.biography, None);
    }
}
