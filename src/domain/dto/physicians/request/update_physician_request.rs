//! 의사 정보 수정 요청 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::domain::entities::physicians::PhysicianChanges;
use crate::utils::string_utils::{deserialize_nullable, validate_not_blank};

/// `PUT /medicos/{crm}` 요청 본문
///
/// 모든 필드는 선택 사항입니다. 없는 필드는 기존 값을 유지하고,
/// 전달된 필드는 통째로 교체됩니다. `telefone`, `email`, `biografia`에
/// `null`을 보내면 값이 지워집니다. `nome`/`especialidades`의 `null`은 무시됩니다.
/// CRM은 경로로만 지정되며 변경할 수 없습니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdatePhysicianRequest {
    #[serde(rename = "nome", default)]
    #[validate(custom(function = "validate_not_blank", message = "nome não pode ser vazio"))]
    pub name: Option<String>,

    #[serde(rename = "telefone", default, deserialize_with = "deserialize_nullable")]
    pub phone: Option<Option<String>>,

    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub email: Option<Option<String>>,

    #[serde(rename = "biografia", default, deserialize_with = "deserialize_nullable")]
    pub biography: Option<Option<String>>,

    #[serde(rename = "especialidades", default)]
    pub specialties: Option<Vec<String>>,
}

impl UpdatePhysicianRequest {
    pub fn into_changes(self) -> PhysicianChanges {
        PhysicianChanges::new(
            self.name,
            self.phone,
            self.email,
            self.biography,
            self.specialties,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_fields_become_none() {
        let json = r#"{"especialidades": ["Pediatria"]}"#;
        let request: UpdatePhysicianRequest = serde_json::from_str(json).unwrap();

        assert!(request.validate().is_ok());

        let changes = request.into_changes();
        assert_eq!(changes.name, None);
        assert_eq!(changes.phone, None);
        assert_eq!(changes.specialties, Some(vec!["Pediatria".to_string()]));
    }

    #[test]
    fn test_null_clears_optional_contact_fields() {
        let json = r#"{"nome": null, "telefone": null, "email": "ana@clinica.com"}"#;
        let request: UpdatePhysicianRequest = serde_json::from_str(json).unwrap();

        let changes = request.into_changes();
        assert_eq!(changes.name, None);
        assert_eq!(changes.phone, Some(None));
        assert_eq!(changes.email, Some(Some("ana@clinica.com".to_string())));
        assert_eq!(changes.biography, None);
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let json = r#"{"nome": ""}"#;
        let request: UpdatePhysicianRequest = serde_json::from_str(json).unwrap();

        assert!(request.validate().is_err());
    }
}
