//! 의사 등록 요청 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::domain::entities::physicians::Physician;
use crate::utils::string_utils::validate_not_blank;

/// `POST /medicos` 요청 본문
///
/// ```json
/// {
///   "nome": "João Silva",
///   "crm": "12345-SP",
///   "telefone": "11 99999-0000",
///   "email": "joao@clinica.com",
///   "biografia": "Cardiologista",
///   "especialidades": ["Cardiologia"]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePhysicianRequest {
    #[serde(rename = "nome")]
    #[validate(custom(function = "validate_not_blank", message = "nome é obrigatório"))]
    pub name: String,

    /// 등록 번호. 저장소 전체에서 고유해야 합니다.
    #[validate(custom(function = "validate_not_blank", message = "crm é obrigatório"))]
    pub crm: String,

    #[serde(rename = "telefone", default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(rename = "biografia", default)]
    pub biography: Option<String>,

    #[serde(rename = "especialidades", default)]
    pub specialties: Vec<String>,
}

impl CreatePhysicianRequest {
    /// 요청을 새 엔티티로 변환합니다.
    pub fn into_entity(self) -> Physician {
        Physician::new(
            self.name,
            self.crm,
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
    fn test_minimal_body_deserializes() {
        let json = r#"{"nome": "Ana", "crm": "1"}"#;
        let request: CreatePhysicianRequest = serde_json::from_str(json).unwrap();

        assert!(request.validate().is_ok());
        assert!(request.specialties.is_empty());
        assert!(request.phone.is_none());
    }

    #[test]
    fn test_blank_crm_is_rejected() {
        let json = r#"{"nome": "Ana", "crm": "  "}"#;
        let request: CreatePhysicianRequest = serde_json::from_str(json).unwrap();

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("crm"));
    }

    #[test]
    fn test_into_entity_keeps_fields() {
        let json = r#"{"nome": "Ana", "crm": "1", "biografia": "bio", "especialidades": ["Pediatria"]}"#;
        let request: CreatePhysicianRequest = serde_json::from_str(json).unwrap();

        let physician = request.into_entity();
        assert_eq!(physician.name, "Ana");
        assert_eq!(physician.crm, "1");
        assert_eq!(physician.biography.as_deref(), Some("bio"));
        assert_eq!(physician.specialties, vec!["Pediatria".to_string()]);
    }
}
