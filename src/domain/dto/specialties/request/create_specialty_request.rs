//! 전문분야 등록 요청 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::domain::entities::specialties::Specialty;
use crate::utils::string_utils::validate_not_blank;

/// `POST /especialidades` 요청 본문: `{"nome": "Cardiologia"}`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateSpecialtyRequest {
    #[serde(rename = "nome")]
    #[validate(custom(function = "validate_not_blank", message = "nome é obrigatório"))]
    pub name: String,
}

impl CreateSpecialtyRequest {
    pub fn into_entity(self) -> Specialty {
        Specialty::new(self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation() {
        let ok: CreateSpecialtyRequest = serde_json::from_str(r#"{"nome": "Cardiologia"}"#).unwrap();
        assert!(ok.validate().is_ok());

        let blank: CreateSpecialtyRequest = serde_json::from_str(r#"{"nome": " "}"#).unwrap();
        assert!(blank.validate().is_err());

        assert!(serde_json::from_str::<CreateSpecialtyRequest>("{}").is_err());
    }
}
