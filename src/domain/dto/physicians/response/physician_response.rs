use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::domain::entities::physicians::Physician;

/// 의사 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhysicianResponse {
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
    pub crm: String,
    #[serde(rename = "telefone")]
    pub phone: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "biografia")]
    pub biography: Option<String>,
    #[serde(rename = "especialidades")]
    pub specialties: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Physician> for PhysicianResponse {
    fn from(physician: Physician) -> Self {
        let Physician {
            id,
            name,
            crm,
            phone,
            email,
            biography,
            specialties,
            created_at,
            updated_at,
        } = physician;

        Self {
            id,
            name,
            crm,
            phone,
            email,
            biography,
            specialties,
            created_at,
            updated_at,
        }
    }
}
