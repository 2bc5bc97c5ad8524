use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::domain::entities::specialties::Specialty;

/// 전문분야 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecialtyResponse {
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<Specialty> for SpecialtyResponse {
    fn from(specialty: Specialty) -> Self {
        Self {
            id: specialty.id,
            name: specialty.name,
            created_at: specialty.created_at,
        }
    }
}
