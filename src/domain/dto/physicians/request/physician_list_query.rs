//! 의사 목록 조회 쿼리 파라미터

use serde::Deserialize;
use crate::domain::entities::physicians::PhysicianFilter;
use crate::utils::string_utils::deserialize_optional_string;

/// `GET /medicos?nome=&especialidade=`
///
/// 빈 값이나 공백만 있는 파라미터는 지정하지 않은 것으로 취급합니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PhysicianListQuery {
    #[serde(rename = "nome", default, deserialize_with = "deserialize_optional_string")]
    pub name: Option<String>,

    #[serde(rename = "especialidade", default, deserialize_with = "deserialize_optional_string")]
    pub specialty: Option<String>,
}

impl From<PhysicianListQuery> for PhysicianFilter {
    fn from(query: PhysicianListQuery) -> Self {
        PhysicianFilter::new(query.name, query.specialty)
    }
}
