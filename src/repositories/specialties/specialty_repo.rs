//! # 전문분야 MongoDB 리포지토리
//!
//! `especialidades` 컬렉션을 사용합니다. 이름의 고유성은 강제하지 않으므로 별도 인덱스가 없습니다.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{bson::doc, Collection};
use crate::{
    db::Database,
    domain::entities::specialties::Specialty,
    repositories::StoreResult,
};
use super::SpecialtyRepository;

pub const COLLECTION_NAME: &str = "especialidades";

#[derive(Clone)]
pub struct MongoSpecialtyRepository {
    collection: Collection<Specialty>,
}

impl MongoSpecialtyRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection::<Specialty>(COLLECTION_NAME),
        }
    }
}

#[async_trait]
impl SpecialtyRepository for MongoSpecialtyRepository {
    async fn insert(&self, specialty: Specialty) -> StoreResult<Specialty> {
        self.collection
            .insert_one(&specialty)
            .await?;

        Ok(specialty)
    }

    async fn find_all(&self) -> StoreResult<Vec<Specialty>> {
        let cursor = self.collection
            .find(doc! {})
            .await?;

        let specialties: Vec<Specialty> = cursor.try_collect().await?;
        Ok(specialties)
    }
}
