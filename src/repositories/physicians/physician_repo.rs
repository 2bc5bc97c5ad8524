//! # 의사 MongoDB 리포지토리
//!
//! `medicos` 컬렉션에 대한 CRUD 연산을 담당합니다.
//!
//! - **컬렉션명**: `medicos`
//! - **인덱스**: `crm` (unique, `crm_unique`)

use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::debug;
use mongodb::{
    bson::{doc, to_bson, Document},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};
use crate::{
    db::Database,
    domain::entities::physicians::{Physician, PhysicianChanges, PhysicianFilter},
    repositories::{StoreError, StoreResult},
    utils::string_utils::escape_regex,
};
use super::PhysicianRepository;

/// 컬렉션 이름
pub const COLLECTION_NAME: &str = "medicos";

/// MongoDB 기반 의사 리포지토리
#[derive(Clone)]
pub struct MongoPhysicianRepository {
    collection: Collection<Physician>,
}

impl MongoPhysicianRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection::<Physician>(COLLECTION_NAME),
        }
    }

    /// 리포지토리에 필요한 인덱스를 생성합니다.
    ///
    /// CRM 고유 인덱스는 사전 중복 검사와 삽입 사이의 경쟁 상태에서도
    /// 같은 CRM이 두 번 저장되지 않도록 합니다.
    pub async fn create_indexes(&self) -> StoreResult<()> {
        let crm_index = IndexModel::builder()
            .keys(doc! { "crm": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("crm_unique".to_string())
                .build())
            .build();

        self.collection.create_index(crm_index).await?;

        Ok(())
    }
}

/// 목록 필터를 MongoDB 쿼리 문서로 변환합니다.
///
/// - 이름: 이스케이프된 `$regex` + `i` 옵션 (대소문자 무시 부분 일치)
/// - 전문분야: 배열 필드에 대한 동등 조건 (원소 포함 여부)
pub fn filter_document(filter: &PhysicianFilter) -> Document {
    let mut query = Document::new();

    if let Some(name) = &filter.name {
        query.insert("name", doc! { "$regex": escape_regex(name), "$options": "i" });
    }

    if let Some(specialty) = &filter.specialty {
        query.insert("specialties", specialty.as_str());
    }

    debug!("의사 목록 쿼리: {}", query);
    query
}

/// 수정 내용을 `$set` 문서로 변환합니다.
///
/// `None` 필드는 포함하지 않고, 선택 필드의 `Some(None)`은 `null`로 설정합니다.
pub fn update_document(changes: &PhysicianChanges) -> StoreResult<Document> {
    let mut set = Document::new();

    if let Some(name) = &changes.name {
        set.insert("name", name.as_str());
    }
    if let Some(phone) = &changes.phone {
        set.insert("phone", phone.clone());
    }
    if let Some(email) = &changes.email {
        set.insert("email", email.clone());
    }
    if let Some(biography) = &changes.biography {
        set.insert("biography", biography.clone());
    }
    if let Some(specialties) = &changes.specialties {
        set.insert("specialties", specialties.clone());
    }
    set.insert("updated_at", to_bson(&changes.updated_at)?);

    Ok(doc! { "$set": set })
}

#[async_trait]
impl PhysicianRepository for MongoPhysicianRepository {
    async fn find_by_crm(&self, crm: &str) -> StoreResult<Option<Physician>> {
        let physician = self.collection
            .find_one(doc! { "crm": crm })
            .await?;

        Ok(physician)
    }

    async fn find_all(&self, filter: &PhysicianFilter) -> StoreResult<Vec<Physician>> {
        let cursor = self.collection
            .find(filter_document(filter))
            .await?;

        let physicians: Vec<Physician> = cursor.try_collect().await?;
        Ok(physicians)
    }

    async fn insert(&self, physician: Physician) -> StoreResult<Physician> {
        self.collection
            .insert_one(&physician)
            .await?;

        Ok(physician)
    }

    async fn update_by_crm(&self, crm: &str, changes: &PhysicianChanges) -> StoreResult<Physician> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection
            .find_one_and_update(doc! { "crm": crm }, update_document(changes)?)
            .with_options(options)
            .await?
            .ok_or(StoreError::NotFound)
    }

    async fn delete_by_crm(&self, crm: &str) -> StoreResult<()> {
        let result = self.collection
            .delete_one(doc! { "crm": crm })
            .await?;

        if result.deleted_count == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }
}
