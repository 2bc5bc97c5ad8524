//! # 사용자 MongoDB 리포지토리
//!
//! `usuarios` 컬렉션에 대한 CRUD 연산을 담당합니다.
//! ID는 UUID 문자열이므로 형식이 잘못된 ID도 단순히 일치하는 문서가 없는 것으로 처리됩니다.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, to_bson, Document},
    options::{FindOneAndUpdateOptions, ReturnDocument},
    Collection,
};
use crate::{
    db::Database,
    domain::entities::users::{User, UserChanges},
    repositories::{StoreError, StoreResult},
};
use super::UserRepository;

pub const COLLECTION_NAME: &str = "usuarios";

/// MongoDB 기반 사용자 리포지토리
#[derive(Clone)]
pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection::<User>(COLLECTION_NAME),
        }
    }
}

/// 수정 내용을 `$set` 문서로 변환합니다.
fn update_document(changes: &UserChanges) -> StoreResult<Document> {
    let mut set = Document::new();

    if let Some(email) = &changes.email {
        set.insert("email", email.as_str());
    }
    if let Some(password) = &changes.password {
        set.insert("password", password.as_str());
    }
    set.insert("updated_at", to_bson(&changes.updated_at)?);

    Ok(doc! { "$set": set })
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn insert(&self, user: User) -> StoreResult<User> {
        self.collection
            .insert_one(&user)
            .await?;

        Ok(user)
    }

    async fn find_all(&self) -> StoreResult<Vec<User>> {
        let cursor = self.collection
            .find(doc! {})
            .await?;

        let users: Vec<User> = cursor.try_collect().await?;
        Ok(users)
    }

    async fn update_by_id(&self, id: &str, changes: &UserChanges) -> StoreResult<User> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection
            .find_one_and_update(doc! { "_id": id }, update_document(changes)?)
            .with_options(options)
            .await?
            .ok_or(StoreError::NotFound)
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<()> {
        let result = self.collection
            .delete_one(doc! { "_id": id })
            .await?;

        if result.deleted_count == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }
}
