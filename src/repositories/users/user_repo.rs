//! # 사용자 리포지토리 구현
//!
//! `users` 컬렉션에 대한 MongoDB CRUD를 담당합니다.
//! 캐싱은 이 계층이 아니라 서비스 계층의 정책으로 처리됩니다.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::debug;
use mongodb::{
    bson::{doc, oid::ObjectId},
    options::{FindOneAndUpdateOptions, ReturnDocument},
    Collection,
};
use crate::db::Database;
use crate::domain::entities::users::User;
use crate::errors::{AppError, AppResult};
use crate::repositories::users::UserStore;

/// 사용자 컬렉션 이름
pub const USERS_COLLECTION: &str = "users";

/// 사용자 데이터 액세스 리포지토리
///
/// ## 에러 처리
///
/// - **StoreReadError**: 조회 실패
/// - **StoreWriteError**: 삽입/갱신/삭제 실패
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let repo = UserRepository::new(&database);
///
/// let created = repo.insert(User::new(Some("Ann".into()), Some("ann@x.com".into()))).await?;
/// let id = created.id_string().unwrap();
///
/// let updated = repo.update(&id, Some("Anne".into()), None).await?;
/// let deleted = repo.delete(&id).await?;
/// ```
#[derive(Clone)]
pub struct UserRepository {
    collection: Collection<User>,
}

impl UserRepository {
    /// 데이터베이스 핸들에서 `users` 컬렉션 리포지토리를 생성합니다.
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.get_database().collection::<User>(USERS_COLLECTION),
        }
    }
}

/// 16진수 문자열을 ObjectId로 변환합니다. 형식이 잘못되면 `None`.
fn parse_object_id(id: &str) -> Option<ObjectId> {
    ObjectId::parse_str(id).ok()
}

#[async_trait]
impl UserStore for UserRepository {
    async fn insert(&self, mut user: User) -> AppResult<User> {
        let result = self.collection
            .insert_one(&user)
            .await
            .map_err(|e| AppError::StoreWriteError(e.to_string()))?;

        let id = result.inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::StoreWriteError("삽입된 문서의 ID가 ObjectId가 아닙니다".to_string()))?;

        user.id = Some(id);
        Ok(user)
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let cursor = self.collection
            .find(doc! {})
            .await
            .map_err(|e| AppError::StoreReadError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::StoreReadError(e.to_string()))
    }

    /// 제공된 필드를 `$set`으로 갱신합니다.
    ///
    /// 갱신할 필드가 하나도 없으면 MongoDB가 빈 `$set`을 거부하므로 현재 문서만 조회합니다.
    async fn update(&self, id: &str, name: Option<String>, email: Option<String>) -> AppResult<Option<User>> {
        let Some(object_id) = parse_object_id(id) else {
            debug!("ObjectId 형식이 아닌 ID로 갱신 요청: {}", id);
            return Ok(None);
        };

        let update_doc = User::set_document(name.as_deref(), email.as_deref());

        if update_doc.is_empty() {
            return self.collection
                .find_one(doc! { "_id": object_id })
                .await
                .map_err(|e| AppError::StoreReadError(e.to_string()));
        }

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection
            .find_one_and_update(
                doc! { "_id": object_id },
                doc! { "$set": update_doc },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::StoreWriteError(e.to_string()))
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let Some(object_id) = parse_object_id(id) else {
            debug!("ObjectId 형식이 아닌 ID로 삭제 요청: {}", id);
            return Ok(false);
        };

        let result = self.collection
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::StoreWriteError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_object_id_accepts_hex() {
        let id = ObjectId::new();

        assert_eq!(parse_object_id(&id.to_hex()), Some(id));
    }

    #[test]
    fn test_parse_object_id_rejects_malformed() {
        assert!(parse_object_id("not-an-id").is_none());
        assert!(parse_object_id("").is_none());
        assert!(parse_object_id("65a1f0c2e4b0a1b2c3d4e5").is_none());
    }
}
