//! User Entity Implementation
//!
//! `users` 컬렉션에 저장되는 사용자 문서입니다.

use mongodb::bson::{oid::ObjectId, Document, doc};
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// 스키마는 필드 타입만 선언하며 필수 필드나 유니크 제약은 없습니다.
/// 요청에서 빠진 필드는 저장되지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이름
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// 사용자 이메일
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl User {
    /// 아직 저장되지 않은 새 사용자 생성 (ID는 삽입 시 할당됨)
    pub fn new(name: Option<String>, email: Option<String>) -> Self {
        Self {
            id: None,
            name,
            email,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 제공된 필드만 담은 `$set` 문서를 생성합니다.
    ///
    /// 두 필드가 모두 없으면 빈 문서를 반환합니다.
    pub fn set_document(name: Option<&str>, email: Option<&str>) -> Document {
        let mut update = doc! {};
        if let Some(name) = name {
            update.insert("name", name);
        }
        if let Some(email) = email {
            update.insert("email", email);
        }
        update
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;

    #[test]
    fn test_new_user_has_no_id_until_persisted() {
        let user = User::new(Some("Ann".to_string()), Some("ann@x.com".to_string()));

        assert!(user.id.is_none());
        assert!(user.id_string().is_none());
    }

    #[test]
    fn test_missing_fields_are_not_written_to_document() {
        let user = User::new(Some("Ann".to_string()), None);
        let document = bson::to_document(&user).unwrap();

        assert_eq!(document.get_str("name").unwrap(), "Ann");
        assert!(!document.contains_key("email"));
        assert!(!document.contains_key("_id"));
    }

    #[test]
    fn test_set_document_only_contains_provided_fields() {
        assert_eq!(User::set_document(Some("Anne"), None), doc! { "name": "Anne" });
        assert_eq!(
            User::set_document(Some("Anne"), Some("ann@x.com")),
            doc! { "name": "Anne", "email": "ann@x.com" }
        );
        assert!(User::set_document(None, None).is_empty());
    }
}
