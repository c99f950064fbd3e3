//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층은 [`UserStore`] trait에만 의존하고, 운영 환경에서는
//! MongoDB 기반 [`UserRepository`](user_repo::UserRepository)가 주입됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::{UserStore, user_repo::UserRepository};
//!
//! let store: Arc<dyn UserStore> = Arc::new(UserRepository::new(&database));
//! let users = store.find_all().await?;
//! ```

pub mod user_repo;

use async_trait::async_trait;
use crate::domain::entities::users::User;
use crate::errors::AppResult;

/// 사용자 문서 저장소
///
/// 식별자는 저장소가 할당하는 ObjectId의 16진수 문자열입니다.
/// 형식이 잘못된 식별자는 어떤 문서도 가리키지 않는 것으로 취급합니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 새 사용자를 저장하고 할당된 ID를 포함한 문서를 반환합니다.
    async fn insert(&self, user: User) -> AppResult<User>;

    /// 모든 사용자를 조회합니다.
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// 제공된 필드만 갱신하고 갱신 후 문서를 반환합니다. 대상이 없으면 `Ok(None)`.
    async fn update(&self, id: &str, name: Option<String>, email: Option<String>) -> AppResult<Option<User>>;

    /// 문서를 삭제합니다. 실제로 삭제되었으면 `true`.
    async fn delete(&self, id: &str) -> AppResult<bool>;
}
