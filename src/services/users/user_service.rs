//! # 사용자 관리 서비스 구현
//!
//! 저장소와 캐시를 조합하여 사용자 목록의 read-through 캐싱을 구현합니다.
//!
//! ## 캐시 정책
//!
//! ```text
//!   list_users()
//!       │
//!       ▼
//!   cache.get("users") ──── 존재 + 역직렬화 성공 ────▶ 스냅샷 반환 (저장소 미접근)
//!       │
//!       │ 없음 / 만료 / 읽기 실패 / 손상된 값
//!       ▼
//!   store.find_all() ──▶ cache.set_with_expiry("users", json, ttl) ──▶ 결과 반환
//! ```
//!
//! - 캐시는 컬렉션 전체를 하나의 키에 담습니다. 사용자별 항목은 없습니다.
//! - 캐시 읽기 실패는 캐시 미스로 처리됩니다. 이것이 실패를 흡수하는 유일한 지점입니다.
//! - 기본 정책(`Retain`)에서 생성/수정/삭제는 캐시를 건드리지 않으므로,
//!   목록 조회는 쓰기 후 최대 TTL 동안 이전 스냅샷을 반환할 수 있습니다.
//! - `Invalidate` 정책에서는 실제로 변경이 일어난 쓰기 후 캐시 항목을 삭제합니다.

use std::sync::Arc;
use log::{debug, info, warn};
use crate::caching::CollectionCache;
use crate::config::{CacheSettings, CacheWritePolicy, USERS_CACHE_KEY};
use crate::domain::dto::users::request::UserPayload;
use crate::domain::dto::users::response::UserResponse;
use crate::domain::entities::users::User;
use crate::errors::{AppError, AppResult, ErrorContext};
use crate::repositories::users::UserStore;

/// 사용자 리소스 비즈니스 로직 서비스
///
/// 프로세스 시작 시 저장소/캐시 핸들을 주입받아 생성되고,
/// `web::Data`로 모든 워커의 핸들러와 공유됩니다.
///
/// ```rust,ignore
/// let service = UserService::new(store, cache, CacheSettings::from_env());
/// let users = service.list_users().await?;
/// ```
pub struct UserService {
    store: Arc<dyn UserStore>,
    cache: Arc<dyn CollectionCache>,
    settings: CacheSettings,
}

impl UserService {
    pub fn new(
        store: Arc<dyn UserStore>,
        cache: Arc<dyn CollectionCache>,
        settings: CacheSettings,
    ) -> Self {
        Self {
            store,
            cache,
            settings,
        }
    }

    /// 새 사용자 생성
    ///
    /// # 반환값
    ///
    /// * `Ok(UserResponse)` - 저장소가 할당한 ID를 포함한 사용자
    /// * `Err(AppError::StoreWriteError)` - 저장 실패
    pub async fn create_user(&self, payload: UserPayload) -> AppResult<UserResponse> {
        let user = User::new(payload.name, payload.email);
        let created = self.store.insert(user).await?;

        info!("사용자 생성: {}", created.id_string().unwrap_or_default());
        self.after_write().await;

        Ok(UserResponse::from(created))
    }

    /// 전체 사용자 목록 조회 (read-through 캐시)
    ///
    /// # 반환값
    ///
    /// * `Ok(Vec<UserResponse>)` - 캐시 스냅샷 또는 저장소에서 새로 읽은 목록
    /// * `Err(AppError::StoreReadError)` - 캐시 미스 상황에서 저장소 조회 실패
    /// * `Err(AppError::CacheError)` - 저장소 조회 후 캐시 기록 실패
    pub async fn list_users(&self) -> AppResult<Vec<UserResponse>> {
        if let Some(cached) = self.read_snapshot().await {
            debug!("사용자 목록 캐시 히트 ({}건)", cached.len());
            return Ok(cached);
        }

        debug!("사용자 목록 캐시 미스, 저장소 조회");
        let users: Vec<UserResponse> = self.store
            .find_all()
            .await?
            .into_iter()
            .map(UserResponse::from)
            .collect();

        let json = serde_json::to_string(&users).context("사용자 목록 직렬화 실패")?;
        self.cache
            .set_with_expiry(USERS_CACHE_KEY, json, self.settings.ttl)
            .await?;

        Ok(users)
    }

    /// 사용자 정보 수정
    ///
    /// 요청에 포함된 필드만 갱신합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(UserResponse))` - 갱신 후 사용자
    /// * `Ok(None)` - 해당 ID의 사용자가 없음 (에러 아님)
    /// * `Err(AppError::StoreWriteError)` - 갱신 실패
    pub async fn update_user(&self, id: &str, payload: UserPayload) -> AppResult<Option<UserResponse>> {
        let updated = self.store.update(id, payload.name, payload.email).await?;

        match updated {
            Some(user) => {
                info!("사용자 수정: {}", id);
                self.after_write().await;
                Ok(Some(UserResponse::from(user)))
            }
            None => {
                debug!("수정 대상 사용자 없음: {}", id);
                Ok(None)
            }
        }
    }

    /// 사용자 삭제
    ///
    /// 대상이 없어도 성공입니다. 반환값은 실제 삭제 여부이며 응답에는 반영되지 않습니다.
    pub async fn delete_user(&self, id: &str) -> AppResult<bool> {
        let deleted = self.store.delete(id).await?;

        if deleted {
            info!("사용자 삭제: {}", id);
            self.after_write().await;
        } else {
            debug!("삭제 대상 사용자 없음: {}", id);
        }

        Ok(deleted)
    }

    /// 캐시에서 스냅샷을 읽습니다. 읽기 실패와 손상된 값은 모두 `None`(미스)입니다.
    async fn read_snapshot(&self) -> Option<Vec<UserResponse>> {
        let raw = match self.cache.get(USERS_CACHE_KEY).await {
            Ok(raw) => raw?,
            Err(e) => {
                warn!("캐시 읽기 실패, 저장소로 진행: {}", e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(users) => Some(users),
            Err(e) => {
                warn!("캐시 스냅샷 역직렬화 실패, 저장소로 진행: {}", e);
                None
            }
        }
    }

    /// 쓰기 성공 후 정책에 따라 컬렉션 캐시를 처리합니다.
    async fn after_write(&self) {
        match self.settings.write_policy {
            CacheWritePolicy::Retain => {}
            CacheWritePolicy::Invalidate => {
                if let Err(e) = self.invalidate_collection_cache().await {
                    warn!("사용자 목록 캐시 무효화 실패: {}", e);
                }
            }
        }
    }

    async fn invalidate_collection_cache(&self) -> Result<(), AppError> {
        self.cache.del(USERS_CACHE_KEY).await?;
        debug!("사용자 목록 캐시 무효화");
        Ok(())
    }
}
