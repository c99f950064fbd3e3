//! 테스트 전용 메모리 구현
//!
//! MongoDB/Redis 없이 서비스와 핸들러를 검증하기 위한 [`UserStore`] / [`CollectionCache`]
//! 구현입니다. 캐시는 수동으로 전진시키는 시계를 사용하여 TTL 만료를 재현합니다.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use crate::caching::CollectionCache;
use crate::domain::entities::users::User;
use crate::errors::{AppError, AppResult};
use crate::repositories::users::UserStore;

/// 메모리 사용자 저장소
#[derive(Default)]
pub struct MemoryUserStore {
    users: Mutex<Vec<User>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    find_all_calls: AtomicUsize,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// `find_all`이 호출된 횟수
    pub fn find_all_calls(&self) -> usize {
        self.find_all_calls.load(Ordering::SeqCst)
    }

    fn check_writes(&self) -> AppResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AppError::StoreWriteError("simulated write failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn insert(&self, mut user: User) -> AppResult<User> {
        self.check_writes()?;
        user.id = Some(ObjectId::new());
        self.users.lock().unwrap().push(user.clone());
        Ok(user)
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        self.find_all_calls.fetch_add(1, Ordering::SeqCst);
        // 실제 드라이버처럼 I/O 지점에서 한 번 양보하여 동시 요청이 교차되도록 합니다.
        actix_web::rt::task::yield_now().await;
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(AppError::StoreReadError("simulated read failure".to_string()));
        }
        Ok(self.users.lock().unwrap().clone())
    }

    async fn update(&self, id: &str, name: Option<String>, email: Option<String>) -> AppResult<Option<User>> {
        self.check_writes()?;
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        let mut users = self.users.lock().unwrap();
        let Some(user) = users.iter_mut().find(|u| u.id == Some(object_id)) else {
            return Ok(None);
        };

        if name.is_some() {
            user.name = name;
        }
        if email.is_some() {
            user.email = email;
        }
        Ok(Some(user.clone()))
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        self.check_writes()?;
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(false);
        };

        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.id != Some(object_id));
        Ok(users.len() < before)
    }
}

/// 메모리 TTL 캐시
///
/// 만료 판정은 실제 시간이 아니라 `advance`로 누적된 가상 시간으로 합니다.
#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, (String, Duration)>>,
    now: Mutex<Duration>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    set_calls: AtomicUsize,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// 가상 시계를 전진시킵니다.
    pub fn advance(&self, by: Duration) {
        *self.now.lock().unwrap() += by;
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// `set_with_expiry` 호출 횟수
    pub fn set_calls(&self) -> usize {
        self.set_calls.load(Ordering::SeqCst)
    }

    /// 실패 주입 없이 현재 유효한 값을 읽습니다.
    pub fn peek(&self, key: &str) -> Option<String> {
        let now = *self.now.lock().unwrap();
        self.entries
            .lock()
            .unwrap()
            .get(key)
            .filter(|(_, expires_at)| *expires_at > now)
            .map(|(value, _)| value.clone())
    }

    /// 만료 시간을 무시하고 값을 직접 기록합니다.
    pub fn put_raw(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), (value.to_string(), Duration::MAX));
    }
}

#[async_trait]
impl CollectionCache for MemoryCache {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(AppError::ConnectionError("simulated cache outage".to_string()));
        }
        Ok(self.peek(key))
    }

    async fn set_with_expiry(&self, key: &str, value: String, ttl: Duration) -> AppResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AppError::CacheError("simulated cache write failure".to_string()));
        }
        self.set_calls.fetch_add(1, Ordering::SeqCst);
        let expires_at = *self.now.lock().unwrap() + ttl;
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), (value, expires_at));
        Ok(())
    }

    async fn del(&self, key: &str) -> AppResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AppError::CacheError("simulated cache delete failure".to_string()));
        }
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}
