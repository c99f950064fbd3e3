//! 캐싱 계층 모듈
//!
//! Redis를 백엔드로 하는 만료 가능한 키-값 캐시를 제공합니다.
//! 서비스 계층은 [`CollectionCache`] trait에만 의존하므로
//! 테스트에서는 메모리 구현으로 교체할 수 있습니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::caching::redis::RedisClient;
//!
//! let cache = RedisClient::connect().await?;
//! cache.set_with_expiry("users", json, Duration::from_secs(60)).await?;
//! let cached: Option<String> = cache.get("users").await?;
//! ```
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod redis;

use std::time::Duration;
use async_trait::async_trait;
use crate::errors::AppResult;

/// 만료 시간을 지원하는 문자열 캐시
///
/// 값의 직렬화는 호출자가 담당합니다.
#[async_trait]
pub trait CollectionCache: Send + Sync {
    /// 키의 값을 조회합니다. 만료되었거나 없으면 `Ok(None)`.
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// 값을 저장하고 `ttl` 후 만료되도록 설정합니다. 기존 값은 덮어씁니다.
    async fn set_with_expiry(&self, key: &str, value: String, ttl: Duration) -> AppResult<()>;

    /// 키를 삭제합니다. 키가 없어도 성공입니다.
    async fn del(&self, key: &str) -> AppResult<()>;
}
