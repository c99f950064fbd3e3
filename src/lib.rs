//! 사용자 캐시 서비스
//!
//! MongoDB에 사용자 문서를 저장하고, 전체 목록을 Redis에 TTL과 함께 캐싱하는
//! 사용자 CRUD HTTP 서비스입니다. 모든 요청의 처리 시간은 Prometheus 히스토그램으로 수집됩니다.
//!
//! # Features
//!
//! - **사용자 CRUD**: 생성, 목록, 수정, 삭제 (`/api/users`)
//! - **Read-through 캐시**: 전체 목록 스냅샷을 `users` 키에 60초 TTL로 저장
//! - **쓰기 정책**: 쓰기 후 캐시 유지(기본) 또는 무효화
//! - **메트릭**: `http_request_duration_ms` 히스토그램과 `/metrics` 노출
//! - **명시적 의존성 주입**: 저장소/캐시 핸들을 시작 시점에 생성하여 `web::Data`로 공유
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 + MetricsMiddleware
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   UserService   │ ← 캐시 정책
//! └─────────────────┘
//!      │        │
//!      ▼        ▼
//! ┌─────────┐ ┌─────────┐
//! │ MongoDB │ │  Redis  │
//! └─────────┘ └─────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use users_cache_service::services::users::UserService;
//!
//! let store = Arc::new(UserRepository::new(&database));
//! let cache = Arc::new(RedisClient::connect().await?);
//! let service = UserService::new(store, cache, CacheSettings::from_env());
//!
//! let users = service.list_users().await?;
//! ```

pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod metrics;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;

#[cfg(test)]
pub(crate) mod testing;
