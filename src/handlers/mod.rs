//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   UserService - 캐시 정책 / 비즈니스 로직          ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   UserStore / CollectionCache                   ← Repository / Cache Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 핸들러는 의존성을 `web::Data`로 주입받습니다.
//!
//! ```rust,ignore
//! #[get("")]
//! pub async fn list_users(
//!     service: web::Data<UserService>,
//! ) -> Result<HttpResponse, AppError> {
//!     let users = service.list_users().await?;
//!     Ok(HttpResponse::Ok().json(users))
//! }
//! ```
//!
//! ## 모듈 구성
//!
//! - **`users`**: 사용자 CRUD 엔드포인트 (`/api/users`)
//! - **`metrics`**: Prometheus 메트릭 노출 (`/metrics`)

pub mod users;
pub mod metrics;
