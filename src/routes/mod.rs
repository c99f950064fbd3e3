//! API 라우트 설정 모듈
//!
//! 사용자 CRUD, 메트릭, 헬스체크 엔드포인트를 등록합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(user_service.clone())
//!     .app_data(metrics_data.clone())
//!     .configure(configure_all_routes);
//! ```

use crate::handlers;
use actix_cors::Cors;
use actix_web::web;
use chrono;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // Prometheus exposition
    cfg.service(handlers::metrics::metrics_handler);

    configure_user_routes(cfg);
}

/// 사용자 관련 라우트를 설정합니다
///
/// - `POST /api/users` - 사용자 생성
/// - `GET /api/users` - 사용자 목록 (캐시)
/// - `PUT /api/users/{user_id}` - 사용자 수정
/// - `DELETE /api/users/{user_id}` - 사용자 삭제
///
/// # Examples
///
/// ```bash
/// curl -X POST http://localhost:5000/api/users \
///   -H "Content-Type: application/json" \
///   -d '{"name":"Ann","email":"ann@x.com"}'
///
/// curl http://localhost:5000/api/users
/// ```
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/users")
            .service(handlers::users::create_user)
            .service(handlers::users::list_users)
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user)
    );
}

/// CORS 설정을 구성합니다
///
/// 모든 Origin에서 사용자 API와 메트릭에 접근할 수 있도록 허용합니다.
pub fn configure_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allow_any_header()
        .max_age(3600)
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 저장소/캐시 연결 상태는 확인하지 않습니다. 프로세스가 요청을 처리할 수 있는지만 나타냅니다.
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "users_cache_service",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00+00:00"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
