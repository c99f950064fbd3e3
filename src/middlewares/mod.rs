//! 미들웨어 모듈
//!
//! ActixWeb 애플리케이션의 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 1. 메트릭 미들웨어 (MetricsMiddleware)
//! - 모든 요청의 처리 시간 측정
//! - method / route 패턴 / 상태 코드 라벨로 히스토그램에 기록
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{App, HttpServer};
//! use crate::middlewares::MetricsMiddleware;
//!
//! let metrics = Arc::new(HttpMetrics::new()?);
//!
//! HttpServer::new(move || {
//!     App::new()
//!         .wrap(MetricsMiddleware::new(metrics.clone()))
//!         .service(/* 라우트들 */)
//! })
//! ```

pub mod metrics_middleware;
mod metrics_inner;

// 미들웨어 재export
pub use metrics_middleware::MetricsMiddleware;
