//! Prometheus 메트릭 노출 핸들러

use std::sync::Arc;
use actix_web::{get, web, HttpResponse};
use crate::errors::AppError;
use crate::metrics::HttpMetrics;

/// 레지스트리를 Prometheus 텍스트 형식으로 반환합니다.
///
/// ```bash
/// curl http://localhost:5000/metrics
/// ```
#[get("/metrics")]
pub async fn metrics_handler(
    metrics: web::Data<Arc<HttpMetrics>>,
) -> Result<HttpResponse, AppError> {
    let (body, content_type) = metrics.render()?;

    Ok(HttpResponse::Ok().content_type(content_type).body(body))
}
