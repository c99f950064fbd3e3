//! 요청 메트릭 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 요청 처리 시간을 측정하여 [`HttpMetrics`]에 기록합니다.

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};
use crate::metrics::HttpMetrics;
use crate::middlewares::metrics_inner::MetricsMiddlewareService;

/// 요청 처리 시간 측정 미들웨어
///
/// 라우팅 이후의 응답에서 route 패턴을 읽으므로 `App` 최상위에 등록해야
/// 모든 요청(매칭되지 않은 요청 포함)이 기록됩니다.
#[derive(Clone)]
pub struct MetricsMiddleware {
    metrics: Arc<HttpMetrics>,
}

impl MetricsMiddleware {
    /// 공유 레지스트리로 미들웨어 생성
    pub fn new(metrics: Arc<HttpMetrics>) -> Self {
        Self { metrics }
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for MetricsMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = MetricsMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(MetricsMiddlewareService {
            service: Rc::new(service),
            metrics: self.metrics.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, web, App, HttpResponse};
    use crate::errors::AppError;

    async fn ok_handler() -> HttpResponse {
        HttpResponse::Ok().finish()
    }

    async fn failing_handler() -> Result<HttpResponse, AppError> {
        Err(AppError::StoreReadError("boom".to_string()))
    }

    #[actix_web::test]
    async fn test_records_route_pattern_not_raw_path() {
        let metrics = Arc::new(HttpMetrics::new().unwrap());
        let app = test::init_service(
            App::new()
                .wrap(MetricsMiddleware::new(metrics.clone()))
                .route("/items/{item_id}", web::get().to(ok_handler)),
        )
        .await;

        let req = test::TestRequest::get().uri("/items/42").to_request();
        let res = test::call_service(&app, req).await;
        assert!(res.status().is_success());

        let (body, _) = metrics.render().unwrap();
        assert!(body.contains(r#"route="/items/{item_id}""#));
        assert!(!body.contains("/items/42"));
    }

    #[actix_web::test]
    async fn test_records_unmatched_and_error_statuses() {
        let metrics = Arc::new(HttpMetrics::new().unwrap());
        let app = test::init_service(
            App::new()
                .wrap(MetricsMiddleware::new(metrics.clone()))
                .route("/broken", web::get().to(failing_handler)),
        )
        .await;

        let req = test::TestRequest::get().uri("/nowhere").to_request();
        test::call_service(&app, req).await;
        let req = test::TestRequest::get().uri("/broken").to_request();
        test::call_service(&app, req).await;

        let (body, _) = metrics.render().unwrap();
        assert!(body.contains(r#"code="404""#));
        assert!(body.contains(r#"route="unmatched""#));
        assert!(body.contains(r#"code="500""#));
        assert!(body.contains(r#"route="/broken""#));
    }
}
