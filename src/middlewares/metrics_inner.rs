//! MetricsMiddleware 측정 로직의 핵심적인 기능
use std::rc::Rc;
use std::sync::Arc;
use std::time::Instant;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::Error;
use futures_util::future::LocalBoxFuture;
use crate::metrics::{HttpMetrics, UNMATCHED_ROUTE};

/// 실제 측정을 수행하는 서비스
///
/// 측정 구간은 요청 진입부터 내부 서비스가 `ServiceResponse`를 돌려줄 때까지입니다.
/// 응답 본문을 클라이언트로 전송하는 시간은 포함되지 않습니다.
pub struct MetricsMiddlewareService<S> {
    pub service: Rc<S>,
    pub metrics: Arc<HttpMetrics>,
}

impl<S, B> Service<ServiceRequest> for MetricsMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let metrics = self.metrics.clone();
        let method = req.method().to_string();
        let started = Instant::now();

        Box::pin(async move {
            let result = service.call(req).await;
            let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

            match &result {
                Ok(res) => {
                    // 라우팅이 끝난 뒤에만 매칭 패턴을 알 수 있습니다.
                    let route = res.request()
                        .match_pattern()
                        .unwrap_or_else(|| UNMATCHED_ROUTE.to_string());
                    metrics.observe(&method, &route, res.status().as_u16(), elapsed_ms);
                }
                Err(e) => {
                    let status = e.as_response_error().status_code();
                    metrics.observe(&method, UNMATCHED_ROUTE, status.as_u16(), elapsed_ms);
                }
            }

            result
        })
    }
}
