//! HTTP 요청 메트릭 모듈
//!
//! 요청 처리 시간을 Prometheus 히스토그램으로 수집하고 텍스트 형식으로 노출합니다.
//!
//! ```text
//! http_request_duration_ms{method="GET",route="/api/users",code="200"}
//! ```
//!
//! 레지스트리는 프로세스마다 하나이며 [`MetricsMiddleware`](crate::middlewares::MetricsMiddleware)와
//! `/metrics` 핸들러가 `Arc`로 공유합니다.

use prometheus::{Encoder, HistogramOpts, HistogramVec, Registry, TextEncoder};
use crate::errors::{AppResult, ErrorContext};

/// 요청 처리 시간 히스토그램 이름
pub const REQUEST_DURATION_METRIC: &str = "http_request_duration_ms";

/// 히스토그램 버킷 상한 (밀리초)
pub const REQUEST_DURATION_BUCKETS: [f64; 7] = [50.0, 100.0, 200.0, 300.0, 400.0, 500.0, 1000.0];

/// 라우트에 매칭되지 않은 요청의 route 라벨
pub const UNMATCHED_ROUTE: &str = "unmatched";

/// HTTP 메트릭 레지스트리
pub struct HttpMetrics {
    registry: Registry,
    request_duration: HistogramVec,
}

impl HttpMetrics {
    /// 새 레지스트리를 만들고 요청 히스토그램을 등록합니다.
    ///
    /// Linux에서는 프로세스 메트릭(CPU, 메모리, 파일 디스크립터)도 함께 등록됩니다.
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let opts = HistogramOpts::new(
            REQUEST_DURATION_METRIC,
            "Duration of HTTP requests in ms",
        )
        .buckets(REQUEST_DURATION_BUCKETS.to_vec());

        let request_duration = HistogramVec::new(opts, &["method", "route", "code"])?;
        registry.register(Box::new(request_duration.clone()))?;

        #[cfg(target_os = "linux")]
        registry.register(Box::new(
            prometheus::process_collector::ProcessCollector::for_self(),
        ))?;

        Ok(Self {
            registry,
            request_duration,
        })
    }

    /// 요청 하나의 처리 시간을 기록합니다.
    pub fn observe(&self, method: &str, route: &str, code: u16, duration_ms: f64) {
        self.request_duration
            .with_label_values(&[method, route, &code.to_string()])
            .observe(duration_ms);
    }

    /// 레지스트리를 Prometheus 텍스트 형식으로 렌더링합니다.
    ///
    /// # 반환값
    ///
    /// `(본문, Content-Type)`
    pub fn render(&self) -> AppResult<(String, String)> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();

        encoder
            .encode(&self.registry.gather(), &mut buffer)
            .context("메트릭 인코딩 실패")?;

        let body = String::from_utf8(buffer).context("메트릭 본문이 UTF-8이 아닙니다")?;

        Ok((body, encoder.format_type().to_string()))
    }
}
