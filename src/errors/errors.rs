//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 저장소/캐시 계층의 실패를
//! 일관된 HTTP 응답으로 변환합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `StoreReadError` | 500 | MongoDB 조회 실패 |
//! | `StoreWriteError` | 500 | MongoDB 삽입/수정/삭제 실패 |
//! | `CacheError` | 500 | Redis 쓰기 실패 |
//! | `ConnectionError` | 500 | 저장소/캐시 연결 불가 |
//! | `ConfigError` | 500 | 잘못된 설정값 |
//! | `InternalError` | 500 | 직렬화 등 예상치 못한 오류 |
//!
//! 캐시 읽기 실패는 이 타입으로 노출되지 않습니다. 서비스 계층에서 캐시 미스로 처리됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! let users = collection.find(doc! {}).await
//!     .map_err(|e| AppError::StoreReadError(e.to_string()))?;
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 `{"error": "..."}` 형태로 전달됩니다.
/// 구조화된 에러 코드는 정의하지 않습니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 저장소 조회 에러 (500 Internal Server Error)
    #[error("Store read error: {0}")]
    StoreReadError(String),

    /// 저장소 쓰기 에러 (500 Internal Server Error)
    #[error("Store write error: {0}")]
    StoreWriteError(String),

    /// 캐시 쓰기 에러 (500 Internal Server Error)
    #[error("Cache error: {0}")]
    CacheError(String),

    /// 저장소/캐시 연결 에러 (500 Internal Server Error)
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// 설정 에러 (500 Internal Server Error)
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 5xx 응답이므로 상세 내용은 서버 로그에 남기고, 본문에는 에러 메시지만 담습니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        log::error!("요청 처리 실패: {}", self);

        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::http::StatusCode;

    #[test]
    fn test_store_errors_map_to_internal_server_error() {
        let read = AppError::StoreReadError("find failed".to_string());
        let write = AppError::StoreWriteError("insert failed".to_string());

        assert_eq!(read.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(write.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_cache_error_response() {
        let error = AppError::CacheError("SETEX refused".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_message_includes_category() {
        let error = AppError::StoreReadError("server selection timeout".to_string());

        assert_eq!(error.to_string(), "Store read error: server selection timeout");
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
