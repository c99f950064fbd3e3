//! 데이터 및 서버 설정 관리 모듈
//!
//! 저장소(MongoDB), 캐시(Redis), 서버 바인딩 관련 설정을 환경 변수에서 읽어옵니다.
//! 파싱 로직은 순수 함수로 분리하여 환경 변수 없이 테스트할 수 있습니다.

use std::env;
use std::time::Duration;
use log::error;

/// 사용자 목록 캐시 키
pub const USERS_CACHE_KEY: &str = "users";

/// 캐시 TTL 기본값 (초)
pub const DEFAULT_CACHE_TTL_SECONDS: u64 = 60;

/// 쓰기 연산 후 컬렉션 캐시 처리 정책
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheWritePolicy {
    /// 쓰기 후 캐시를 그대로 둡니다. TTL이 끝날 때까지 목록 조회가 이전 스냅샷을 반환할 수 있습니다.
    #[default]
    Retain,
    /// 쓰기 성공 후 캐시 항목을 삭제하여 다음 목록 조회가 저장소를 다시 읽도록 합니다.
    Invalidate,
}

impl CacheWritePolicy {
    /// 문자열에서 정책을 파싱합니다. (대소문자 무관)
    ///
    /// 알 수 없는 값이면 `None`을 반환합니다.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "retain" | "keep" => Some(CacheWritePolicy::Retain),
            "invalidate" | "evict" => Some(CacheWritePolicy::Invalidate),
            _ => None,
        }
    }
}

/// 사용자 목록 캐시 설정
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheSettings {
    /// 스냅샷 유효 기간
    pub ttl: Duration,
    /// 쓰기 후 캐시 처리 정책
    pub write_policy: CacheWritePolicy,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECONDS),
            write_policy: CacheWritePolicy::Retain,
        }
    }
}

impl CacheSettings {
    /// 환경 변수에서 캐시 설정을 로드합니다.
    ///
    /// # Environment Variables
    ///
    /// - `USERS_CACHE_TTL_SECONDS`: 스냅샷 TTL (기본값: 60, 0 이하는 거부)
    /// - `USERS_CACHE_WRITE_POLICY`: `retain` | `invalidate` (기본값: retain)
    pub fn from_env() -> Self {
        let ttl = env::var("USERS_CACHE_TTL_SECONDS")
            .ok()
            .map(|raw| {
                parse_ttl_seconds(&raw).unwrap_or_else(|| {
                    error!(
                        "USERS_CACHE_TTL_SECONDS 파싱 실패: {}. 기본값 {} 사용",
                        raw, DEFAULT_CACHE_TTL_SECONDS
                    );
                    DEFAULT_CACHE_TTL_SECONDS
                })
            })
            .unwrap_or(DEFAULT_CACHE_TTL_SECONDS);

        let write_policy = env::var("USERS_CACHE_WRITE_POLICY")
            .ok()
            .map(|raw| {
                CacheWritePolicy::parse(&raw).unwrap_or_else(|| {
                    error!("USERS_CACHE_WRITE_POLICY 파싱 실패: {}. 기본값 retain 사용", raw);
                    CacheWritePolicy::Retain
                })
            })
            .unwrap_or_default();

        Self {
            ttl: Duration::from_secs(ttl),
            write_policy,
        }
    }
}

/// TTL 문자열을 초 단위로 파싱합니다. Redis `SETEX`는 0을 허용하지 않으므로 양수만 받습니다.
pub fn parse_ttl_seconds(raw: &str) -> Option<u64> {
    raw.trim().parse::<u64>().ok().filter(|secs| *secs > 0)
}

/// 문서 저장소(MongoDB) 연결 설정
pub struct StoreConfig;

impl StoreConfig {
    /// MongoDB 연결 URI
    ///
    /// - `MONGO_URI` (기본값: "mongodb://localhost:27017/users_service")
    pub fn uri() -> String {
        env::var("MONGO_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017/users_service".to_string())
    }

    /// 명시적으로 지정된 데이터베이스 이름
    ///
    /// - `DATABASE_NAME`: 설정되지 않은 경우 URI의 기본 데이터베이스를 사용합니다.
    pub fn database_name() -> Option<String> {
        env::var("DATABASE_NAME").ok().filter(|name| !name.trim().is_empty())
    }

    /// 서버 선택 타임아웃. 시작 시점의 연결 확인에만 영향을 줍니다.
    pub fn server_selection_timeout() -> Duration {
        Duration::from_secs(5)
    }
}

/// 캐시(Redis) 연결 설정
pub struct CacheConfig;

impl CacheConfig {
    /// Redis 연결 URL
    ///
    /// - `REDIS_URL` (기본값: "redis://localhost:6379")
    pub fn url() -> String {
        env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string())
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// - `PORT`: 커스텀 포트 설정 (기본값: 5000)
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse()
            .unwrap_or(5000)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    ///
    /// - `HOST`: 커스텀 호스트 설정 (기본값: "0.0.0.0")
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// actix 워커 수를 반환합니다.
    ///
    /// 각 워커는 단일 스레드 이벤트 루프입니다.
    ///
    /// - `WORKERS`: 워커 수 (기본값: 1, 0은 거부)
    pub fn workers() -> usize {
        env::var("WORKERS")
            .ok()
            .and_then(|raw| raw.parse::<usize>().ok())
            .filter(|workers| *workers > 0)
            .unwrap_or(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_policy_from_string() {
        assert_eq!(CacheWritePolicy::parse("retain"), Some(CacheWritePolicy::Retain));
        assert_eq!(CacheWritePolicy::parse(" Invalidate "), Some(CacheWritePolicy::Invalidate));
        assert_eq!(CacheWritePolicy::parse("evict"), Some(CacheWritePolicy::Invalidate));
        assert_eq!(CacheWritePolicy::parse("sometimes"), None);
    }

    #[test]
    fn test_ttl_parsing_rejects_zero_and_garbage() {
        assert_eq!(parse_ttl_seconds("60"), Some(60));
        assert_eq!(parse_ttl_seconds(" 5 "), Some(5));
        assert_eq!(parse_ttl_seconds("0"), None);
        assert_eq!(parse_ttl_seconds("-1"), None);
        assert_eq!(parse_ttl_seconds("a minute"), None);
    }

    #[test]
    fn test_cache_settings_default_is_sixty_second_retain() {
        let settings = CacheSettings::default();

        assert_eq!(settings.ttl, Duration::from_secs(60));
        assert_eq!(settings.write_policy, CacheWritePolicy::Retain);
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 5000);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "0.0.0.0");
        }

        if env::var("WORKERS").is_err() {
            assert_eq!(ServerConfig::workers(), 1);
        }
    }
}
