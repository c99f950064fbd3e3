//! # Configuration Module
//!
//! 서비스 설정을 환경 변수 기반으로 중앙집중식 관리합니다.
//! `PROFILE`에 따라 `.env.dev` / `.env.prod` 파일이 먼저 로드된 뒤 읽힙니다.
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 저장소 / 캐시
//! export MONGO_URI="mongodb://localhost:27017/users_service"
//! export REDIS_URL="redis://localhost:6379"
//!
//! # 사용자 목록 캐시
//! export USERS_CACHE_TTL_SECONDS="60"
//! export USERS_CACHE_WRITE_POLICY="retain"   # retain | invalidate
//!
//! # 서버
//! export HOST="0.0.0.0"
//! export PORT="5000"
//! export WORKERS="1"
//! ```

pub mod data_config;

pub use data_config::*;
