//! 사용자 관리 서비스 모듈
//!
//! 사용자 생성/목록/수정/삭제와 목록 캐싱 정책을 담당합니다.
//!
//! # Features
//!
//! - 전체 목록을 하나의 캐시 키(`users`)에 TTL과 함께 저장하는 read-through 조회
//! - 쓰기 후 캐시 처리 정책 선택 (`retain` / `invalidate`)
//! - 캐시 장애 시 저장소 조회로 대체

pub mod user_service;

pub use user_service::UserService;
