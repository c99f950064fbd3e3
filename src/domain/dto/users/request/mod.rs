//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 본문을 구조화된 Rust 타입으로 변환합니다.
//! 타입 변환 실패는 actix-web의 `Json` 추출기가 400 Bad Request로 응답합니다.

pub mod user_request;

pub use user_request::UserPayload;
