//! # Domain Layer Module
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - MongoDB에 저장되는 사용자 문서
//! └── DTOs      - 요청/응답 및 캐시 스냅샷 형태
//! ```

pub mod entities;
pub mod dto;
