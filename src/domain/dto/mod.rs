//! 데이터 전송 객체 (Request/Response)
//!
//! 엔티티는 MongoDB 문서 형태(`_id: ObjectId`)를 따르고,
//! DTO는 API 계약(`id: String`)을 따릅니다.

pub mod users;
