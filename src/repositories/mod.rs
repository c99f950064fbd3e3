//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! MongoDB를 유일한 원본 저장소로 사용합니다.

pub mod users;
