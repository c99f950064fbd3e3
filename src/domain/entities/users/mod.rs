//! Users Entity Module
//!
//! 사용자 도메인의 엔티티를 정의합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::User;
//!
//! let user = User::new(Some("Ann".to_string()), Some("ann@x.com".to_string()));
//! ```

pub mod user;

pub use user::User;
