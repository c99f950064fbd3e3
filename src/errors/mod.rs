//! 에러 처리 모듈
//!
//! [`AppError`](errors::AppError)와 [`AppResult`](errors::AppResult)를 재export합니다.

#[allow(clippy::module_inception)]
pub mod errors;

pub use errors::*;
