//! 사용자 생성/수정 요청 DTO
use serde::{Deserialize, Serialize};

/// 사용자 생성(`POST`)과 수정(`PUT`)에 공통으로 사용되는 요청 본문
///
/// JSON 역직렬화 외의 검증은 수행하지 않습니다. 빠진 필드와 `null` 필드는 모두 `None`이 되어
/// 저장되지 않습니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}
