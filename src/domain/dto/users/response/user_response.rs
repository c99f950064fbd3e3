use serde::{Deserialize, Serialize};
use crate::domain::entities::users::User;

/// 삭제 확인 메시지
pub const USER_DELETED_MESSAGE: &str = "User deleted";

/// 사용자 응답 DTO
///
/// API 응답과 컬렉션 캐시 스냅샷이 같은 형태를 공유합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User { id, name, email } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            name,
            email,
        }
    }
}

/// 사용자 삭제 응답 DTO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteUserResponse {
    pub message: String,
}

impl DeleteUserResponse {
    /// 삭제 여부와 관계없이 동일한 확인 메시지를 생성합니다.
    pub fn confirmed() -> Self {
        Self {
            message: USER_DELETED_MESSAGE.to_string(),
        }
    }
}
