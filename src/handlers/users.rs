//! # User Management HTTP Handlers
//!
//! 사용자 관리와 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/users` | 새 사용자 생성 | 200 OK |
//! | `GET` | `/api/users` | 사용자 목록 조회 (캐시) | 200 OK |
//! | `PUT` | `/api/users/{user_id}` | 사용자 수정, 없으면 `null` | 200 OK |
//! | `DELETE` | `/api/users/{user_id}` | 사용자 삭제, 항상 확인 메시지 | 200 OK |
//!
//! 저장소/캐시 실패는 [`AppError`]를 통해 `500 {"error": "..."}`로 변환됩니다.
//! 디코딩할 수 없는 요청 본문은 actix-web의 JSON 추출기가 400으로 거부합니다.
//!
//! ## 목록 조회와 캐시
//!
//! `GET /api/users`는 최대 TTL(기본 60초) 동안 캐시된 스냅샷을 반환합니다.
//! 기본 정책에서는 생성/수정/삭제 직후에도 이전 목록이 보일 수 있습니다.

use actix_web::{web, HttpResponse, get, post, put, delete};
use crate::errors::AppError;
use crate::domain::dto::users::request::UserPayload;
use crate::domain::dto::users::response::DeleteUserResponse;
use crate::services::users::UserService;

/// 사용자 생성 핸들러
///
/// # 엔드포인트
///
/// `POST /api/users`
///
/// # 요청 본문
///
/// ```json
/// { "name": "Ann", "email": "ann@x.com" }
/// ```
///
/// # 응답 (200 OK)
///
/// ```json
/// { "id": "65a1f0c2e4b0a1b2c3d4e5f6", "name": "Ann", "email": "ann@x.com" }
/// ```
#[post("")]
pub async fn create_user(
    service: web::Data<UserService>,
    payload: web::Json<UserPayload>,
) -> Result<HttpResponse, AppError> {
    let response = service.create_user(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 사용자 목록 조회 핸들러
///
/// 캐시 스냅샷이 유효하면 저장소를 조회하지 않습니다.
///
/// ```bash
/// curl http://localhost:5000/api/users
/// ```
#[get("")]
pub async fn list_users(
    service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let users = service.list_users().await?;

    Ok(HttpResponse::Ok().json(users))
}

/// 사용자 수정 핸들러
///
/// 본문에 있는 필드만 갱신합니다. 대상이 없으면 `null`을 200으로 반환합니다.
#[put("/{user_id}")]
pub async fn update_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
    payload: web::Json<UserPayload>,
) -> Result<HttpResponse, AppError> {
    let updated = service.update_user(&user_id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(updated))
}

/// 사용자 삭제 핸들러
///
/// 대상 존재 여부와 관계없이 `{"message": "User deleted"}`를 반환합니다.
#[delete("/{user_id}")]
pub async fn delete_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete_user(&user_id).await?;

    Ok(HttpResponse::Ok().json(DeleteUserResponse::confirmed()))
}
