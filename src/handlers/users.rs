//! # User HTTP Handlers
//!
//! 사용자 목록/검색, 단건 조회, 프로필 수정, 다른 사용자 프로필 보기.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/api/users?search=` | 목록 / 이름·이메일 검색 | 200 |
//! | `GET` | `/api/users/{id}` | 사용자 조회 | 200, 404 |
//! | `GET` | `/api/users/{id}/profile` | 공개 프로필 + 공개 컬렉션 | 200, 404 |
//! | `PUT` | `/api/users/{id}` | 프로필 수정 | 200, 400, 404, 409 |

use actix_web::{get, put, web, HttpResponse};
use validator::Validate;

use crate::{
    core::errors::AppError,
    domain::dto::users::request::{UpdateUserRequest, UserSearchQuery},
    state::AppState,
};

#[get("")]
pub async fn list_users(
    state: web::Data<AppState>,
    query: web::Query<UserSearchQuery>,
) -> Result<HttpResponse, AppError> {
    let users = state.user_service.list_users(query.search.as_deref()).await?;

    Ok(HttpResponse::Ok().json(users))
}

#[get("/{user_id}/profile")]
pub async fn get_profile(
    state: web::Data<AppState>,
    user_id: web::Path<u64>,
) -> Result<HttpResponse, AppError> {
    let profile = state.user_service.view_profile(user_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(profile))
}

#[get("/{user_id}")]
pub async fn get_user(
    state: web::Data<AppState>,
    user_id: web::Path<u64>,
) -> Result<HttpResponse, AppError> {
    let user = state.user_service.get_user(user_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(user))
}

#[put("/{user_id}")]
pub async fn update_user(
    state: web::Data<AppState>,
    user_id: web::Path<u64>,
    payload: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user = state
        .user_service
        .update_profile(user_id.into_inner(), payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(user))
}
