//! Authentication HTTP Handlers
//!
//! 회원가입, 로그인, 비밀번호 재설정 엔드포인트입니다.
//! 세션/토큰은 발급하지 않으며 로그인 성공 시 공개 사용자 정보만 돌려줍니다.
//!
//! | 메서드 | 경로 | 성공 | 실패 |
//! |--------|------|------|------|
//! | `POST` | `/api/auth/register` | 201 | 400, 409 |
//! | `POST` | `/api/auth/login` | 200 | 400, 401 |
//! | `POST` | `/api/auth/forgot-password` | 200 | 400, 404 |
//! | `POST` | `/api/auth/reset-password` | 200 | 400 |

use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    core::errors::AppError,
    domain::dto::users::request::{
        CreateUserRequest, ForgotPasswordRequest, LoginRequest, ResetPasswordRequest,
    },
    state::AppState,
};

#[post("/register")]
pub async fn register(
    state: web::Data<AppState>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user = state.auth_service.register(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(user))
}

#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user = state.auth_service.login(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(user))
}

#[post("/forgot-password")]
pub async fn forgot_password(
    state: web::Data<AppState>,
    payload: web::Json<ForgotPasswordRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = state
        .password_recovery_service
        .request_reset(payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

#[post("/reset-password")]
pub async fn reset_password(
    state: web::Data<AppState>,
    payload: web::Json<ResetPasswordRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = state
        .password_recovery_service
        .reset_password(payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(response))
}
