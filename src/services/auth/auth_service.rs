//! # 회원가입 / 로그인 서비스
//!
//! 로컬 계정(이메일 + 비밀번호)만 지원합니다. 세션이나 토큰은 발급하지 않으며,
//! 로그인 성공 시 공개 사용자 정보만 돌려줍니다.
//!
//! ## 보안 메모
//!
//! - 비밀번호는 bcrypt로 해싱하며 cost는 [`PasswordConfig::bcrypt_cost`]를 따릅니다.
//! - 존재하지 않는 이메일과 틀린 비밀번호는 같은 메시지로 응답합니다.
//! - 응답 DTO에는 비밀번호 해시가 포함되지 않습니다.
//!
//! [`PasswordConfig::bcrypt_cost`]: crate::config::PasswordConfig::bcrypt_cost

use std::sync::Arc;
use std::time::Instant;

use bcrypt::{hash, verify};

use crate::{
    core::errors::{AppError, AppResult},
    domain::dto::users::{
        request::{CreateUserRequest, LoginRequest},
        response::UserResponse,
    },
    repositories::users::UserRepository,
    utils::string_utils::validate_required_string,
};

const INVALID_CREDENTIALS: &str = "잘못된 이메일 또는 비밀번호입니다";

pub struct AuthService {
    users: Arc<UserRepository>,
    bcrypt_cost: u32,
}

impl AuthService {
    pub fn new(users: Arc<UserRepository>, bcrypt_cost: u32) -> Self {
        Self { users, bcrypt_cost }
    }

    /// 새 계정 등록
    ///
    /// 이름과 이메일은 앞뒤 공백을 제거한 뒤 저장됩니다.
    ///
    /// # Errors
    ///
    /// * `ConflictError` - 같은 이메일(대소문자 무시)이 이미 등록된 경우
    /// * `InternalError` - 해싱 실패
    pub async fn register(&self, request: CreateUserRequest) -> AppResult<UserResponse> {
        let start_time = Instant::now();

        let name = validate_required_string(&request.name, "이름")?;
        let email = request.email.trim().to_string();

        // 해싱 전에 빠르게 거절. 최종 중복 검사는 저장 트랜잭션 안에서 다시 이루어짐
        if self.users.find_by_email(&email).await?.is_some() {
            log::warn!("🚫 회원가입 거절: 이미 등록된 이메일 {}", email);
            return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
        }

        let hash_start = Instant::now();
        let password_hash = hash(&request.password, self.bcrypt_cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;
        log::debug!("Password hashing took: {:?}", hash_start.elapsed());

        let user = self.users.create(name, email, password_hash).await?;

        log::info!("👤 새 사용자 등록: id={} ({:?})", user.id, start_time.elapsed());
        Ok(UserResponse::from(user))
    }

    /// 이메일/비밀번호 로그인
    ///
    /// # Errors
    ///
    /// * `AuthenticationError` - 이메일이 없거나 비밀번호가 틀린 경우
    pub async fn login(&self, request: LoginRequest) -> AppResult<UserResponse> {
        let email = request.email.trim();

        let Some(user) = self.users.find_by_email(email).await? else {
            log::warn!("🚫 로그인 실패: 등록되지 않은 이메일 {}", email);
            return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
        };

        let verify_start = Instant::now();
        let is_valid = verify(&request.password, &user.password_hash)
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;
        log::debug!("Password verification took: {:?}", verify_start.elapsed());

        if !is_valid {
            log::warn!("🚫 로그인 실패: 비밀번호 불일치 (user id={})", user.id);
            return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
        }

        log::info!("✅ 로그인 성공: user id={}", user.id);
        Ok(UserResponse::from(user))
    }
}
