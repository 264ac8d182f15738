//! # 사용자 관련 요청 DTO 모듈
//!
//! 회원가입, 로그인, 비밀번호 재설정, 프로필 수정 요청 본문을 정의합니다.
//! 모든 DTO는 `validator::Validate`를 구현하며, 핸들러에서 검증 실패 시
//! `AppError::ValidationError`(400)로 변환됩니다.

pub mod create_user;
pub mod auth_request;
pub mod update_user;

pub use create_user::CreateUserRequest;
pub use auth_request::{ForgotPasswordRequest, LoginRequest, ResetPasswordRequest};
pub use update_user::{UpdateUserRequest, UserSearchQuery};
