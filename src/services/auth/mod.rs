//! 인증 서비스 모듈
//!
//! 로컬 계정 회원가입/로그인과 비밀번호 재설정 흐름을 제공합니다.
//!
//! # Security
//!
//! - bcrypt 비밀번호 해싱
//! - 재설정 토큰은 SHA-256 다이제스트로만 저장
//! - 재설정 토큰 만료 시간 및 1회 사용 제한

pub mod auth_service;
pub mod password_recovery_service;

pub use auth_service::AuthService;
pub use password_recovery_service::PasswordRecoveryService;
