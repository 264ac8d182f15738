//! # Password Recovery Configuration
//!
//! 비밀번호 재설정 토큰의 유효 시간과 사용자에게 전달되는 재설정 링크를 관리합니다.
//!
//! ```bash
//! export PASSWORD_RESET_TTL_MINUTES="30"
//! export PASSWORD_RESET_URL="http://localhost:5173/reset-password"
//! ```

use std::env;

use chrono::Duration;

/// 기본 토큰 유효 시간 (분)
const DEFAULT_TTL_MINUTES: i64 = 30;

/// 프론트엔드(Vite 개발 서버)의 재설정 페이지
const DEFAULT_RESET_URL: &str = "http://localhost:5173/reset-password";

/// 비밀번호 재설정 설정
pub struct PasswordResetConfig;

impl PasswordResetConfig {
    /// 토큰 유효 시간. `PASSWORD_RESET_TTL_MINUTES`, 기본값 30분
    ///
    /// 0 이하이거나 숫자가 아닌 값은 무시하고 기본값을 사용합니다.
    pub fn token_ttl() -> Duration {
        let minutes = env::var("PASSWORD_RESET_TTL_MINUTES")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .filter(|m| *m > 0)
            .unwrap_or(DEFAULT_TTL_MINUTES);

        Duration::minutes(minutes)
    }

    /// 재설정 페이지 기본 URL. `PASSWORD_RESET_URL`
    pub fn reset_url() -> String {
        env::var("PASSWORD_RESET_URL").unwrap_or_else(|_| DEFAULT_RESET_URL.to_string())
    }

    /// 토큰이 포함된 재설정 링크를 만듭니다.
    pub fn reset_link(base_url: &str, token: &str) -> String {
        format!("{}?token={}", base_url, urlencoding::encode(token))
    }
}
