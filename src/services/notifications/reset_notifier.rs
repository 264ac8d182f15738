//! 비밀번호 재설정 링크 발송
//!
//! 실제 메일 발송(SMTP)은 제공하지 않습니다. 기본 구현 [`LogResetNotifier`]는
//! 재설정 링크를 서버 로그에 박스 형태로 남깁니다.
//! 다른 전달 수단이 필요하면 [`ResetNotifier`]를 구현해 `AppState`에 주입합니다.

use async_trait::async_trait;
use log::info;

use crate::core::errors::AppResult;
use crate::utils::display_terminal::boxed_section;

/// 재설정 링크를 사용자에게 전달하는 통로
#[async_trait]
pub trait ResetNotifier: Send + Sync {
    async fn send_reset_link(&self, email: &str, reset_link: &str) -> AppResult<()>;
}

/// 재설정 링크를 로그로 출력하는 모의 발송기
#[derive(Debug, Default, Clone)]
pub struct LogResetNotifier;

#[async_trait]
impl ResetNotifier for LogResetNotifier {
    async fn send_reset_link(&self, email: &str, reset_link: &str) -> AppResult<()> {
        info!(
            "\n{}",
            boxed_section("🔐 비밀번호 재설정 링크 (MOCK)", &[("Email", email), ("Link", reset_link)])
        );
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_log_notifier_never_fails() {
        let notifier = LogResetNotifier;
        assert!(notifier
            .send_reset_link("ana@example.com", "http://localhost:5173/reset-password?token=abc")
            .await
            .is_ok());
    }
}
