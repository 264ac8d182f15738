//! # 비밀번호 재설정 서비스
//!
//! 두 단계로 동작합니다.
//!
//! 1. `request_reset`: 이메일로 사용자를 찾아 UUID v4 토큰을 만들고,
//!    SHA-256 다이제스트와 만료 시각만 저장한 뒤 평문 토큰은 [`ResetNotifier`]로 전달합니다.
//! 2. `reset_password`: 토큰 다이제스트가 일치하고 만료되지 않은 사용자의 비밀번호를 교체합니다.
//!    교체와 동시에 토큰은 지워지므로 같은 토큰으로 두 번 재설정할 수 없습니다.

use std::sync::Arc;

use bcrypt::hash;
use chrono::{Duration, Utc};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::{
    config::PasswordResetConfig,
    core::errors::{AppError, AppResult, ErrorContext},
    domain::dto::users::{
        request::{ForgotPasswordRequest, ResetPasswordRequest},
        response::MessageResponse,
    },
    repositories::users::UserRepository,
    services::notifications::ResetNotifier,
};

pub struct PasswordRecoveryService {
    users: Arc<UserRepository>,
    notifier: Arc<dyn ResetNotifier>,
    bcrypt_cost: u32,
    token_ttl: Duration,
    reset_url: String,
}

impl PasswordRecoveryService {
    pub fn new(
        users: Arc<UserRepository>,
        notifier: Arc<dyn ResetNotifier>,
        bcrypt_cost: u32,
        token_ttl: Duration,
        reset_url: String,
    ) -> Self {
        Self {
            users,
            notifier,
            bcrypt_cost,
            token_ttl,
            reset_url,
        }
    }

    /// 재설정 토큰 발급
    ///
    /// # Errors
    ///
    /// * `NotFound` - 등록되지 않은 이메일
    pub async fn request_reset(&self, request: ForgotPasswordRequest) -> AppResult<MessageResponse> {
        let email = request.email.trim();
        let token = Uuid::new_v4().to_string();
        let expires_at = Utc::now() + self.token_ttl;

        let user = self
            .users
            .store_reset_token(email, digest_token(&token), expires_at)
            .await?;

        let link = PasswordResetConfig::reset_link(&self.reset_url, &token);
        self.notifier.send_reset_link(&user.email, &link).await?;

        log::info!("🔑 비밀번호 재설정 토큰 발급: user id={} (만료 {})", user.id, expires_at);
        Ok(MessageResponse::new("비밀번호 재설정 링크를 보냈습니다. 이메일을 확인해주세요"))
    }

    /// 토큰으로 비밀번호 교체
    ///
    /// # Errors
    ///
    /// * `InvalidToken` - 알 수 없거나, 이미 사용했거나, 만료된 토큰
    pub async fn reset_password(&self, request: ResetPasswordRequest) -> AppResult<MessageResponse> {
        let token_hash = digest_token(request.token.trim());

        if self.users.find_by_reset_token(&token_hash, Utc::now()).await?.is_none() {
            log::warn!("🚫 비밀번호 재설정 거절: 유효하지 않거나 만료된 토큰");
            return Err(AppError::InvalidToken("유효하지 않거나 만료된 토큰입니다".to_string()));
        }

        let password_hash = hash(&request.new_password, self.bcrypt_cost)
            .context("비밀번호 해싱 실패")?;

        let user = self
            .users
            .consume_reset_token(&token_hash, password_hash, Utc::now())
            .await?;

        log::info!("🔒 비밀번호 재설정 완료: user id={}", user.id);
        Ok(MessageResponse::new("비밀번호가 성공적으로 변경되었습니다"))
    }
}

fn digest_token(token: &str) -> String {
    format!("{:x}", Sha256::digest(token.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::JsonStore;
    use crate::services::notifications::reset_notifier::testing::RecordingNotifier;

    struct Fixture {
        _dir: tempfile::TempDir,
        users: Arc<UserRepository>,
        notifier: Arc<RecordingNotifier>,
        service: PasswordRecoveryService,
    }

    async fn fixture(token_ttl: Duration) -> Fixture {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(JsonStore::open(dir.path()).await.unwrap());
        let users = Arc::new(UserRepository::new(store));
        users
            .create("Ana".into(), "ana@example.com".into(), hash("antiga", 4).unwrap())
            .await
            .unwrap();

        let notifier = Arc::new(RecordingNotifier::default());
        let service = PasswordRecoveryService::new(
            users.clone(),
            notifier.clone(),
            4,
            token_ttl,
            "http://localhost:5173/reset-password".to_string(),
        );

        Fixture { _dir: dir, users, notifier, service }
    }

    fn forgot(email: &str) -> ForgotPasswordRequest {
        ForgotPasswordRequest { email: email.to_string() }
    }

    fn reset(token: &str, new_password: &str) -> ResetPasswordRequest {
        ResetPasswordRequest {
            token: token.to_string(),
            new_password: new_password.to_string(),
        }
    }

    #[test]
    fn test_digest_is_hex_sha256() {
        let digest = digest_token("abc");
        assert_eq!(digest.len(), 64);
        assert_eq!(
            digest,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[actix_web::test]
    async fn test_unknown_email_is_not_found_and_sends_nothing() {
        let f = fixture(Duration::minutes(30)).await;

        let result = f.service.request_reset(forgot("ghost@example.com")).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert!(f.notifier.sent.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_reset_flow_replaces_hash_and_token_is_single_use() {
        let f = fixture(Duration::minutes(30)).await;

        f.service.request_reset(forgot("ana@example.com")).await.unwrap();
        let token = f.notifier.last_token().unwrap();

        let stored = f.users.find_by_email("ana@example.com").await.unwrap().unwrap();
        assert_ne!(stored.reset_token_hash.as_deref(), Some(token.as_str()));

        f.service.reset_password(reset(&token, "nova-senha")).await.unwrap();

        let user = f.users.find_by_email("ana@example.com").await.unwrap().unwrap();
        assert!(bcrypt::verify("nova-senha", &user.password_hash).unwrap());
        assert!(user.reset_token_hash.is_none());

        let again = f.service.reset_password(reset(&token, "outra-senha")).await;
        assert!(matches!(again, Err(AppError::InvalidToken(_))));
    }

    #[actix_web::test]
    async fn test_new_request_invalidates_previous_token() {
        let f = fixture(Duration::minutes(30)).await;

        f.service.request_reset(forgot("ana@example.com")).await.unwrap();
        let first = f.notifier.last_token().unwrap();
        f.service.request_reset(forgot("ana@example.com")).await.unwrap();
        let second = f.notifier.last_token().unwrap();

        let stale = f.service.reset_password(reset(&first, "nova-senha")).await;
        assert!(matches!(stale, Err(AppError::InvalidToken(_))));
        assert!(f.service.reset_password(reset(&second, "nova-senha")).await.is_ok());
    }

    #[actix_web::test]
    async fn test_unknown_token_is_rejected_before_hashing() {
        let f = fixture(Duration::minutes(30)).await;
        // 허용되지 않는 cost: 해싱까지 가면 InternalError가 된다
        let strict = PasswordRecoveryService::new(
            f.users.clone(),
            f.notifier.clone(),
            99,
            Duration::minutes(30),
            "http://localhost:5173/reset-password".to_string(),
        );

        let unknown = strict.reset_password(reset("nao-existe", "nova-senha")).await;
        assert!(matches!(unknown, Err(AppError::InvalidToken(_))));

        strict.request_reset(forgot("ana@example.com")).await.unwrap();
        let token = f.notifier.last_token().unwrap();
        let valid = strict.reset_password(reset(&token, "nova-senha")).await;
        assert!(matches!(valid, Err(AppError::InternalError(_))));
    }

    #[actix_web::test]
    async fn test_expired_token_is_rejected() {
        let f = fixture(Duration::seconds(-1)).await;

        f.service.request_reset(forgot("ana@example.com")).await.unwrap();
        let token = f.notifier.last_token().unwrap();

        let result = f.service.reset_password(reset(&token, "nova-senha")).await;
        assert!(matches!(result, Err(AppError::InvalidToken(_))));
    }
}
