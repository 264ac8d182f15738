//! User Entity Implementation
//!
//! 컬렉터(사용자) 계정 엔티티입니다. `users.json`에 그대로 저장되므로
//! 비밀번호 해시와 재설정 토큰 다이제스트를 포함합니다.
//! 외부로 나가는 모든 응답은 [`UserResponse`](crate::domain::dto::users::response::UserResponse)를 거칩니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::db::Record;

/// 사용자 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// 순차 할당되는 고유 ID
    pub id: u64,
    /// 표시 이름
    pub name: String,
    /// 사용자 이메일 (대소문자 무시 unique)
    pub email: String,
    /// bcrypt 해시
    pub password_hash: String,
    /// 자기소개
    #[serde(default)]
    pub bio: Option<String>,
    /// 비밀번호 재설정 토큰의 SHA-256 hex 다이제스트
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reset_token_hash: Option<String>,
    /// 재설정 토큰 만료 시각
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reset_token_expires_at: Option<DateTime<Utc>>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// 새 사용자 생성 (자기소개와 재설정 토큰 없음)
    pub fn new(id: u64, name: String, email: String, password_hash: String) -> Self {
        let now = Utc::now();

        Self {
            id,
            name,
            email,
            password_hash,
            bio: None,
            reset_token_hash: None,
            reset_token_expires_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// 이메일 비교 (앞뒤 공백 제거, 대소문자 무시)
    pub fn has_email(&self, email: &str) -> bool {
        self.email.trim().eq_ignore_ascii_case(email.trim())
    }

    /// 이름 또는 이메일에 검색어가 포함되어 있는지 (대소문자 무시)
    pub fn matches_search(&self, needle_lowercase: &str) -> bool {
        self.name.to_lowercase().contains(needle_lowercase)
            || self.email.to_lowercase().contains(needle_lowercase)
    }

    /// 재설정 토큰을 저장합니다. 이전 토큰은 덮어씁니다.
    pub fn issue_reset_token(&mut self, token_hash: String, expires_at: DateTime<Utc>) {
        self.reset_token_hash = Some(token_hash);
        self.reset_token_expires_at = Some(expires_at);
        self.touch();
    }

    /// 해당 다이제스트의 토큰을 보유하고 있고 아직 만료되지 않았는지
    pub fn holds_valid_reset_token(&self, token_hash: &str, now: DateTime<Utc>) -> bool {
        match (&self.reset_token_hash, self.reset_token_expires_at) {
            (Some(stored), Some(expires_at)) => stored == token_hash && now < expires_at,
            _ => false,
        }
    }

    /// 비밀번호를 교체하고 재설정 토큰을 무효화합니다.
    pub fn replace_password(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.reset_token_hash = None;
        self.reset_token_expires_at = None;
        self.touch();
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Record for User {
    const TABLE: &'static str = "users";

    fn id(&self) -> u64 {
        self.id
    }
}
