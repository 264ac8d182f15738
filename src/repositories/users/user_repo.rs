//! # 사용자 리포지토리 구현
//!
//! `users.json` 테이블에 대한 데이터 액세스 계층입니다.
//! 이메일 유일성 검사와 ID 할당은 모두 쓰기 트랜잭션 안에서 이루어지므로
//! 동시에 들어온 회원가입 요청이 같은 이메일로 두 계정을 만들 수 없습니다.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::core::errors::{AppError, AppResult};
use crate::db::JsonStore;
use crate::domain::entities::users::User;

/// 프로필 수정 내용. `None` 필드는 변경하지 않습니다.
#[derive(Debug, Default)]
pub struct ProfileChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
}

pub struct UserRepository {
    store: Arc<JsonStore>,
}

impl UserRepository {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }

    pub async fn find_by_id(&self, id: u64) -> AppResult<Option<User>> {
        let mut users = self.store.users.read().await?;
        Ok(users.remove(&id))
    }

    /// 이메일로 사용자 조회 (대소문자 무시)
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let users = self.store.users.read().await?;
        Ok(users.into_values().find(|user| user.has_email(email)))
    }

    /// 유효한(일치하고 만료되지 않은) 재설정 토큰을 가진 사용자 조회
    ///
    /// 읽기 전용 확인입니다. 실제 교체 시점의 검사는 [`Self::consume_reset_token`]이 다시 합니다.
    pub async fn find_by_reset_token(&self, token_hash: &str, now: DateTime<Utc>) -> AppResult<Option<User>> {
        let users = self.store.users.read().await?;
        Ok(users
            .into_values()
            .find(|user| user.holds_valid_reset_token(token_hash, now)))
    }

    /// 전체 사용자 목록 (ID 오름차순)
    ///
    /// `search`가 주어지면 이름 또는 이메일에 검색어가 포함된 사용자만 반환합니다.
    pub async fn list(&self, search: Option<&str>) -> AppResult<Vec<User>> {
        let users = self.store.users.read().await?;
        let needle = search.map(|s| s.trim().to_lowercase()).filter(|s| !s.is_empty());

        Ok(users
            .into_values()
            .filter(|user| needle.as_deref().is_none_or(|n| user.matches_search(n)))
            .collect())
    }

    /// 새 사용자 저장
    ///
    /// # Errors
    ///
    /// - `ConflictError`: 같은 이메일(대소문자 무시)의 사용자가 이미 있는 경우.
    ///   이때 기존 레코드와 파일은 변경되지 않습니다.
    pub async fn create(&self, name: String, email: String, password_hash: String) -> AppResult<User> {
        let mut tx = self.store.users.begin().await?;

        if tx.values().any(|user| user.has_email(&email)) {
            return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
        }

        let user = User::new(tx.next_id(), name, email, password_hash);
        tx.insert(user.clone());
        tx.commit().await?;

        Ok(user)
    }

    /// 프로필 수정
    ///
    /// 이메일을 바꾸는 경우 현재 사용자를 제외한 다른 사용자와 겹치는지 검사합니다.
    /// 자기 자신의 현재 이메일을 그대로 보내는 것은 허용됩니다.
    pub async fn update_profile(&self, id: u64, changes: ProfileChanges) -> AppResult<User> {
        let mut tx = self.store.users.begin().await?;

        if tx.get(id).is_none() {
            return Err(AppError::NotFound("사용자를 찾을 수 없습니다".to_string()));
        }

        if let Some(email) = changes.email.as_deref() {
            let taken = tx.values().any(|other| other.id != id && other.has_email(email));
            if taken {
                return Err(AppError::ConflictError("이미 다른 사용자가 사용 중인 이메일입니다".to_string()));
            }
        }

        let user = tx
            .get_mut(id)
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        if let Some(name) = changes.name {
            user.name = name;
        }
        if let Some(email) = changes.email {
            user.email = email;
        }
        if let Some(bio) = changes.bio {
            user.bio = Some(bio);
        }
        user.touch();

        let updated = user.clone();
        tx.commit().await?;

        Ok(updated)
    }

    /// 이메일에 해당하는 사용자에게 재설정 토큰 다이제스트를 저장합니다.
    /// 이전에 발급된 토큰은 무효화됩니다.
    pub async fn store_reset_token(
        &self,
        email: &str,
        token_hash: String,
        expires_at: DateTime<Utc>,
    ) -> AppResult<User> {
        let mut tx = self.store.users.begin().await?;

        let id = tx
            .values()
            .find(|user| user.has_email(email))
            .map(|user| user.id)
            .ok_or_else(|| AppError::NotFound("등록되지 않은 이메일입니다".to_string()))?;

        let user = tx
            .get_mut(id)
            .ok_or_else(|| AppError::NotFound("등록되지 않은 이메일입니다".to_string()))?;
        user.issue_reset_token(token_hash, expires_at);

        let updated = user.clone();
        tx.commit().await?;

        Ok(updated)
    }

    /// 유효한 재설정 토큰을 가진 사용자의 비밀번호를 교체하고 토큰을 지웁니다.
    ///
    /// 토큰 확인과 교체가 한 트랜잭션에서 일어나므로 같은 토큰은 한 번만 쓸 수 있습니다.
    pub async fn consume_reset_token(
        &self,
        token_hash: &str,
        new_password_hash: String,
        now: DateTime<Utc>,
    ) -> AppResult<User> {
        let mut tx = self.store.users.begin().await?;

        let id = tx
            .values()
            .find(|user| user.holds_valid_reset_token(token_hash, now))
            .map(|user| user.id)
            .ok_or_else(|| AppError::InvalidToken("유효하지 않거나 만료된 토큰입니다".to_string()))?;

        let user = tx
            .get_mut(id)
            .ok_or_else(|| AppError::InvalidToken("유효하지 않거나 만료된 토큰입니다".to_string()))?;
        user.replace_password(new_password_hash);

        let updated = user.clone();
        tx.commit().await?;

        Ok(updated)
    }
}
