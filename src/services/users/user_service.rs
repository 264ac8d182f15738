//! # 사용자 조회 / 프로필 서비스
//!
//! 사용자 목록과 검색, 단건 조회, 프로필 수정, 다른 사용자 프로필 보기를 담당합니다.
//!
//! 프로필 보기는 대상 사용자의 공개 정보와 **공개 컬렉션만** 돌려줍니다.
//! 비공개 컬렉션은 소유자 본인의 컬렉션 목록(`CollectionService::list_for_owner`)에서만 보입니다.

use std::sync::Arc;

use crate::{
    core::errors::{AppError, AppResult},
    domain::dto::{
        collections::response::CollectionResponse,
        users::{
            request::UpdateUserRequest,
            response::{ProfileResponse, UserResponse},
        },
    },
    repositories::{
        collections::CollectionRepository,
        users::{ProfileChanges, UserRepository},
    },
};

pub struct UserService {
    users: Arc<UserRepository>,
    collections: Arc<CollectionRepository>,
}

impl UserService {
    pub fn new(users: Arc<UserRepository>, collections: Arc<CollectionRepository>) -> Self {
        Self { users, collections }
    }

    pub async fn get_user(&self, id: u64) -> AppResult<UserResponse> {
        let user = self
            .users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        Ok(UserResponse::from(user))
    }

    /// 사용자 목록. `search`는 이름/이메일 부분 일치 (대소문자 무시)
    pub async fn list_users(&self, search: Option<&str>) -> AppResult<Vec<UserResponse>> {
        let users = self.users.list(search).await?;
        log::debug!("사용자 목록 조회: {}명 (search={:?})", users.len(), search);

        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// 프로필 수정
    ///
    /// # Errors
    ///
    /// * `NotFound` - 사용자가 없는 경우
    /// * `ConflictError` - 다른 사용자가 이미 쓰는 이메일로 바꾸려는 경우
    pub async fn update_profile(&self, id: u64, request: UpdateUserRequest) -> AppResult<UserResponse> {
        let changes = ProfileChanges {
            name: request.name,
            email: request.email,
            bio: request.bio,
        };

        let user = self.users.update_profile(id, changes).await?;
        log::info!("📝 프로필 수정: user id={}", user.id);

        Ok(UserResponse::from(user))
    }

    /// 다른 사용자의 프로필과 공개 컬렉션
    pub async fn view_profile(&self, id: u64) -> AppResult<ProfileResponse> {
        let profile = self.get_user(id).await?;

        let collections = self
            .collections
            .list_public_by_owner(id)
            .await?
            .into_iter()
            .map(CollectionResponse::from)
            .collect();

        Ok(ProfileResponse { profile, collections })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::JsonStore;
    use crate::repositories::collections::NewCollection;

    struct Fixture {
        _dir: tempfile::TempDir,
        collections: Arc<CollectionRepository>,
        service: UserService,
    }

    async fn fixture() -> Fixture {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(JsonStore::open(dir.path()).await.unwrap());
        let users = Arc::new(UserRepository::new(store.clone()));
        let collections = Arc::new(CollectionRepository::new(store));

        users.create("Ana".into(), "ana@example.com".into(), "h".into()).await.unwrap();
        users.create("Bia".into(), "bia@example.com".into(), "h".into()).await.unwrap();

        let service = UserService::new(users, collections.clone());
        Fixture { _dir: dir, collections, service }
    }

    async fn add_collection(f: &Fixture, owner_id: u64, name: &str, is_public: bool) {
        f.collections
            .create(NewCollection {
                name: name.to_string(),
                description: None,
                is_public,
                owner_id,
                image_url: "img".to_string(),
            })
            .await
            .unwrap();
    }

    #[actix_web::test]
    async fn test_profile_view_shows_only_public_collections() {
        let f = fixture().await;
        add_collection(&f, 1, "Moedas", true).await;
        add_collection(&f, 1, "Diário", false).await;
        add_collection(&f, 2, "Selos", true).await;

        let profile = f.service.view_profile(1).await.unwrap();

        assert_eq!(profile.profile.name, "Ana");
        assert_eq!(profile.collections.len(), 1);
        assert_eq!(profile.collections[0].name, "Moedas");
        assert!(profile.collections.iter().all(|c| c.is_public));
    }

    #[actix_web::test]
    async fn test_profile_view_unknown_user() {
        let f = fixture().await;
        assert!(matches!(f.service.view_profile(42).await, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_update_profile_email_conflict_and_own_email() {
        let f = fixture().await;

        let taken = UpdateUserRequest {
            email: Some("bia@example.com".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            f.service.update_profile(1, taken).await,
            Err(AppError::ConflictError(_))
        ));

        let own = UpdateUserRequest {
            name: Some("Ana Souza".to_string()),
            email: Some("ana@example.com".to_string()),
            bio: Some("numismata".to_string()),
        };
        let updated = f.service.update_profile(1, own).await.unwrap();
        assert_eq!(updated.name, "Ana Souza");
        assert_eq!(updated.bio.as_deref(), Some("numismata"));
    }

    #[actix_web::test]
    async fn test_list_and_get() {
        let f = fixture().await;

        assert_eq!(f.service.list_users(None).await.unwrap().len(), 2);
        assert_eq!(f.service.list_users(Some("bia")).await.unwrap()[0].id, 2);
        assert_eq!(f.service.get_user(2).await.unwrap().email, "bia@example.com");
        assert!(matches!(f.service.get_user(9).await, Err(AppError::NotFound(_))));
    }
}
