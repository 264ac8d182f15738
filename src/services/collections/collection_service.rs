//! # 컬렉션 서비스
//!
//! 컬렉션 생성, 소유자별 목록, 수정, 삭제를 담당합니다.
//! 이미지가 주어지지 않으면 이름이 들어간 플레이스홀더 이미지를 사용합니다.
//! 집계 값(`value`, `itemCount`)은 요청으로 바꿀 수 없고, 리포지토리가 아이템으로부터 계산합니다.

use std::sync::Arc;

use crate::{
    core::errors::AppResult,
    domain::dto::collections::{
        request::{CreateCollectionRequest, UpdateCollectionRequest},
        response::CollectionResponse,
    },
    repositories::collections::{CollectionRepository, NewCollection},
    utils::string_utils::{
        clean_optional_string, collection_placeholder_image, image_or_placeholder, validate_required_string,
    },
};

pub struct CollectionService {
    collections: Arc<CollectionRepository>,
}

impl CollectionService {
    pub fn new(collections: Arc<CollectionRepository>) -> Self {
        Self { collections }
    }

    /// 컬렉션 생성
    ///
    /// # Errors
    ///
    /// * `NotFound` - 소유자가 존재하지 않는 경우
    pub async fn create(&self, request: CreateCollectionRequest) -> AppResult<CollectionResponse> {
        let name = validate_required_string(&request.name, "컬렉션 이름")?;
        let image_url = image_or_placeholder(request.image_url, || collection_placeholder_image(&name));

        let collection = self
            .collections
            .create(NewCollection {
                name,
                description: clean_optional_string(request.description),
                is_public: request.is_public,
                owner_id: request.owner_id,
                image_url,
            })
            .await?;

        log::info!(
            "🗂️ 컬렉션 생성: id={} owner={} public={}",
            collection.id,
            collection.owner_id,
            collection.is_public
        );
        Ok(CollectionResponse::from(collection))
    }

    /// 소유자의 모든 컬렉션 (비공개 포함)
    pub async fn list_for_owner(&self, owner_id: u64) -> AppResult<Vec<CollectionResponse>> {
        let collections = self.collections.list_by_owner(owner_id).await?;
        Ok(collections.into_iter().map(CollectionResponse::from).collect())
    }

    pub async fn update(&self, id: u64, request: UpdateCollectionRequest) -> AppResult<CollectionResponse> {
        let UpdateCollectionRequest {
            name,
            description,
            image_url,
            is_public,
        } = request;

        let collection = self
            .collections
            .update(id, |collection| {
                if let Some(name) = name {
                    collection.name = name;
                }
                if let Some(description) = description {
                    collection.description = Some(description);
                }
                if let Some(image_url) = image_url {
                    collection.image_url = image_url;
                }
                if let Some(is_public) = is_public {
                    collection.is_public = is_public;
                }
            })
            .await?;

        log::info!("📝 컬렉션 수정: id={}", collection.id);
        Ok(CollectionResponse::from(collection))
    }

    /// 컬렉션과 소속 아이템 삭제
    pub async fn delete(&self, id: u64) -> AppResult<()> {
        let removed_items = self.collections.delete(id).await?;
        log::info!("🗑️ 컬렉션 삭제: id={} (아이템 {}개 함께 삭제)", id, removed_items);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::AppError;
    use crate::db::JsonStore;
    use crate::repositories::users::UserRepository;

    async fn service() -> (tempfile::TempDir, CollectionService) {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(JsonStore::open(dir.path()).await.unwrap());
        UserRepository::new(store.clone())
            .create("Ana".into(), "ana@example.com".into(), "h".into())
            .await
            .unwrap();
        let collections = Arc::new(CollectionRepository::new(store));
        (dir, CollectionService::new(collections))
    }

    fn create_request(name: &str, image_url: Option<&str>, owner_id: u64) -> CreateCollectionRequest {
        CreateCollectionRequest {
            name: name.to_string(),
            description: Some("  moedas antigas ".to_string()),
            image_url: image_url.map(str::to_string),
            is_public: true,
            owner_id,
        }
    }

    #[actix_web::test]
    async fn test_create_uses_placeholder_when_image_missing() {
        let (_dir, service) = service().await;

        let created = service.create(create_request("Moedas Antigas", None, 1)).await.unwrap();

        assert_eq!(
            created.image_url,
            "https://via.placeholder.com/300x200/4F518C/FFFFFF?text=Moedas%20Antigas"
        );
        assert_eq!(created.description.as_deref(), Some("moedas antigas"));
        assert_eq!((created.item_count, created.value), (0, 0.0));
    }

    #[actix_web::test]
    async fn test_create_keeps_supplied_image() {
        let (_dir, service) = service().await;
        let created = service
            .create(create_request("Selos", Some("https://img/selos.png"), 1))
            .await
            .unwrap();
        assert_eq!(created.image_url, "https://img/selos.png");
    }

    #[actix_web::test]
    async fn test_create_for_missing_owner() {
        let (_dir, service) = service().await;
        let result = service.create(create_request("Selos", None, 9)).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_update_partial_and_delete() {
        let (_dir, service) = service().await;
        let created = service.create(create_request("Selos", None, 1)).await.unwrap();

        let updated = service
            .update(
                created.id,
                UpdateCollectionRequest {
                    is_public: Some(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "Selos");
        assert!(!updated.is_public);
        assert_eq!(updated.image_url, created.image_url);

        service.delete(created.id).await.unwrap();
        assert!(service.list_for_owner(1).await.unwrap().is_empty());
        assert!(matches!(service.delete(created.id).await, Err(AppError::NotFound(_))));
    }
}
