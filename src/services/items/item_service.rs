//! # 아이템 서비스
//!
//! 아이템 추가/목록/수정/삭제. 모든 변경은 리포지토리 트랜잭션 안에서
//! 소속 컬렉션의 집계 값을 함께 갱신합니다.

use std::sync::Arc;

use crate::{
    core::errors::AppResult,
    domain::dto::items::{
        request::{CreateItemRequest, UpdateItemRequest},
        response::ItemResponse,
    },
    repositories::items::{ItemRepository, NewItem},
    utils::string_utils::{
        clean_optional_string, image_or_placeholder, item_placeholder_image, validate_required_string,
    },
};

pub struct ItemService {
    items: Arc<ItemRepository>,
}

impl ItemService {
    pub fn new(items: Arc<ItemRepository>) -> Self {
        Self { items }
    }

    /// 컬렉션에 아이템 추가
    ///
    /// # Errors
    ///
    /// * `NotFound` - 대상 컬렉션이 없는 경우. 이때 아무것도 저장되지 않습니다.
    pub async fn add(&self, request: CreateItemRequest) -> AppResult<ItemResponse> {
        let name = validate_required_string(&request.name, "아이템 이름")?;
        let image_url = image_or_placeholder(request.image_url, || item_placeholder_image(&name));

        let (item, collection) = self
            .items
            .create(NewItem {
                name,
                description: clean_optional_string(request.description),
                quantity: request.quantity,
                estimated_value: request.estimated_value,
                image_url,
                collection_id: request.collection_id,
            })
            .await?;

        log::info!(
            "➕ 아이템 추가: id={} collection={} (itemCount={}, value={:.2})",
            item.id,
            collection.id,
            collection.item_count,
            collection.value
        );
        Ok(ItemResponse::from(item))
    }

    /// 컬렉션의 아이템 목록
    pub async fn list(&self, collection_id: u64) -> AppResult<Vec<ItemResponse>> {
        let items = self.items.list_by_collection(collection_id).await?;
        Ok(items.into_iter().map(ItemResponse::from).collect())
    }

    pub async fn update(&self, id: u64, request: UpdateItemRequest) -> AppResult<ItemResponse> {
        let UpdateItemRequest {
            name,
            description,
            quantity,
            estimated_value,
            image_url,
        } = request;

        let (item, collection) = self
            .items
            .update(id, |item| {
                if let Some(name) = name {
                    item.name = name;
                }
                if let Some(description) = description {
                    item.description = Some(description);
                }
                if let Some(quantity) = quantity {
                    item.quantity = quantity;
                }
                if let Some(estimated_value) = estimated_value {
                    item.estimated_value = estimated_value;
                }
                if let Some(image_url) = image_url {
                    item.image_url = image_url;
                }
            })
            .await?;

        log::info!("📝 아이템 수정: id={} (collection value={:.2})", item.id, collection.value);
        Ok(ItemResponse::from(item))
    }

    pub async fn remove(&self, id: u64) -> AppResult<()> {
        let (item, collection) = self.items.delete(id).await?;
        log::info!(
            "➖ 아이템 삭제: id={} collection={} (itemCount={})",
            item.id,
            collection.id,
            collection.item_count
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::AppError;
    use crate::db::JsonStore;
    use crate::repositories::collections::{CollectionRepository, NewCollection};
    use crate::repositories::users::UserRepository;

    struct Fixture {
        _dir: tempfile::TempDir,
        collections: Arc<CollectionRepository>,
        service: ItemService,
    }

    async fn fixture() -> Fixture {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(JsonStore::open(dir.path()).await.unwrap());
        UserRepository::new(store.clone())
            .create("Ana".into(), "ana@example.com".into(), "h".into())
            .await
            .unwrap();

        let collections = Arc::new(CollectionRepository::new(store.clone()));
        collections
            .create(NewCollection {
                name: "Moedas".to_string(),
                description: None,
                is_public: true,
                owner_id: 1,
                image_url: "img".to_string(),
            })
            .await
            .unwrap();

        let service = ItemService::new(Arc::new(ItemRepository::new(store)));
        Fixture { _dir: dir, collections, service }
    }

    fn add_request(name: &str, estimated_value: f64, collection_id: u64) -> CreateItemRequest {
        CreateItemRequest {
            name: name.to_string(),
            description: None,
            quantity: 1,
            estimated_value,
            image_url: None,
            collection_id,
        }
    }

    async fn aggregate(f: &Fixture) -> (u64, f64) {
        let collections = f.collections.list_by_owner(1).await.unwrap();
        (collections[0].item_count, collections[0].value)
    }

    #[actix_web::test]
    async fn test_add_then_remove_restores_aggregate() {
        let f = fixture().await;

        let item = f.service.add(add_request("500 réis", 350.0, 1)).await.unwrap();
        assert_eq!(item.image_url, "https://via.placeholder.com/150?text=500%20r%C3%A9is");
        assert_eq!(aggregate(&f).await, (1, 350.0));

        f.service.remove(item.id).await.unwrap();
        assert_eq!(aggregate(&f).await, (0, 0.0));
    }

    #[actix_web::test]
    async fn test_add_to_missing_collection() {
        let f = fixture().await;
        let result = f.service.add(add_request("x", 1.0, 7)).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_update_changes_collection_value() {
        let f = fixture().await;
        let item = f.service.add(add_request("Selo", 10.0, 1)).await.unwrap();

        let updated = f
            .service
            .update(
                item.id,
                UpdateItemRequest {
                    estimated_value: Some(25.5),
                    quantity: Some(3),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Selo");
        assert_eq!(updated.quantity, 3);
        assert_eq!(aggregate(&f).await, (1, 25.5));
        assert_eq!(f.service.list(1).await.unwrap(), vec![updated]);
    }

    #[actix_web::test]
    async fn test_remove_missing_item() {
        let f = fixture().await;
        assert!(matches!(f.service.remove(3).await, Err(AppError::NotFound(_))));
    }
}
