//! # 아이템 리포지토리 구현
//!
//! `items.json` 테이블 접근 계층입니다.
//!
//! 아이템 추가/수정/삭제는 항상 `collections` → `items` 순서로 두 테이블을 잠그고,
//! 같은 트랜잭션 안에서 소속 컬렉션의 `item_count`/`value`를 살아있는 아이템들로부터
//! 다시 계산합니다. `items.json`이 먼저 기록되므로 두 번째 기록이 실패하면 저장된 집계 값이
//! 뒤처질 수 있고, 이 경우는 [`CollectionRepository`]가 읽을 때 다시 계산해 맞춥니다.
//!
//! [`CollectionRepository`]: crate::repositories::collections::CollectionRepository

use std::sync::Arc;

use crate::core::errors::{AppError, AppResult};
use crate::db::{JsonStore, TableTx};
use crate::domain::entities::collections::Collection;
use crate::domain::entities::items::Item;

/// 새 아이템 입력값
#[derive(Debug)]
pub struct NewItem {
    pub name: String,
    pub description: Option<String>,
    pub quantity: u32,
    pub estimated_value: f64,
    pub image_url: String,
    pub collection_id: u64,
}

pub struct ItemRepository {
    store: Arc<JsonStore>,
}

impl ItemRepository {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }

    /// 컬렉션의 아이템 목록. 컬렉션이 없으면 `NotFound`
    pub async fn list_by_collection(&self, collection_id: u64) -> AppResult<Vec<Item>> {
        let collections = self.store.collections.read().await?;
        if !collections.contains_key(&collection_id) {
            return Err(collection_not_found());
        }

        let items = self.store.items.read().await?;
        Ok(items
            .into_values()
            .filter(|item| item.collection_id == collection_id)
            .collect())
    }

    /// 아이템을 컬렉션에 추가하고 컬렉션 집계 값을 갱신합니다.
    pub async fn create(&self, new: NewItem) -> AppResult<(Item, Collection)> {
        let mut collections = self.store.collections.begin().await?;
        let mut items = self.store.items.begin().await?;

        if collections.get(new.collection_id).is_none() {
            return Err(collection_not_found());
        }

        let item = Item {
            id: items.next_id(),
            name: new.name,
            description: new.description,
            quantity: new.quantity,
            estimated_value: new.estimated_value,
            image_url: new.image_url,
            collection_id: new.collection_id,
        };
        items.insert(item.clone());

        let collection = refresh_aggregate(&mut collections, &items, item.collection_id)?;
        commit_both(collections, items).await?;

        Ok((item, collection))
    }

    /// 아이템 필드를 수정합니다. 소속 컬렉션은 바뀌지 않습니다.
    pub async fn update<F>(&self, id: u64, apply: F) -> AppResult<(Item, Collection)>
    where
        F: FnOnce(&mut Item),
    {
        let mut collections = self.store.collections.begin().await?;
        let mut items = self.store.items.begin().await?;

        let item = items.get_mut(id).ok_or_else(item_not_found)?;
        let (item_id, collection_id) = (item.id, item.collection_id);
        apply(&mut *item);
        item.id = item_id;
        item.collection_id = collection_id;
        let updated = item.clone();

        let collection = refresh_aggregate(&mut collections, &items, collection_id)?;
        commit_both(collections, items).await?;

        Ok((updated, collection))
    }

    /// 아이템을 삭제하고 갱신된 소속 컬렉션을 반환합니다.
    pub async fn delete(&self, id: u64) -> AppResult<(Item, Collection)> {
        let mut collections = self.store.collections.begin().await?;
        let mut items = self.store.items.begin().await?;

        let removed = items.remove(id).ok_or_else(item_not_found)?;

        let collection = refresh_aggregate(&mut collections, &items, removed.collection_id)?;
        commit_both(collections, items).await?;

        Ok((removed, collection))
    }
}

fn collection_not_found() -> AppError {
    AppError::NotFound("컬렉션을 찾을 수 없습니다".to_string())
}

fn item_not_found() -> AppError {
    AppError::NotFound("아이템을 찾을 수 없습니다".to_string())
}

/// 살아있는 아이템 집합으로부터 컬렉션 집계를 다시 계산합니다.
fn refresh_aggregate(
    collections: &mut TableTx<'_, Collection>,
    items: &TableTx<'_, Item>,
    collection_id: u64,
) -> AppResult<Collection> {
    let collection = collections.get_mut(collection_id).ok_or_else(|| {
        AppError::StorageError(format!(
            "아이템이 존재하지 않는 컬렉션({})을 가리킵니다",
            collection_id
        ))
    })?;
    collection.recompute_aggregate(items.values());
    Ok(collection.clone())
}

async fn commit_both(
    collections: TableTx<'_, Collection>,
    items: TableTx<'_, Item>,
) -> AppResult<()> {
    items.commit().await?;
    collections.commit().await
}
