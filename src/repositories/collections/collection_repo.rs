//! # 컬렉션 리포지토리 구현
//!
//! `collections.json` 테이블 접근 계층입니다.
//! 컬렉션 삭제는 소속 아이템까지 함께 지우며, 이때 `collections` → `items` 순서로 잠급니다.
//!
//! 읽기 연산은 저장된 `item_count`/`value`를 그대로 믿지 않고 현재 `items.json`으로부터
//! 다시 계산해 돌려줍니다. 두 파일 중 하나만 기록된 연산이 있어도 응답의 집계 값은
//! 항상 살아있는 아이템 합계와 일치합니다.

use std::sync::Arc;

use crate::core::errors::{AppError, AppResult};
use crate::db::JsonStore;
use crate::domain::entities::collections::Collection;
use crate::domain::entities::items::Item;

/// 새 컬렉션 입력값 (ID와 집계 값은 리포지토리가 채웁니다)
#[derive(Debug)]
pub struct NewCollection {
    pub name: String,
    pub description: Option<String>,
    pub is_public: bool,
    pub owner_id: u64,
    pub image_url: String,
}

pub struct CollectionRepository {
    store: Arc<JsonStore>,
}

impl CollectionRepository {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }

    /// 소유자의 모든 컬렉션 (공개 여부 무관)
    pub async fn list_by_owner(&self, owner_id: u64) -> AppResult<Vec<Collection>> {
        self.list_where(|c| c.owner_id == owner_id).await
    }

    /// 소유자의 공개 컬렉션만
    pub async fn list_public_by_owner(&self, owner_id: u64) -> AppResult<Vec<Collection>> {
        self.list_where(|c| c.owner_id == owner_id && c.is_public).await
    }

    async fn list_where<P>(&self, keep: P) -> AppResult<Vec<Collection>>
    where
        P: Fn(&Collection) -> bool,
    {
        let collections = self.store.collections.read().await?;
        let items = self.store.items.read().await?;

        Ok(collections
            .into_values()
            .filter(|c| keep(c))
            .map(|c| with_live_aggregate(c, items.values()))
            .collect())
    }

    /// 컬렉션 생성
    ///
    /// 소유자가 존재하지 않으면 `NotFound`입니다.
    /// 사용자는 삭제되지 않으므로 소유자 확인은 `users` 잠금을 잡지 않고 읽기만 합니다.
    pub async fn create(&self, new: NewCollection) -> AppResult<Collection> {
        let users = self.store.users.read().await?;
        if !users.contains_key(&new.owner_id) {
            return Err(AppError::NotFound("컬렉션 소유자를 찾을 수 없습니다".to_string()));
        }

        let mut tx = self.store.collections.begin().await?;
        let collection = Collection::new(
            tx.next_id(),
            new.name,
            new.description,
            new.is_public,
            new.owner_id,
            new.image_url,
        );
        tx.insert(collection.clone());
        tx.commit().await?;

        Ok(collection)
    }

    /// 컬렉션의 이름, 설명, 이미지, 공개 여부를 수정합니다.
    ///
    /// `apply`는 잠금을 잡은 상태에서 호출됩니다. 소유자는 호출 후 원래대로 복원되고,
    /// 집계 값은 현재 아이템 집합으로부터 다시 계산되어 함께 저장됩니다.
    pub async fn update<F>(&self, id: u64, apply: F) -> AppResult<Collection>
    where
        F: FnOnce(&mut Collection),
    {
        let mut tx = self.store.collections.begin().await?;
        let items = self.store.items.read().await?;

        let collection = tx
            .get_mut(id)
            .ok_or_else(|| AppError::NotFound("컬렉션을 찾을 수 없습니다".to_string()))?;

        let owner_id = collection.owner_id;
        apply(&mut *collection);
        collection.id = id;
        collection.owner_id = owner_id;
        collection.recompute_aggregate(items.values());

        let updated = collection.clone();
        tx.commit().await?;

        Ok(updated)
    }

    /// 컬렉션과 소속 아이템을 삭제하고, 함께 삭제된 아이템 수를 반환합니다.
    pub async fn delete(&self, id: u64) -> AppResult<usize> {
        let mut collections = self.store.collections.begin().await?;
        let mut items = self.store.items.begin().await?;

        if collections.remove(id).is_none() {
            return Err(AppError::NotFound("컬렉션을 찾을 수 없습니다".to_string()));
        }

        let removed_items = items.retain(|item| item.collection_id != id);

        // items 먼저 커밋: 어느 시점에도 고아 아이템이 파일에 남지 않는다
        items.commit().await?;
        collections.commit().await?;

        Ok(removed_items)
    }
}

fn with_live_aggregate<'a, I>(mut collection: Collection, items: I) -> Collection
where
    I: IntoIterator<Item = &'a Item>,
{
    collection.recompute_aggregate(items);
    collection
}
