//! Collection Entity Implementation
//!
//! 사용자가 소유하는 아이템 묶음입니다.
//! `value`와 `item_count`는 소속 아이템들로부터 계산되는 집계 값이며,
//! 아이템이 바뀌는 트랜잭션 안과 컬렉션을 읽을 때 [`Collection::recompute_aggregate`]로 다시 계산됩니다.

use serde::{Deserialize, Serialize};

use crate::db::Record;
use crate::domain::entities::items::Item;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub is_public: bool,
    /// 소유자 User ID
    pub owner_id: u64,
    pub image_url: String,
    /// 소속 아이템의 `estimated_value` 합계
    #[serde(default)]
    pub value: f64,
    /// 소속 아이템 개수
    #[serde(default)]
    pub item_count: u64,
}

impl Collection {
    /// 집계 값이 0인 새 컬렉션
    pub fn new(
        id: u64,
        name: String,
        description: Option<String>,
        is_public: bool,
        owner_id: u64,
        image_url: String,
    ) -> Self {
        Self {
            id,
            name,
            description,
            is_public,
            owner_id,
            image_url,
            value: 0.0,
            item_count: 0,
        }
    }

    /// 전체 아이템 중 이 컬렉션 소속인 것만 골라 `value`/`item_count`를 다시 계산합니다.
    pub fn recompute_aggregate<'a, I>(&mut self, items: I)
    where
        I: IntoIterator<Item = &'a Item>,
    {
        let (count, value) = items
            .into_iter()
            .filter(|item| item.collection_id == self.id)
            .fold((0u64, 0.0f64), |(count, value), item| {
                (count + 1, value + item.estimated_value)
            });

        self.item_count = count;
        self.value = value;
    }
}

impl Record for Collection {
    const TABLE: &'static str = "collections";

    fn id(&self) -> u64 {
        self.id
    }
}
