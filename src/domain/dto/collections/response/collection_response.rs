use serde::{Deserialize, Serialize};

use crate::domain::entities::collections::Collection;

/// 컬렉션 응답 DTO
///
/// 아이템 개수는 기존 프론트엔드 계약대로 `itemCount`로 직렬화됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionResponse {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub is_public: bool,
    pub owner_id: u64,
    pub image_url: String,
    pub value: f64,
    #[serde(rename = "itemCount")]
    pub item_count: u64,
}

impl From<Collection> for CollectionResponse {
    fn from(collection: Collection) -> Self {
        let Collection {
            id,
            name,
            description,
            is_public,
            owner_id,
            image_url,
            value,
            item_count,
        } = collection;

        Self {
            id,
            name,
            description,
            is_public,
            owner_id,
            image_url,
            value,
            item_count,
        }
    }
}
