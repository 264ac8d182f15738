use serde::{Deserialize, Serialize};

use crate::domain::entities::items::Item;

/// 아이템 응답 DTO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemResponse {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub quantity: u32,
    pub estimated_value: f64,
    pub image_url: String,
    pub collection_id: u64,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        let Item {
            id,
            name,
            description,
            quantity,
            estimated_value,
            image_url,
            collection_id,
        } = item;

        Self {
            id,
            name,
            description,
            quantity,
            estimated_value,
            image_url,
            collection_id,
        }
    }
}
