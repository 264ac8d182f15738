//! Item Entity Implementation

use serde::{Deserialize, Serialize};

use crate::db::Record;

/// 컬렉션에 속한 단일 수집품
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub quantity: u32,
    pub estimated_value: f64,
    pub image_url: String,
    /// 소속 Collection ID. 항상 존재하는 컬렉션을 가리킵니다.
    pub collection_id: u64,
}

impl Record for Item {
    const TABLE: &'static str = "items";

    fn id(&self) -> u64 {
        self.id
    }
}
