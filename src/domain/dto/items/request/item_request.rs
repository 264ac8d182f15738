//! 아이템 추가/수정 요청 DTO

use serde::Deserialize;
use validator::Validate;

use crate::domain::dto::users::request::create_user::validate_not_blank;
use crate::utils::string_utils::deserialize_optional_string;

fn default_quantity() -> u32 {
    1
}

/// 아이템 추가 요청 (`POST /api/items`)
///
/// ```json
/// {
///   "name": "500 réis 1889",
///   "description": "prata",
///   "quantity": 1,
///   "estimated_value": 350.0,
///   "collection_id": 3,
///   "image_url": ""
/// }
/// ```
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateItemRequest {
    #[validate(length(min = 1, max = 100, message = "아이템 이름은 1-100자 사이여야 합니다"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 1000, message = "설명은 1000자 이하여야 합니다"))]
    pub description: Option<String>,

    #[serde(default = "default_quantity")]
    #[validate(range(min = 1, message = "수량은 1 이상이어야 합니다"))]
    pub quantity: u32,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "예상 가치는 0 이상이어야 합니다"))]
    pub estimated_value: f64,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub image_url: Option<String>,

    pub collection_id: u64,
}

/// 아이템 수정 요청 (`PUT /api/items/{id}`)
///
/// 아이템을 다른 컬렉션으로 옮기는 기능은 없으므로 `collection_id`는 받지 않습니다.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateItemRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(min = 1, max = 100, message = "아이템 이름은 1-100자 사이여야 합니다"))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 1000, message = "설명은 1000자 이하여야 합니다"))]
    pub description: Option<String>,

    #[serde(default)]
    #[validate(range(min = 1, message = "수량은 1 이상이어야 합니다"))]
    pub quantity: Option<u32>,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "예상 가치는 0 이상이어야 합니다"))]
    pub estimated_value: Option<f64>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub image_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_defaults_quantity_and_value() {
        let json = r#"{"name": "Selo Olho-de-boi", "collection_id": 1}"#;
        let request: CreateItemRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.quantity, 1);
        assert_eq!(request.estimated_value, 0.0);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_rejects_zero_quantity_and_negative_value() {
        let json = r#"{"name": "x", "collection_id": 1, "quantity": 0, "estimated_value": -1.0}"#;
        let request: CreateItemRequest = serde_json::from_str(json).unwrap();

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("quantity"));
        assert!(errors.field_errors().contains_key("estimated_value"));
    }

    #[test]
    fn test_update_rejects_negative_value() {
        let request = UpdateItemRequest {
            estimated_value: Some(-0.5),
            ..Default::default()
        };
        assert!(request.validate().is_err());
    }
}
