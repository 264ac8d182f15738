//! 컬렉션 생성/수정 요청 DTO

use serde::Deserialize;
use validator::Validate;

use crate::domain::dto::users::request::create_user::validate_not_blank;
use crate::utils::string_utils::deserialize_optional_string;

/// 컬렉션 생성 요청 (`POST /api/collections`)
///
/// `image_url`이 비어 있으면 이름이 들어간 플레이스홀더 이미지가 지정됩니다.
/// `is_public`을 생략하면 비공개 컬렉션으로 만들어집니다.
///
/// ```json
/// {
///   "name": "Moedas do Império",
///   "description": "Moedas de 1822 a 1889",
///   "image_url": "",
///   "is_public": true,
///   "owner_id": 1
/// }
/// ```
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCollectionRequest {
    #[validate(length(min = 1, max = 100, message = "컬렉션 이름은 1-100자 사이여야 합니다"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 1000, message = "설명은 1000자 이하여야 합니다"))]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub image_url: Option<String>,

    #[serde(default)]
    pub is_public: bool,

    pub owner_id: u64,
}

/// 컬렉션 수정 요청 (`PUT /api/collections/{id}`)
///
/// 보내지 않은 필드는 변경하지 않습니다. 소유자와 집계 값은 수정할 수 없습니다.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCollectionRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(min = 1, max = 100, message = "컬렉션 이름은 1-100자 사이여야 합니다"))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 1000, message = "설명은 1000자 이하여야 합니다"))]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub image_url: Option<String>,

    #[serde(default)]
    pub is_public: Option<bool>,
}
