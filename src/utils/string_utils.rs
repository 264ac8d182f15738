//! # 문자열 유틸리티
//!
//! 입력 문자열 정리와 플레이스홀더 이미지 URL 생성 함수들입니다.

use serde::Deserialize;

use crate::core::errors::AppError;

/// 컬렉션 기본 이미지 (300x200, 브랜드 색 배경)
const COLLECTION_PLACEHOLDER_BASE: &str = "https://via.placeholder.com/300x200/4F518C/FFFFFF";

/// 아이템 기본 이미지 (150x150)
const ITEM_PLACEHOLDER_BASE: &str = "https://via.placeholder.com/150";

/// 필수 문자열 필드 검증 및 정리
///
/// 빈 문자열이나 공백만 있는 경우 ValidationError를 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 반환합니다.
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(format!("{}은(는) 필수입니다", field_name)));
    }
    Ok(trimmed.to_string())
}

/// 선택적 문자열 필드 정리
///
/// None, 빈 문자열, 공백만 있는 문자열은 None이 되고
/// 나머지는 앞뒤 공백을 제거해 Some으로 반환합니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 선택적 문자열 필드를 위한 serde deserializer
///
/// `#[serde(default, deserialize_with = "deserialize_optional_string")]`와 함께 사용합니다.
/// `null`, `""`, `"   "`는 모두 None이 됩니다.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

/// 컬렉션 이름이 들어간 기본 이미지 URL
pub fn collection_placeholder_image(name: &str) -> String {
    format!("{}?text={}", COLLECTION_PLACEHOLDER_BASE, urlencoding::encode(name.trim()))
}

/// 아이템 이름이 들어간 기본 이미지 URL
pub fn item_placeholder_image(name: &str) -> String {
    format!("{}?text={}", ITEM_PLACEHOLDER_BASE, urlencoding::encode(name.trim()))
}

/// 이미지 URL이 주어지지 않으면 플레이스홀더를 사용합니다.
pub fn image_or_placeholder(image_url: Option<String>, placeholder: impl FnOnce() -> String) -> String {
    clean_optional_string(image_url).unwrap_or_else(placeholder)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_string() {
        assert_eq!(validate_required_string("  Moedas  ", "name").unwrap(), "Moedas");
        assert!(validate_required_string("", "name").is_err());
        assert!(validate_required_string("\t\n", "name").is_err());
    }

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("  Selos ".to_string())), Some("Selos".to_string()));
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_deserialize_optional_string() {
        #[derive(Deserialize)]
        struct Body {
            #[serde(default, deserialize_with = "deserialize_optional_string")]
            image_url: Option<String>,
        }

        let parse = |json: &str| serde_json::from_str::<Body>(json).unwrap().image_url;

        assert_eq!(parse(r#"{"image_url": "  https://img/1.png "}"#), Some("https://img/1.png".to_string()));
        assert_eq!(parse(r#"{"image_url": ""}"#), None);
        assert_eq!(parse(r#"{"image_url": null}"#), None);
        assert_eq!(parse(r#"{}"#), None);
    }

    #[test]
    fn test_placeholder_images_encode_name() {
        assert_eq!(
            collection_placeholder_image("Moedas Antigas"),
            "https://via.placeholder.com/300x200/4F518C/FFFFFF?text=Moedas%20Antigas"
        );
        assert_eq!(
            item_placeholder_image("Selo & Carimbo"),
            "https://via.placeholder.com/150?text=Selo%20%26%20Carimbo"
        );
    }

    #[test]
    fn test_image_or_placeholder() {
        let supplied = image_or_placeholder(Some("https://img/a.png".to_string()), || "fallback".to_string());
        assert_eq!(supplied, "https://img/a.png");

        let blank = image_or_placeholder(Some("  ".to_string()), || "fallback".to_string());
        assert_eq!(blank, "fallback");
    }
}
