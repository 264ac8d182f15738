//! 프로필 수정 / 사용자 검색 요청 DTO

use serde::Deserialize;
use validator::Validate;

use super::create_user::validate_not_blank;
use crate::utils::string_utils::deserialize_optional_string;

/// 프로필 수정 요청 (`PUT /api/users/{id}`)
///
/// 모든 필드는 선택이며, 보내지 않았거나 빈 문자열인 필드는 변경하지 않습니다.
/// 자기소개는 프론트엔드와 같은 120자 제한을 둡니다.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(min = 1, max = 100, message = "이름은 1-100자 사이여야 합니다"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 120, message = "자기소개는 120자 이하여야 합니다"))]
    pub bio: Option<String>,
}

/// 사용자 목록 쿼리 (`GET /api/users?search=`)
#[derive(Debug, Default, Deserialize)]
pub struct UserSearchQuery {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub search: Option<String>,
}
