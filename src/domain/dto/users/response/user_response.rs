use serde::{Deserialize, Serialize};

use crate::domain::dto::collections::response::CollectionResponse;
use crate::domain::entities::users::User;

/// 공개 사용자 응답 DTO
///
/// 비밀번호 해시와 재설정 토큰 관련 필드는 절대 포함하지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub bio: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User { id, name, email, bio, .. } = user;

        Self { id, name, email, bio }
    }
}

/// 다른 사용자 프로필 조회 응답 (`GET /api/users/{id}/profile`)
///
/// 기존 프론트엔드가 읽는 필드명(`perfil`, `colecoes`)을 그대로 사용합니다.
/// `collections`에는 공개 컬렉션만 담깁니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    #[serde(rename = "perfil")]
    pub profile: UserResponse,
    #[serde(rename = "colecoes")]
    pub collections: Vec<CollectionResponse>,
}

/// 단순 메시지 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_record_has_no_secret_fields() {
        let mut user = User::new(7, "Ana".to_string(), "ana@example.com".to_string(), "$2b$hash".to_string());
        user.reset_token_hash = Some("digest".to_string());

        let json = serde_json::to_value(UserResponse::from(user)).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object.len(), 4);
        assert!(object.contains_key("bio"));
        assert!(!object.contains_key("password_hash"));
        assert!(!object.contains_key("reset_token_hash"));
    }

    #[test]
    fn test_profile_response_wire_names() {
        let profile = ProfileResponse {
            profile: UserResponse { id: 1, name: "Ana".to_string(), email: "a@b.co".to_string(), bio: None },
            collections: vec![],
        };

        let json = serde_json::to_value(profile).unwrap();
        assert!(json.get("perfil").is_some());
        assert!(json.get("colecoes").unwrap().as_array().unwrap().is_empty());
    }
}
