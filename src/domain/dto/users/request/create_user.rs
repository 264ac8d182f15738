//! # 회원가입 요청 DTO
//!
//! `POST /api/auth/register` 본문입니다.
//!
//! ## 검증 규칙
//!
//! - `name`: 1-100자, 공백만으로 구성될 수 없음
//! - `email`: RFC 5322 이메일 형식 (중복 여부는 리포지토리에서 검증)
//! - `password`: 최소 6자
//!
//! ```json
//! { "name": "Ana Souza", "email": "ana@example.com", "password": "segredo1" }
//! ```

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 회원가입 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 100, message = "이름은 1-100자 사이여야 합니다"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 6, message = "비밀번호는 최소 6자 이상이어야 합니다"))]
    pub password: String,
}

/// 공백 문자만으로 이루어진 값을 거부합니다.
///
/// 길이 검증은 공백도 글자로 세기 때문에 `"   "` 같은 이름이 통과하는 것을 막습니다.
pub(crate) fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank")
            .with_message("공백만으로 구성될 수 없습니다".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, email: &str, password: &str) -> CreateUserRequest {
        CreateUserRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(request("Ana", "ana@example.com", "segredo").validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_email() {
        assert!(request("Ana", "not-an-email", "segredo").validate().is_err());
    }

    #[test]
    fn test_rejects_short_password() {
        let errors = request("Ana", "ana@example.com", "12345").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn test_rejects_blank_name() {
        let errors = request("   ", "ana@example.com", "segredo").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }
}
