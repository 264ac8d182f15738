//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 주고받는 데이터 구조를 정의합니다.
//! 요청 DTO는 `serde`로 역직렬화되고 `validator`로 검증되며,
//! 응답 DTO는 엔티티에서 `From` 변환으로 만들어집니다.
//!
//! | 모듈 | 요청 | 응답 |
//! |------|------|------|
//! | [`users`] | 회원가입, 로그인, 비밀번호 재설정, 프로필 수정 | `UserResponse`, `ProfileResponse` |
//! | [`collections`] | 컬렉션 생성/수정 | `CollectionResponse` |
//! | [`items`] | 아이템 추가/수정 | `ItemResponse` |
//!
//! 선택 문자열 필드는 [`deserialize_optional_string`](crate::utils::string_utils::deserialize_optional_string)을
//! 사용하므로 빈 문자열이나 공백만 있는 값은 "보내지 않음"으로 취급됩니다.

pub mod users;
pub mod collections;
pub mod items;
