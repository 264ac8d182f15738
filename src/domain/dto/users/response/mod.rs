//! # 사용자 관련 응답 DTO 모듈
//!
//! 서버가 클라이언트에게 돌려주는 사용자 데이터 구조입니다.
//! 엔티티를 그대로 직렬화하지 않고 항상 [`UserResponse`]로 변환하여
//! 비밀번호 해시와 재설정 토큰이 응답에 섞이지 않게 합니다.
//!
//! ```json
//! { "id": 1, "name": "Ana Souza", "email": "ana@example.com", "bio": null }
//! ```

pub mod user_response;

pub use user_response::{MessageResponse, ProfileResponse, UserResponse};
