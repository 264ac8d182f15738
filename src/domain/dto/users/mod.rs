//! # User Data Transfer Objects Module
//!
//! 사용자 관련 API의 요청/응답 데이터 구조입니다.
//!
//! ```text
//! users/
//! ├── request/
//! │   ├── create_user.rs     # 회원가입
//! │   ├── auth_request.rs    # 로그인, 비밀번호 찾기/재설정
//! │   └── update_user.rs     # 프로필 수정, 사용자 검색
//! └── response/
//!     └── user_response.rs   # 공개 사용자, 프로필 조회, 메시지
//! ```

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
