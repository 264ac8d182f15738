//! # Domain Layer Module
//!
//! 엔티티와 API 경계 DTO를 담는 도메인 계층입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - users.json / collections.json / items.json 에 저장되는 레코드
//! └── dto       - HTTP 요청/응답 본문
//!      │
//!      ▼
//! Services → Repositories → JSON Store
//! ```

pub mod entities;
pub mod dto;

pub use entities::*;
