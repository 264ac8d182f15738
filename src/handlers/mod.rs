//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들입니다.
//! 핸들러는 요청 본문 검증(`validator`)만 수행하고, 실제 처리는
//! `web::Data<AppState>`로 주입된 서비스에 위임합니다.
//!
//! ```text
//! Client
//!   │ HTTP Request/Response
//!   ▼
//! Handlers (이 모듈)  ← 검증, 상태 코드
//!   ▼
//! Services            ← 유스케이스
//!   ▼
//! Repositories        ← 도메인 가드, 트랜잭션
//!   ▼
//! JsonStore           ← users.json / collections.json / items.json
//! ```
//!
//! 에러는 [`AppError`](crate::core::errors::AppError)의 `ResponseError` 구현으로
//! `{"error": "...", "detail": "..."}` 본문과 함께 상태 코드가 결정됩니다.

pub mod auth;
pub mod users;
pub mod collections;
pub mod items;
