//! 수집가 프로필 백엔드
//!
//! 수집가(사용자)가 회원가입/로그인하고, 컬렉션을 만들고, 아이템을 추가/삭제하며,
//! 다른 수집가의 공개 프로필을 보고, 잊어버린 비밀번호를 재설정할 수 있는 REST API입니다.
//! 모든 데이터는 데이터 디렉터리의 JSON 파일(`users.json`, `collections.json`, `items.json`)에 저장됩니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 검증 / 응답
//! └─────────────────┘
//!          │  web::Data<AppState>
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 유스케이스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 도메인 가드, 집계 값 유지
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   JsonStore     │ ← 테이블별 잠금 + 원자적 파일 교체
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use collector_profile_backend::{db::JsonStore, state::AppState};
//!
//! let store = Arc::new(JsonStore::open("./data").await?);
//! let state = AppState::from_env(store);
//! let user = state.auth_service.register(request).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod state;
pub mod utils;
pub mod routes;
pub mod handlers;
