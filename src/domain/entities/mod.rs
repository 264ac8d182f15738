//! # Domain Entities Module
//!
//! JSON 파일 저장소에 그대로 직렬화되는 핵심 엔티티들입니다.
//! 모든 엔티티는 [`Record`](crate::db::Record)를 구현하여 테이블 이름과 ID를 제공합니다.
//!
//! ```text
//! User 1 ──< Collection 1 ──< Item
//! ```
//!
//! - [`users`] - 컬렉터 계정 (비밀번호 해시, 재설정 토큰 다이제스트 포함)
//! - [`collections`] - 공개/비공개 컬렉션과 집계 값
//! - [`items`] - 컬렉션 소속 수집품

pub mod users;
pub mod collections;
pub mod items;

pub use users::User;
pub use collections::Collection;
pub use items::Item;
