//! Users Entity Module
//!
//! 컬렉터 계정 엔티티를 정의합니다.

pub mod user;

pub use user::User;
