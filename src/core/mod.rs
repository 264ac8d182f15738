//! 애플리케이션 공통 핵심 모듈
//!
//! 모든 계층이 공유하는 에러 타입 [`AppError`]와 [`AppResult`]를 제공합니다.

pub mod errors;

pub use errors::*;
