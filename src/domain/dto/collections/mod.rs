//! # Collection Data Transfer Objects Module
//!
//! 컬렉션 생성/수정 요청과 공개 컬렉션 응답입니다.

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
