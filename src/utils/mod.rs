//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 검증/정리, 플레이스홀더 이미지 URL
//! - [`display_terminal`] - 시작 배너와 모의 메일 박스 포맷팅

pub mod string_utils;
pub mod display_terminal;
