//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 각 서비스는 필요한 리포지토리를 `Arc`로 주입받아 생성되며,
//! [`crate::state::AppState`]에 묶여 핸들러로 전달됩니다.
//!
//! # Modules
//!
//! - [`auth`] - 회원가입, 로그인, 비밀번호 재설정
//! - [`users`] - 사용자 조회/검색, 프로필 수정, 다른 사용자 프로필 보기
//! - [`collections`] - 컬렉션 생성/목록/수정/삭제
//! - [`items`] - 아이템 추가/목록/수정/삭제
//! - [`notifications`] - 재설정 링크 발송 통로

pub mod auth;
pub mod users;
pub mod collections;
pub mod items;
pub mod notifications;
