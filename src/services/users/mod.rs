//! 사용자 조회 및 프로필 서비스 모듈
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let profile = state.user_service.view_profile(user_id).await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
