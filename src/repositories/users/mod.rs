//! 사용자 데이터 액세스 계층
//!
//! ```rust,ignore
//! use crate::repositories::users::UserRepository;
//!
//! let users = UserRepository::new(store.clone());
//! let user = users.find_by_email("ana@example.com").await?;
//! ```

pub mod user_repo;

pub use user_repo::{ProfileChanges, UserRepository};
