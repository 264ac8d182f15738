//! 아이템 데이터 액세스 계층

pub mod item_repo;

pub use item_repo::{ItemRepository, NewItem};
