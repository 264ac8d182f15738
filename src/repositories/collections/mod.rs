//! 컬렉션 데이터 액세스 계층

pub mod collection_repo;

pub use collection_repo::{CollectionRepository, NewCollection};
