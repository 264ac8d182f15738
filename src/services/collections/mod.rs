//! 컬렉션 서비스 모듈

pub mod collection_service;

pub use collection_service::CollectionService;
