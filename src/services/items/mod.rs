//! 아이템 서비스 모듈

pub mod item_service;

pub use item_service::ItemService;
