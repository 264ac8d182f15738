pub mod item_response;

pub use item_response::ItemResponse;
