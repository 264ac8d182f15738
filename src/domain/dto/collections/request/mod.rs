pub mod collection_request;

pub use collection_request::{CreateCollectionRequest, UpdateCollectionRequest};
