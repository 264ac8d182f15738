pub mod collection_response;

pub use collection_response::CollectionResponse;
