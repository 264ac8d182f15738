//! Collections Entity Module

pub mod collection;

pub use collection::Collection;
