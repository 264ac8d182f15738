//! Items Entity Module

pub mod item;

pub use item::Item;
