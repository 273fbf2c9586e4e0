//! Storage layer for shopping list items

mod item_store;

pub use item_store::ItemStore;
