//! Reducer-style backing store for the display list

pub mod token_store;

pub use token_store::{ListQuery, StoreEvent, TokenStore};
