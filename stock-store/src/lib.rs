//! Record and credential stores for the stock item service.
//!
//! Defines the store traits the request handler talks to and an in-memory
//! implementation of each.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod backend;
pub mod error;
pub mod memory;

pub use backend::{
    CredentialStore, DeleteOutcome, InsertOutcome, StockFilter, StockStore, UpdateOutcome,
};
pub use error::StoreError;
pub use memory::{InMemoryCredentialStore, InMemoryStockStore};
