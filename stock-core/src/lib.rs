//! Core types for the stock item resource service.
//!
//! Defines stock items, their identifiers, the teacher credential identifier
//! and the pure helpers behind the low-stock and category listings.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod examples;
pub mod id;
pub mod item;

pub use error::CoreError;
pub use id::{CredentialId, ItemId};
pub use item::{retain_low_stock, sorted_categories, QuantityUpdate, StockItem};
