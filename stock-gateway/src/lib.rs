//! HTTP gateway for the stock item resource.
//!
//! Exposes listing, lookup and teacher-gated mutation of stock items over
//! `/stock`, backed by pluggable record and credential stores.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod routes;
pub mod service;

pub use config::{GatewayConfig, UpdatePolicy};
pub use error::{AuthFailure, GatewayError};
pub use service::StockService;
