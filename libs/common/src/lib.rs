//! Common library for the Vidora client
//!
//! This crate provides shared functionality used across the different client
//! crates of the Vidora platform, including error handling and configuration.

pub mod config;
pub mod error;

pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};
