//! Vidora request client
//!
//! Single choke point for all network calls made by the Vidora client crates.
//! Attaches bearer-token authentication, normalizes error handling, and exposes
//! GET/POST/PUT/PATCH/DELETE plus multipart uploads with progress reporting.

pub mod client;
pub mod query;
pub mod token;
pub mod upload;

pub use client::{ApiClient, RequestOptions, UnauthorizedHook};
pub use query::QueryParams;
pub use token::{FileTokenStore, MemoryTokenStore, TokenStore};
pub use upload::{ProgressFn, UploadFile, UploadRequest};
