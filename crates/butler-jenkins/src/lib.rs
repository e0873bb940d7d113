//! Jenkins REST API adapter for the butler CLI
//!
//! # Architecture
//!
//! - `client` - authenticated HTTP client and API methods
//! - `types` - API response types
//! - `tree` - recursive folder-tree traversal and search
//! - `mapper` - normalization of parameter definitions and build causes
//! - `path` - nested `/job/...` path rewriting
//! - `logs` - console-log download

pub mod client;
pub mod logs;
pub mod mapper;
pub mod path;
pub mod tree;
pub mod types;

pub use client::JenkinsClient;
