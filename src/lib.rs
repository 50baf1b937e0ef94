//! rpc-allocator - Deterministic RPC endpoint allocation for deployments
//!
//! A Rust library and CLI that splits a user-supplied pool of per-chain RPC
//! endpoints (HTTP and WebSocket) across a fixed set of consuming services
//! with a stable, reproducible rule, and merges collected endpoints into a
//! persisted multi-chain configuration file without losing or duplicating
//! entries.
//!
//! # Example
//!
//! ```rust
//! use rpc_allocator::{distribute, RpcDocument};
//!
//! let pool = vec![
//!     "https://rpc-1.example.org".to_string(),
//!     "https://rpc-2.example.org".to_string(),
//!     "https://rpc-3.example.org".to_string(),
//! ];
//!
//! // Each of 3 services computes its own disjoint share
//! let share = distribute(0, 3, &pool);
//! assert_eq!(share, vec!["https://rpc-1.example.org".to_string()]);
//!
//! // Collected endpoints accumulate in the persisted document
//! let mut document = RpcDocument::new();
//! document.merge(1442, &pool, None);
//! assert_eq!(document.entry(1442).unwrap().http.len(), 3);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod rpc;

// Re-exports for convenience
pub use config::{ConfigFile, RpcDocument, RpcEntry, Settings};
pub use error::{ConfigError, Error, PoolError, Result};
pub use rpc::{distribute, EndpointPool, HttpService, Transport, WsService};
