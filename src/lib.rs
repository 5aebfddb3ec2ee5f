//! Restaurant directory HTTP API.
//!
//! A small JSON-over-HTTP service exposing a restaurants resource with
//! conventional CRUD semantics, backed by an in-memory concurrent store.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`restaurants`]: Domain model and store
//! - [`api`]: Router, handlers, and request middleware
//! - [`metrics`]: Prometheus metrics
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod restaurants;
pub mod utils;

pub use config::Config;
pub use error::{ApiError, AppError, Result};
