//! Shared utilities, configuration, and error handling for GroupPlan
//!
//! This crate provides common functionality used across the workspace:
//! - Configuration management following 12-factor principles
//! - Error types and handling
//! - Secure random identifiers

pub mod config;
pub mod crypto;
pub mod error;

pub use config::Config;
pub use crypto::secure_id;
pub use error::{Error, Result};
