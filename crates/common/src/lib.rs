//! Papercat Common Library
//!
//! Shared code for the Papercat service binaries:
//! - Paper entity and repository
//! - Error types and handling
//! - Configuration management
//! - Metrics

pub mod config;
pub mod db;
pub mod errors;
pub mod metrics;

// Re-export commonly used types
pub use config::AppConfig;
pub use db::{DbPool, PaperRepository, SeaOrmPaperRepository, TextFilter};
pub use errors::{AppError, Result};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
