//! Shared infrastructure concerns for all services.
//!
//! Provides the unified error type, request validation extractor,
//! configuration structures and the database wrapper.

pub mod config;
pub mod error;
pub mod extractors;

#[cfg(feature = "database")]
pub mod db;

pub use config::JwtConfig;
pub use error::{AppError, AppResult};
pub use extractors::ValidatedJson;

#[cfg(feature = "database")]
pub use db::Database;
