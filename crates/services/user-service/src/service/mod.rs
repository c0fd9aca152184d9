//! Business logic layer.

pub mod user_service;

pub use user_service::{UserManager, UserService};
