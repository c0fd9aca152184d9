//! Data access layer.

pub mod entities;
pub mod product_repository;

pub use product_repository::{ProductDraft, ProductRepository, ProductStore};

#[cfg(any(test, feature = "test-utils"))]
pub use product_repository::MockProductRepository;
