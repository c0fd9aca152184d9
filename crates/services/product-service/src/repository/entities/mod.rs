//! Database entities.

pub mod product;
