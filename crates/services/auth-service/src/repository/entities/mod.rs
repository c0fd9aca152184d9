//! SeaORM database entities.

pub mod account;
