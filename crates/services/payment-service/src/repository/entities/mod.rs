//! SeaORM database entities.

pub mod payment;
