//! Infrastructure concerns (database, migrations).

pub mod migrations;

/// Database wrapper bound to this service's migrator.
pub type Database = common::db::Database<migrations::Migrator>;
