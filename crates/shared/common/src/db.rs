//! Database connection and migration management.
//!
//! Generic over the service's migrator so each service reuses the same
//! connect/migrate plumbing against its own schema.

use std::marker::PhantomData;

use sea_orm::{ConnectionTrait, Database as SeaDatabase, DatabaseConnection, DbErr, Statement};
use sea_orm_migration::MigratorTrait;

/// Database wrapper for connection management.
pub struct Database<M: MigratorTrait> {
    connection: DatabaseConnection,
    _migrator: PhantomData<M>,
}

// Manual impl: derive(Clone) would require `M: Clone`, but the migrator is
// only a PhantomData marker.
impl<M: MigratorTrait> Clone for Database<M> {
    fn clone(&self) -> Self {
        Self {
            connection: self.connection.clone(),
            _migrator: PhantomData,
        }
    }
}

impl<M: MigratorTrait> Database<M> {
    /// Initialize database connection and run pending migrations.
    pub async fn connect(database_url: &str) -> Result<Self, DbErr> {
        let connection = SeaDatabase::connect(database_url).await?;

        M::up(&connection, None).await?;
        tracing::info!("Database connected and migrations applied");

        Ok(Self {
            connection,
            _migrator: PhantomData,
        })
    }

    /// Connect without running migrations (for CLI commands).
    pub async fn connect_without_migrations(database_url: &str) -> Result<Self, DbErr> {
        let connection = SeaDatabase::connect(database_url).await?;
        Ok(Self {
            connection,
            _migrator: PhantomData,
        })
    }

    /// Get a reference to the database connection.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.connection
    }

    /// Get a clone of the database connection.
    pub fn get_connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    /// Run pending migrations.
    pub async fn run_migrations(&self) -> Result<(), DbErr> {
        M::up(&self.connection, None).await
    }

    /// Rollback the last migration.
    pub async fn rollback_migration(&self) -> Result<(), DbErr> {
        M::down(&self.connection, Some(1)).await
    }

    /// Get migration status (list all migrations with applied status).
    pub async fn migration_status(&self) -> Result<Vec<(String, bool)>, DbErr> {
        use sea_orm::{EntityTrait, QueryOrder};
        use sea_orm_migration::seaql_migrations;

        let applied: std::collections::HashSet<String> = seaql_migrations::Entity::find()
            .order_by_asc(seaql_migrations::Column::Version)
            .all(&self.connection)
            .await?
            .into_iter()
            .map(|m| m.version)
            .collect();

        let migrations: Vec<(String, bool)> = M::migrations()
            .iter()
            .map(|m| {
                let name = m.name().to_string();
                let is_applied = applied.contains(&name);
                (name, is_applied)
            })
            .collect();

        Ok(migrations)
    }

    /// Reset database and run all migrations fresh.
    pub async fn fresh_migrations(&self) -> Result<(), DbErr> {
        M::fresh(&self.connection).await
    }

    /// Check database connectivity by executing a simple query.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.connection
            .execute(Statement::from_string(
                self.connection.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await?;
        Ok(())
    }
}
