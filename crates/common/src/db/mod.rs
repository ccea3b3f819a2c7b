//! Database layer for Papercat
//!
//! Provides:
//! - SeaORM entity model for papers
//! - Repository trait and its SeaORM implementation
//! - Connection pool management and schema bootstrap

pub mod models;
mod filter;
mod repository;

pub use filter::TextFilter;
pub use repository::{PaperRepository, SeaOrmPaperRepository};

use crate::config::DatabaseConfig;
use crate::errors::{AppError, Result};
use models::PaperEntity;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Schema};
use tracing::info;

/// Database connection pool wrapper
#[derive(Clone)]
pub struct DbPool {
    conn: DatabaseConnection,
}

impl DbPool {
    /// Create a new database pool from configuration
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        info!("Connecting to database...");

        let mut opts = ConnectOptions::new(&config.url);
        opts.max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(config.connect_timeout())
            .idle_timeout(config.idle_timeout())
            .sqlx_logging(true);

        let conn = Database::connect(opts)
            .await
            .map_err(|e| AppError::DatabaseConnection {
                message: format!("Failed to connect: {}", e)
            })?;

        let pool = Self { conn };

        if config.auto_create_schema {
            pool.ensure_schema().await?;
        }

        info!("Database connection established");

        Ok(pool)
    }

    /// Connection used for all reads and writes
    pub fn conn(&self) -> &DatabaseConnection {
        &self.conn
    }

    /// Create the papers table from the entity definition if it does not exist
    pub async fn ensure_schema(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        let schema = Schema::new(backend);

        let mut stmt = schema.create_table_from_entity(PaperEntity);
        stmt.if_not_exists();

        self.conn.execute(backend.build(&stmt)).await?;
        info!(?backend, "Papers table ensured");

        Ok(())
    }

    /// Ping the database to check connectivity
    pub async fn ping(&self) -> Result<()> {
        self.conn
            .execute_unprepared("SELECT 1")
            .await
            .map_err(|e| AppError::DatabaseConnection {
                message: format!("Ping failed: {}", e),
            })?;

        Ok(())
    }
}
