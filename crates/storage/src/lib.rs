use sqlx::migrate::Migrator;
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::{Postgres, Transaction};

pub mod dto;
pub mod error;
pub mod models;
pub mod repository;

use error::Result;

/// Embedded schema migrations, shared with `#[sqlx::test]` fixtures.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// A unit of work bound to one request. Dropping it without calling
/// `commit` rolls everything back.
pub type Session = Transaction<'static, Postgres>;

/// Shared handle over the connection pool.
#[derive(Debug, Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub async fn new(database_url: &str, max_connections: u32) -> Result<Self> {
        tracing::debug!(max_connections, "Opening Postgres connection pool");
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn run_migrations(&self) -> Result<()> {
        MIGRATOR.run(&self.pool).await?;
        Ok(())
    }

    /// Begins a new session on a pooled connection.
    pub async fn session(&self) -> Result<Session> {
        Ok(self.pool.begin().await?)
    }
}
