use crate::error::DbError;
use configuration::DatabaseSettings;
use dotenvy::dotenv;
use sqlx::{PgPool, postgres::PgPoolOptions};
use std::env;
use std::time::Duration;

/// Establishes a connection pool to the PostgreSQL database.
///
/// This function reads the `DATABASE_URL` from the environment (loading a
/// `.env` file when present), creates a connection pool sized per the
/// application settings, and returns it. The pool is shared across the
/// entire application; each request checks out one connection for its
/// duration and the checkout is released on every exit path.
pub async fn connect(settings: &DatabaseSettings) -> Result<PgPool, DbError> {
    // Load environment variables from the .env file, if one exists.
    dotenv().ok();

    let database_url = env::var("DATABASE_URL")
        .map_err(|_e| DbError::ConnectionConfig("DATABASE_URL must be set.".to_string()))?;

    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout_secs))
        .connect(&database_url)
        .await?;

    Ok(pool)
}

/// A utility function to run database migrations automatically.
///
/// This is useful for ensuring the database schema is up-to-date when the
/// application starts, which is especially important in production
/// deployments.
pub async fn run_migrations(pool: &PgPool) -> Result<(), DbError> {
    // Use a relative path from the crate root
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
