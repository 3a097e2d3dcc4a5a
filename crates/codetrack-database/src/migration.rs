//! Schema migrations and startup initialization.

use std::future::Future;
use std::time::Duration;

use sqlx::PgPool;
use tracing::{error, info, warn};

use codetrack_core::config::DatabaseConfig;
use codetrack_core::error::{AppError, ErrorKind};
use codetrack_core::result::AppResult;

use crate::connection::DatabasePool;

/// Run all pending database migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    info!("Running database migrations...");

    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to run migrations: {e}"),
                e,
            )
        })?;

    info!("Database migrations completed successfully");
    Ok(())
}

/// Connect and bring the schema up to date, retrying while the database
/// is still starting.
pub async fn initialize(config: &DatabaseConfig) -> AppResult<DatabasePool> {
    retry_with_fixed_delay(
        "Database",
        config.init_max_attempts,
        Duration::from_secs(config.init_retry_delay_seconds),
        move || async move {
            let db = DatabasePool::connect(config).await?;
            run_migrations(db.pool()).await?;
            Ok(db)
        },
    )
    .await
}

/// Run `op` up to `max_attempts` times (at least once), sleeping `delay`
/// between failures. The last error is returned once attempts run out.
pub async fn retry_with_fixed_delay<T, F, Fut>(
    what: &str,
    max_attempts: u32,
    delay: Duration,
    mut op: F,
) -> AppResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = AppResult<T>>,
{
    let max_attempts = max_attempts.max(1);
    let mut attempt = 1;

    loop {
        match op().await {
            Ok(value) => {
                info!(attempt, "{what} ready");
                return Ok(value);
            }
            Err(e) if attempt < max_attempts => {
                warn!(
                    attempt,
                    max_attempts,
                    error = %e,
                    "{what} not ready, retrying in {}s",
                    delay.as_secs()
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(e) => {
                error!(max_attempts, error = %e, "{what} still unavailable after retries");
                return Err(e);
            }
        }
    }
}
