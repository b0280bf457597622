use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{db_url, DbKind};
use crate::error::AppError;

/// Connect to the configured store and bring its schema up to date.
pub async fn bootstrap_db<F>(kind: DbKind, vars: &F) -> Result<DatabaseConnection, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    let url = db_url(kind, vars)?;
    let conn = connect_db(kind, &url).await?;
    migrate(&conn, MigrationCommand::Up).await?;
    info!(db_kind = ?kind, "database ready");
    Ok(conn)
}

pub async fn connect_db(kind: DbKind, url: &str) -> Result<DatabaseConnection, AppError> {
    let mut opts = ConnectOptions::new(url.to_owned());
    opts.sqlx_logging(false);

    match kind {
        DbKind::Postgres => {
            opts.max_connections(16)
                .min_connections(1)
                .connect_timeout(Duration::from_secs(5))
                .acquire_timeout(Duration::from_secs(5));
        }
        // Each connection to `sqlite::memory:` is its own database, so the
        // pool must hold exactly one and never recycle it.
        DbKind::SqliteMemory => {
            opts.max_connections(1)
                .min_connections(1)
                .idle_timeout(Duration::from_secs(24 * 60 * 60))
                .max_lifetime(Duration::from_secs(24 * 60 * 60));
        }
    }

    Database::connect(opts)
        .await
        .map_err(|e| AppError::config(format!("failed to connect to database: {e}")))
}
