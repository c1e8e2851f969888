//! Database connection setup.

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::error::Error;

/// Connect to the database and bring the schema up to date.
///
/// Accepts any sea-orm connection URL (`sqlite://checks.db?mode=rwc`,
/// `sqlite::memory:`). The connection is shared by all repositories; the
/// storage layer serializes conflicting writes.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, Error> {
    let mut opt = ConnectOptions::new(database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("database schema up to date");

    Ok(db)
}
