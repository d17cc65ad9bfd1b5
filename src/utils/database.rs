use sqlx::{migrate::MigrateError, postgres::PgPoolOptions, PgPool};
use std::fmt;

#[derive(Clone)]
pub struct DatabaseConnection {
    pub pool: PgPool,
}

impl DatabaseConnection {
    /// Waits for checked-out connections to be returned, then closes every
    /// connection held by the pool.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database connections closed");
    }
}

#[derive(Debug)]
pub enum Error {
    Connect(sqlx::Error),
    Migrate(MigrateError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connect(err) => write!(f, "failed to connect to the database: {err}"),
            Self::Migrate(err) => write!(f, "failed to prepare the database schema: {err}"),
        }
    }
}

impl std::error::Error for Error {}

pub async fn connect(database_url: &str) -> Result<DatabaseConnection, Error> {
    PgPoolOptions::new()
        .max_connections(4)
        .connect(database_url)
        .await
        .map(|pool| DatabaseConnection { pool })
        .map_err(|err| {
            tracing::error!("{:}", err);
            Error::Connect(err)
        })
}

/// Creates the advert table and its indexes when they are missing. Existing
/// tables are left as they are.
pub async fn migrate(db_conn: &DatabaseConnection) -> Result<(), Error> {
    sqlx::migrate!().run(&db_conn.pool).await.map_err(|err| {
        tracing::error!("{}", err);
        Error::Migrate(err)
    })
}
