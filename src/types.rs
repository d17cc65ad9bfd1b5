pub use crate::utils::database;
use async_trait::async_trait;
use std::env;

#[derive(Clone)]
pub struct AppContext {
    pub host: String,
    pub port: u16,
}

#[derive(Clone)]
pub struct Context {
    pub app: AppContext,
    pub db_conn: database::DatabaseConnection,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DatabaseConfig {
    pub user: String,
    pub password: String,
    pub name: String,
    pub host: String,
    pub port: u16,
}

impl DatabaseConfig {
    pub fn url(&self) -> String {
        format!(
            "postgresql://{}:{}@{}:{}/{}",
            urlencoding::encode(&self.user),
            urlencoding::encode(&self.password),
            self.host,
            self.port,
            self.name
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub database: DatabaseConfig,
    pub app: AppConfig,
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

impl Default for Config {
    fn default() -> Self {
        let database_port = env_or("PG_PORT", "5431")
            .parse::<u16>()
            .expect("Invalid PG_PORT number");
        let port = env_or("PORT", "5000")
            .parse::<u16>()
            .expect("Invalid PORT number");

        Self {
            database: DatabaseConfig {
                user: env_or("PG_USER", "app"),
                password: env_or("PG_PASSWORD", "1234"),
                name: env_or("PG_DB", "app"),
                host: env_or("PG_HOST", "127.0.0.1"),
                port: database_port,
            },
            app: AppConfig {
                host: env_or("HOST", "127.0.0.1"),
                port,
            },
        }
    }
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Result<Context, database::Error>;
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Result<Context, database::Error> {
        let db_conn = database::connect(self.database.url().as_str()).await?;
        database::migrate(&db_conn).await?;

        Ok(Context {
            app: AppContext {
                host: self.app.host,
                port: self.app.port,
            },
            db_conn,
        })
    }
}
