use anyhow::{Context, Result};

const DEFAULT_DATABASE_URL: &str = "sqlite://database/products.db";
const DEFAULT_PORT: u16 = 3002;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub db_min_conn: u32,
    pub db_max_conn: u32,
    pub is_dev: bool,
    pub enable_file_log: bool,
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let port = match lookup("PORT") {
            Some(value) => value
                .parse::<u16>()
                .context("PORT must be a valid u16 integer")?,
            None => DEFAULT_PORT,
        };

        let db_min_conn = match lookup("DB_MIN_CONN") {
            Some(value) => value
                .parse::<u32>()
                .context("DB_MIN_CONN must be a valid u32 integer")?,
            None => 1,
        };

        let db_max_conn = match lookup("DB_MAX_CONN") {
            Some(value) => value
                .parse::<u32>()
                .context("DB_MAX_CONN must be a valid u32 integer")?,
            None => 5,
        };

        let is_dev = lookup("DEV_MODE")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);
        let enable_file_log = lookup("ENABLE_FILE_LOG")
            .map(|v| v == "true")
            .unwrap_or(false);

        Ok(Self {
            database_url,
            port,
            db_min_conn,
            db_max_conn,
            is_dev,
            enable_file_log,
        })
    }
}
