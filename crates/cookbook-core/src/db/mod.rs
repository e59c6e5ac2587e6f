//! Database module - SQLx with SQLite

use crate::error::{Error, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::PathBuf;
use tokio::sync::OnceCell;

/// Process-wide database handle, created lazily on first use.
static GLOBAL_DB: OnceCell<Database> = OnceCell::const_new();

/// Database state
#[derive(Clone)]
pub struct Database {
    pub pool: SqlitePool,
}

impl Database {
    /// Create a new database connection with default path
    pub async fn new() -> Result<Self> {
        let db_path = get_db_path()?;
        Self::open(db_path).await
    }

    /// Create a new database connection with a specific path
    pub async fn open(db_path: PathBuf) -> Result<Self> {
        // Ensure parent directory exists
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        log::info!("Connecting to database: {}", db_path.display());

        // Foreign keys must be on for recipe deletion to cascade into
        // recipe_ingredients; SQLite leaves them off by default.
        let options = SqliteConnectOptions::new()
            .filename(&db_path)
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        let db = Self { pool };
        db.run_migrations().await?;

        Ok(db)
    }

    /// Shared process-wide handle, opened at the default path on first call
    /// and reused for the process lifetime. Call sites that need a private
    /// database (tests, CLI `--db`) should use [`Database::open`] instead.
    pub async fn global() -> Result<&'static Database> {
        GLOBAL_DB.get_or_try_init(Self::new).await
    }

    /// Run database migrations
    async fn run_migrations(&self) -> Result<()> {
        log::info!("Running database migrations...");

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS recipes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                instructions TEXT,
                image TEXT
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS ingredients (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS recipe_ingredients (
                recipe_id INTEGER NOT NULL,
                ingredient_id INTEGER NOT NULL,
                quantity TEXT,
                FOREIGN KEY (recipe_id) REFERENCES recipes(id) ON DELETE CASCADE,
                FOREIGN KEY (ingredient_id) REFERENCES ingredients(id) ON DELETE CASCADE
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        log::info!("Database migrations completed");
        Ok(())
    }
}

/// Get database file path
/// Priority: COOKBOOK_DB_PATH env var > default app data directory
pub fn get_db_path() -> Result<PathBuf> {
    // Check for environment variable override
    if let Ok(path) = std::env::var("COOKBOOK_DB_PATH") {
        return Ok(PathBuf::from(path));
    }

    // Default: use app data directory
    let dirs = directories::ProjectDirs::from("com", "cookbook", "Cookbook")
        .ok_or_else(|| Error::config("Could not determine project directories"))?;

    Ok(dirs.data_dir().join("cookbook.db"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests don't run in parallel
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn test_get_db_path_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        // Without env var, should return default path
        std::env::remove_var("COOKBOOK_DB_PATH");
        let path = get_db_path().unwrap();
        assert!(path.to_string_lossy().contains("cookbook.db"));
    }

    #[tokio::test]
    async fn test_global_handle_is_created_once() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let temp_dir = tempfile::TempDir::new().unwrap();
        std::env::set_var(
            "COOKBOOK_DB_PATH",
            temp_dir.path().join("global.db").to_string_lossy().to_string(),
        );

        let first = Database::global().await.unwrap();
        let second = Database::global().await.unwrap();
        assert!(std::ptr::eq(first, second));

        std::env::remove_var("COOKBOOK_DB_PATH");
    }

    #[test]
    fn test_get_db_path_env_override() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let test_path = "/tmp/test_cookbook.db";
        std::env::set_var("COOKBOOK_DB_PATH", test_path);
        let path = get_db_path().unwrap();
        assert_eq!(path.to_string_lossy(), test_path);
        std::env::remove_var("COOKBOOK_DB_PATH");
    }
}
