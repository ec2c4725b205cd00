use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::{StorageBackend, StorageConfig};
use crate::database::Database;
use crate::search::{InMemoryJobRepository, JobRepository, SqliteJobRepository};

/// Returns the path to the jobboard database based on the operating system
///
/// # Platform-specific paths
///
/// - **macOS**: `~/Library/Application Support/jobboard/jobs.sqlite`
/// - **Linux**: `~/.local/share/jobboard/jobs.sqlite`
/// - **Windows**: `%LOCALAPPDATA%\jobboard\jobs.sqlite`
pub fn get_db_path() -> anyhow::Result<PathBuf> {
    let data_dir = dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine local data directory"))?;

    Ok(data_dir.join("jobboard").join("jobs.sqlite"))
}

/// Pick the database file: CLI override, then config, then the platform default
pub fn resolve_db_path(
    cli_override: Option<&Path>,
    storage: &StorageConfig,
) -> anyhow::Result<PathBuf> {
    match cli_override.or(storage.db_path.as_deref()) {
        Some(path) => Ok(path.to_path_buf()),
        None => get_db_path(),
    }
}

/// Open the database (running migrations)
pub fn initialize_database(db_path: &Path) -> anyhow::Result<Arc<Database>> {
    let db = Database::new(db_path)?;
    tracing::info!("Database initialized at: {}", db.path.display());
    Ok(Arc::new(db))
}

/// Build the job repository selected by the storage config
pub fn open_repository(
    storage: &StorageConfig,
    cli_db_path: Option<&Path>,
) -> anyhow::Result<Arc<dyn JobRepository>> {
    tracing::info!(backend = storage.backend.as_str(), "Opening job repository");
    match storage.backend {
        StorageBackend::Memory => {
            let repo = InMemoryJobRepository::from_fixture()?;
            tracing::info!("Serving jobs from the bundled fixture");
            Ok(Arc::new(repo))
        }
        StorageBackend::Sqlite => {
            let db_path = resolve_db_path(cli_db_path, storage)?;
            let db = initialize_database(&db_path)?;
            Ok(Arc::new(SqliteJobRepository::new(db.async_connection.clone())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_path_wins_over_config() {
        let storage = StorageConfig {
            backend: StorageBackend::Sqlite,
            db_path: Some(PathBuf::from("/from/config.sqlite")),
        };

        let cli = PathBuf::from("/from/cli.sqlite");
        assert_eq!(resolve_db_path(Some(&cli), &storage).unwrap(), cli);
        assert_eq!(
            resolve_db_path(None, &storage).unwrap(),
            PathBuf::from("/from/config.sqlite")
        );
    }

    #[test]
    fn test_initialize_database_keeps_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jobs.sqlite");

        let db = initialize_database(&path).unwrap();
        assert_eq!(db.path, path);
    }

    #[tokio::test]
    async fn test_open_sqlite_repository_creates_schema() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("jobs.sqlite");
        let storage = StorageConfig::default();

        let repo = open_repository(&storage, Some(&path)).unwrap();
        assert_eq!(repo.name(), storage.backend.as_str());
        assert!(path.exists());
        assert!(repo.list_jobs().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_open_memory_repository() {
        let storage = StorageConfig {
            backend: StorageBackend::Memory,
            db_path: None,
        };

        let repo = open_repository(&storage, None).unwrap();
        assert_eq!(repo.name(), storage.backend.as_str());
        assert_eq!(repo.list_jobs().await.unwrap().len(), 12);
    }
}
