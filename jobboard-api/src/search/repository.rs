use crate::database::{jobs as db, AsyncDbConnection};
use crate::fixtures;
use anyhow::Result;
use async_trait::async_trait;
use shared_types::Job;
use std::sync::Arc;

use super::detail;

/// Read-only access to the job collection searched by [`super::JobSearch`].
///
/// Implementations return every job regardless of status; visibility is
/// enforced by the search pipeline, not by storage.
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Short backend name reported by the health probe
    fn name(&self) -> &'static str;

    /// All jobs, in a stable order
    async fn list_jobs(&self) -> Result<Vec<Job>>;

    /// The job whose id, as a string, equals `id`
    async fn find_job(&self, id: &str) -> Result<Option<Job>> {
        let jobs = self.list_jobs().await?;
        Ok(detail::find_by_id(&jobs, id).cloned())
    }

    /// Cheap reachability check
    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

pub struct InMemoryJobRepository {
    jobs: Arc<Vec<Job>>,
}

impl InMemoryJobRepository {
    pub fn new(jobs: Vec<Job>) -> Self {
        Self {
            jobs: Arc::new(jobs),
        }
    }

    pub fn from_fixture() -> Result<Self> {
        Ok(Self::new(fixtures::load_jobs()?))
    }
}

#[async_trait]
impl JobRepository for InMemoryJobRepository {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn list_jobs(&self) -> Result<Vec<Job>> {
        Ok(self.jobs.as_ref().clone())
    }

    async fn find_job(&self, id: &str) -> Result<Option<Job>> {
        Ok(detail::find_by_id(&self.jobs, id).cloned())
    }
}

pub struct SqliteJobRepository {
    conn: AsyncDbConnection,
}

impl SqliteJobRepository {
    pub fn new(conn: AsyncDbConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl JobRepository for SqliteJobRepository {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    async fn list_jobs(&self) -> Result<Vec<Job>> {
        db::list_jobs(self.conn.clone()).await
    }

    async fn find_job(&self, id: &str) -> Result<Option<Job>> {
        db::get_job_by_id(self.conn.clone(), id).await
    }

    async fn ping(&self) -> Result<()> {
        let conn = self.conn.lock().await?;
        conn.query_row("SELECT 1", [], |_| Ok(()))?;
        Ok(())
    }
}
