//! Job search and detail lookup over an injected [`JobRepository`].
//!
//! The listing path runs [`FilterCriteria`] then [`PageRequest`] over whatever
//! the repository returns; the detail path applies the same visibility rule
//! through [`detail::resolve`]. Neither path writes anything.

pub mod detail;
pub mod error;
pub mod filter;
pub mod pagination;
pub mod repository;

pub use error::JobError;
pub use filter::FilterCriteria;
pub use pagination::PageRequest;
pub use repository::{InMemoryJobRepository, JobRepository, SqliteJobRepository};

use crate::config::SearchConfig;
use shared_types::{Job, JobQuery, JobsPage};
use std::sync::Arc;

/// Filter and paginate `jobs` for `query`.
pub fn run_search(jobs: Vec<Job>, query: &JobQuery, config: &SearchConfig) -> JobsPage {
    let criteria = FilterCriteria::from_query(query);
    let page_request = PageRequest::from_query(query, config);
    page_request.paginate(criteria.apply(jobs))
}

#[derive(Clone)]
pub struct JobSearch {
    repository: Arc<dyn JobRepository>,
    config: SearchConfig,
}

impl JobSearch {
    pub fn new(repository: Arc<dyn JobRepository>, config: SearchConfig) -> Self {
        Self { repository, config }
    }

    pub fn backend_name(&self) -> &'static str {
        self.repository.name()
    }

    pub async fn ping(&self) -> anyhow::Result<()> {
        self.repository.ping().await
    }

    pub async fn search(&self, query: &JobQuery) -> Result<JobsPage, JobError> {
        let jobs = self.repository.list_jobs().await?;
        let candidates = jobs.len();

        let page = run_search(jobs, query, &self.config);
        tracing::debug!(
            candidates,
            total_items = page.meta.total_items,
            page = page.meta.page,
            size = page.meta.size,
            "Job search completed"
        );

        Ok(page)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Job, JobError> {
        let candidate = self.repository.find_job(id).await?;
        let resolved = detail::resolve(candidate);
        if resolved.is_err() {
            tracing::debug!(job_id = id, "Job not visible or missing");
        }
        resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use shared_types::JobStatus;

    fn job(id: i64, title: &str, status: JobStatus) -> Job {
        Job {
            id,
            title: title.to_string(),
            company_name: "Acme".to_string(),
            location: "Ho Chi Minh".to_string(),
            level: "Senior".to_string(),
            employment_type: "Full-time".to_string(),
            salary_min: Some("$1,000".to_string()),
            salary_max: Some("$2,000".to_string()),
            salary_min_num: Some(1000),
            salary_max_num: Some(2000),
            status,
            description: String::new(),
            requirements: vec![],
            benefits: vec![],
            created_at: 0,
            updated_at: 0,
        }
    }

    fn service(jobs: Vec<Job>) -> JobSearch {
        JobSearch::new(
            Arc::new(InMemoryJobRepository::new(jobs)),
            SearchConfig::default(),
        )
    }

    struct BrokenRepository;

    #[async_trait]
    impl JobRepository for BrokenRepository {
        fn name(&self) -> &'static str {
            "broken"
        }

        async fn list_jobs(&self) -> anyhow::Result<Vec<Job>> {
            Err(anyhow::anyhow!("connection reset"))
        }
    }

    #[tokio::test]
    async fn test_keyword_search_skips_closed() {
        let search = service(vec![
            job(1, "Backend Engineer", JobStatus::Open),
            job(2, "Backend Lead", JobStatus::Closed),
        ]);
        let query = JobQuery {
            q: Some("backend".to_string()),
            ..JobQuery::default()
        };

        let page = search.search(&query).await.unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, 1);
        assert_eq!(page.meta.total_items, 1);
        assert_eq!(page.meta.total_pages, 1);
    }

    #[tokio::test]
    async fn test_second_page_of_three() {
        let search = service(vec![
            job(1, "A", JobStatus::Open),
            job(2, "B", JobStatus::Open),
            job(3, "C", JobStatus::Open),
        ]);
        let query = JobQuery {
            page: Some("2".to_string()),
            size: Some("1".to_string()),
            ..JobQuery::default()
        };

        let page = search.search(&query).await.unwrap();
        assert_eq!(page.items.iter().map(|j| j.id).collect::<Vec<_>>(), vec![2]);
        assert_eq!(page.meta.total_pages, 3);
    }

    #[test]
    fn test_large_page_returns_every_match() {
        let jobs = (1..=150).map(|id| job(id, "Engineer", JobStatus::Open)).collect();
        let query = JobQuery {
            size: Some("150".to_string()),
            ..JobQuery::default()
        };

        let page = run_search(jobs, &query, &SearchConfig::default());
        assert_eq!(page.items.len(), 150);
        assert_eq!(page.meta.size, 150);
        assert_eq!(page.meta.total_pages, 1);
    }

    #[test]
    fn test_leading_space_in_keyword_narrows() {
        let jobs = vec![
            job(1, "Engineering Lead", JobStatus::Open),
            job(2, "Senior Engineer", JobStatus::Open),
        ];
        let query = JobQuery {
            q: Some(" engineer".to_string()),
            ..JobQuery::default()
        };

        let page = run_search(jobs, &query, &SearchConfig::default());
        assert_eq!(page.items.iter().map(|j| j.id).collect::<Vec<_>>(), vec![2]);
        assert_eq!(page.meta.total_items, 1);
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let search = service(vec![
            job(1, "Backend Engineer", JobStatus::Open),
            job(2, "Backend Lead", JobStatus::Closed),
        ]);

        assert_eq!(search.get_by_id("1").await.unwrap().id, 1);
        assert!(matches!(search.get_by_id("2").await, Err(JobError::NotFound)));
        assert!(matches!(search.get_by_id("42").await, Err(JobError::NotFound)));
    }

    #[tokio::test]
    async fn test_repository_failure_is_internal() {
        let search = JobSearch::new(Arc::new(BrokenRepository), SearchConfig::default());

        assert!(matches!(
            search.search(&JobQuery::default()).await,
            Err(JobError::Internal(_))
        ));
        assert!(matches!(search.get_by_id("1").await, Err(JobError::Internal(_))));
        assert!(search.ping().await.is_ok());
    }
}
