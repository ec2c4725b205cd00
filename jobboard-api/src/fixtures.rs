//! Job listings bundled with the binary, used to seed a fresh database and to
//! back the `memory` storage mode.

use anyhow::Context;
use shared_types::Job;

pub const JOBS_JSON: &str = include_str!("../fixtures/jobs.json");

pub fn load_jobs() -> anyhow::Result<Vec<Job>> {
    serde_json::from_str(JOBS_JSON).context("Failed to parse bundled job fixture")
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::JobStatus;
    use std::collections::HashSet;

    #[test]
    fn test_fixture_parses_with_unique_ids() {
        let jobs = load_jobs().unwrap();
        assert_eq!(jobs.len(), 12);

        let ids: HashSet<i64> = jobs.iter().map(|j| j.id).collect();
        assert_eq!(ids.len(), jobs.len());
    }

    #[test]
    fn test_fixture_mixes_statuses() {
        let jobs = load_jobs().unwrap();
        let open = jobs.iter().filter(|j| j.status == JobStatus::Open).count();
        assert_eq!(open, 9);
        assert!(jobs.iter().any(|j| j.status == JobStatus::Closed));
        assert!(jobs.iter().any(|j| j.status == JobStatus::Filled));
    }
}
