use super::JobError;
use shared_types::Job;

/// Find a job whose id, written out as a string, equals `id`.
pub fn find_by_id<'a>(jobs: &'a [Job], id: &str) -> Option<&'a Job> {
    jobs.iter().find(|job| job.id.to_string() == id)
}

/// Apply the visibility rule to a lookup result. Missing and non-open jobs
/// produce the same `NotFound`.
pub fn resolve(candidate: Option<Job>) -> Result<Job, JobError> {
    match candidate {
        Some(job) if job.status.is_visible() => Ok(job),
        _ => Err(JobError::NotFound),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::JobStatus;

    fn job(id: i64, status: JobStatus) -> Job {
        Job {
            id,
            title: "Backend Engineer".to_string(),
            company_name: "Acme".to_string(),
            location: "Remote".to_string(),
            level: "Senior".to_string(),
            employment_type: "Full-time".to_string(),
            salary_min: None,
            salary_max: None,
            salary_min_num: None,
            salary_max_num: None,
            status,
            description: String::new(),
            requirements: vec![],
            benefits: vec![],
            created_at: 0,
            updated_at: 0,
        }
    }

    #[test]
    fn test_find_compares_as_strings() {
        let jobs = vec![job(1, JobStatus::Open), job(12, JobStatus::Open)];
        assert_eq!(find_by_id(&jobs, "12").map(|j| j.id), Some(12));
        assert!(find_by_id(&jobs, "012").is_none());
        assert!(find_by_id(&jobs, "abc").is_none());
    }

    #[test]
    fn test_resolve_open_job() {
        let resolved = resolve(Some(job(1, JobStatus::Open))).unwrap();
        assert_eq!(resolved.id, 1);
    }

    #[test]
    fn test_hidden_and_missing_look_the_same() {
        for status in [JobStatus::Closed, JobStatus::Filled] {
            let err = resolve(Some(job(2, status))).unwrap_err();
            assert!(matches!(err, JobError::NotFound));
        }
        assert!(matches!(resolve(None), Err(JobError::NotFound)));
    }
}
