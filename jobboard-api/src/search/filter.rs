use shared_types::{Job, JobQuery};

/// Filters parsed out of a [`JobQuery`]. Absent, empty or unparseable values
/// become `None` and leave the candidate set untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Lower-cased keyword matched against titles, whitespace included
    pub keyword: Option<String>,
    pub location: Option<String>,
    pub level: Option<String>,
    pub employment_type: Option<String>,
    /// Smallest whole salary that satisfies the floor
    pub salary_min: Option<i128>,
    /// Largest whole salary that satisfies the ceiling
    pub salary_max: Option<i128>,
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value.filter(|v| !v.is_empty()).cloned()
}

/// Salaries are whole numbers, so a bound is kept as the nearest whole value
/// on its inclusive side. Whole inputs are parsed exactly; fractional ones go
/// through `f64` and are rounded with `round`. Out-of-range `f64` values
/// saturate past every `i64`.
fn parse_bound(value: Option<&String>, round: fn(f64) -> f64) -> Option<i128> {
    let value = value?.trim();
    if let Ok(whole) = value.parse::<i128>() {
        return Some(whole);
    }
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| round(v) as i128)
}

impl FilterCriteria {
    pub fn from_query(query: &JobQuery) -> Self {
        let keyword = query
            .q
            .as_deref()
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase);

        Self {
            keyword,
            location: non_empty(query.location.as_ref()),
            level: non_empty(query.level.as_ref()),
            employment_type: non_empty(query.employment_type.as_ref()),
            salary_min: parse_bound(query.salary_min.as_ref(), f64::ceil),
            salary_max: parse_bound(query.salary_max.as_ref(), f64::floor),
        }
    }

    /// Narrow `jobs` step by step: keyword, location, level, employment type,
    /// salary floor, salary ceiling, then visibility. Input order is kept.
    pub fn apply(&self, mut jobs: Vec<Job>) -> Vec<Job> {
        if let Some(keyword) = &self.keyword {
            jobs.retain(|job| job.title.to_lowercase().contains(keyword.as_str()));
        }
        if let Some(location) = &self.location {
            jobs.retain(|job| &job.location == location);
        }
        if let Some(level) = &self.level {
            jobs.retain(|job| &job.level == level);
        }
        if let Some(employment_type) = &self.employment_type {
            jobs.retain(|job| &job.employment_type == employment_type);
        }
        if let Some(floor) = self.salary_min {
            jobs.retain(|job| job.salary_min_num.is_some_and(|min| i128::from(min) >= floor));
        }
        if let Some(ceiling) = self.salary_max {
            jobs.retain(|job| job.salary_max_num.is_some_and(|max| i128::from(max) <= ceiling));
        }
        jobs.retain(|job| job.status.is_visible());

        jobs
    }
}
