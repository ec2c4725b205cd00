use crate::database::AsyncDbConnection;
use anyhow::Result;
use rusqlite::{Connection, OptionalExtension, Row};
use shared_types::{Job, JobStatus};

const JOB_COLUMNS: &str = "id, title, company_name, location, level, employment_type,
        salary_min, salary_max, salary_min_num, salary_max_num, status,
        description, requirements, benefits, created_at, updated_at";

fn job_from_row(row: &Row) -> rusqlite::Result<Job> {
    let status: String = row.get(10)?;
    let status = status.parse::<JobStatus>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(10, rusqlite::types::Type::Text, Box::new(e))
    })?;
    let requirements_json: String = row.get(12)?;
    let benefits_json: String = row.get(13)?;

    Ok(Job {
        id: row.get(0)?,
        title: row.get(1)?,
        company_name: row.get(2)?,
        location: row.get(3)?,
        level: row.get(4)?,
        employment_type: row.get(5)?,
        salary_min: row.get(6)?,
        salary_max: row.get(7)?,
        salary_min_num: row.get(8)?,
        salary_max_num: row.get(9)?,
        status,
        description: row.get(11)?,
        requirements: serde_json::from_str(&requirements_json).unwrap_or_default(),
        benefits: serde_json::from_str(&benefits_json).unwrap_or_default(),
        created_at: row.get(14)?,
        updated_at: row.get(15)?,
    })
}

/// Insert a job keeping its id. Zero timestamps are replaced with now.
pub fn insert_job(conn: &Connection, job: &Job) -> Result<i64> {
    let now = chrono::Utc::now().timestamp();
    let created_at = if job.created_at == 0 { now } else { job.created_at };
    let updated_at = if job.updated_at == 0 { created_at } else { job.updated_at };

    let requirements_json = serde_json::to_string(&job.requirements)?;
    let benefits_json = serde_json::to_string(&job.benefits)?;

    let id: i64 = conn.query_row(
        "INSERT INTO jobs
         (id, title, company_name, location, level, employment_type,
          salary_min, salary_max, salary_min_num, salary_max_num, status,
          description, requirements, benefits, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
         RETURNING id",
        rusqlite::params![
            job.id,
            &job.title,
            &job.company_name,
            &job.location,
            &job.level,
            &job.employment_type,
            job.salary_min.as_ref(),
            job.salary_max.as_ref(),
            job.salary_min_num,
            job.salary_max_num,
            job.status.as_str(),
            &job.description,
            &requirements_json,
            &benefits_json,
            created_at,
            updated_at
        ],
        |row| row.get(0),
    )?;

    Ok(id)
}

pub fn count_jobs(conn: &Connection) -> Result<i64> {
    let count = conn.query_row("SELECT COUNT(*) FROM jobs", [], |row| row.get(0))?;
    Ok(count)
}

/// List every job in id order, whatever its status
pub async fn list_jobs(conn: AsyncDbConnection) -> Result<Vec<Job>> {
    let conn = conn.lock().await?;

    let mut stmt = conn.prepare(&format!("SELECT {JOB_COLUMNS} FROM jobs ORDER BY id ASC"))?;
    let jobs = stmt
        .query_map([], job_from_row)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(jobs)
}

/// Look a job up by the textual form of its id, whatever its status
pub async fn get_job_by_id(conn: AsyncDbConnection, id: &str) -> Result<Option<Job>> {
    let conn = conn.lock().await?;

    let job = conn
        .query_row(
            &format!("SELECT {JOB_COLUMNS} FROM jobs WHERE CAST(id AS TEXT) = ?"),
            [id],
            job_from_row,
        )
        .optional()?;

    Ok(job)
}
