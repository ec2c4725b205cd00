use crate::database::{jobs, AsyncDbConnection};
use anyhow::{Context, Result};
use shared_types::Job;

/// Insert `fixture` into the jobs table inside one transaction.
///
/// A table that already holds rows is left alone unless `force` is set, in
/// which case it is cleared first. Any failure rolls the whole batch back.
/// Returns the number of rows inserted.
pub async fn seed_jobs(conn: AsyncDbConnection, fixture: &[Job], force: bool) -> Result<usize> {
    let mut conn = conn.lock().await?;
    let tx = conn.transaction().context("Failed to begin seed transaction")?;

    let existing = jobs::count_jobs(&tx)?;
    if existing > 0 && !force {
        tracing::info!("Jobs table already holds {} rows, skipping seed", existing);
        return Ok(0);
    }

    if existing > 0 {
        tx.execute("DELETE FROM jobs", [])?;
        tracing::info!("Cleared {} existing jobs before reseeding", existing);
    }

    for job in fixture {
        jobs::insert_job(&tx, job)
            .with_context(|| format!("Failed to insert job {} ({})", job.id, job.title))?;
    }

    tx.commit().context("Failed to commit seed transaction")?;
    tracing::info!("Seeded {} jobs", fixture.len());

    Ok(fixture.len())
}
