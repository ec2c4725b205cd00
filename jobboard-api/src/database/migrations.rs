use rusqlite::Connection;

/// Run all database migrations
pub fn run_migrations(conn: &Connection) -> anyhow::Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS jobs (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title VARCHAR NOT NULL,
            company_name VARCHAR NOT NULL,
            location VARCHAR NOT NULL,
            level VARCHAR NOT NULL,
            employment_type VARCHAR NOT NULL,
            salary_min VARCHAR,
            salary_max VARCHAR,
            salary_min_num BIGINT,
            salary_max_num BIGINT,
            status VARCHAR NOT NULL DEFAULT 'OPEN' CHECK (status IN ('OPEN', 'CLOSED', 'FILLED')),
            description VARCHAR NOT NULL,
            requirements VARCHAR NOT NULL DEFAULT '[]',
            benefits VARCHAR NOT NULL DEFAULT '[]',
            created_at BIGINT NOT NULL,
            updated_at BIGINT NOT NULL
        )",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_jobs_status ON jobs(status)",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_jobs_status_location ON jobs(status, location)",
        [],
    )?;

    tracing::debug!("Database migrations applied");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_are_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        run_migrations(&conn).unwrap();

        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'jobs'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_status_check_constraint() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();

        let result = conn.execute(
            "INSERT INTO jobs (title, company_name, location, level, employment_type,
                               status, description, created_at, updated_at)
             VALUES ('Dev', 'Acme', 'Remote', 'Junior', 'Full-time', 'ARCHIVED', '', 0, 0)",
            [],
        );
        assert!(result.is_err());
    }
}
