//! PostgreSQL access: pool setup, schema bootstrap, and the two queries
//! the service needs.
//!
//! Survey rows are written once at submission time and only ever read
//! back for the dashboard; there are no updates or deletes.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::models::{SurveyRow, SurveySubmission};

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS survey_responses (
    id           SERIAL PRIMARY KEY,
    full_name    TEXT NOT NULL,
    is_anonymous BOOLEAN NOT NULL DEFAULT FALSE,
    class_name   TEXT NOT NULL,
    gender       TEXT NOT NULL,
    q1           INTEGER NOT NULL,
    q2           INTEGER NOT NULL,
    q3           INTEGER NOT NULL,
    q4           INTEGER NOT NULL,
    q5           INTEGER NOT NULL,
    q6           INTEGER NOT NULL,
    q7           INTEGER NOT NULL,
    q8           INTEGER NOT NULL,
    open_ended   TEXT,
    created_at   TIMESTAMPTZ NOT NULL DEFAULT now()
)
"#;

/// Build the connection pool.
pub async fn connect(database_url: &str) -> Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
        .context("Failed to connect to PostgreSQL")
}

/// Create the survey table if it does not exist yet.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(SCHEMA)
        .execute(pool)
        .await
        .context("Failed to create survey_responses table")?;
    Ok(())
}

/// Insert one survey response and return its generated id.
///
/// `full_name` is the already-resolved display name: the anonymity
/// placeholder when the student opted in, the submitted name otherwise.
/// `created_at` is assigned by the database.
pub async fn insert_response(
    pool: &PgPool,
    full_name: &str,
    is_anonymous: bool,
    data: &SurveySubmission,
) -> Result<i32, sqlx::Error> {
    let (id,): (i32,) = sqlx::query_as(
        r#"INSERT INTO survey_responses
           (full_name, is_anonymous, class_name, gender, q1, q2, q3, q4, q5, q6, q7, q8, open_ended)
           VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
           RETURNING id"#,
    )
    .bind(full_name)
    .bind(is_anonymous)
    .bind(&data.class_name)
    .bind(&data.gender)
    .bind(data.q1)
    .bind(data.q2)
    .bind(data.q3)
    .bind(data.q4)
    .bind(data.q5)
    .bind(data.q6)
    .bind(data.q7)
    .bind(data.q8)
    .bind(&data.open_ended)
    .fetch_one(pool)
    .await?;

    Ok(id)
}

/// All responses created within the inclusive UTC range, oldest first.
pub async fn responses_between(
    pool: &PgPool,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<Vec<SurveyRow>, sqlx::Error> {
    sqlx::query_as::<_, SurveyRow>(
        r#"SELECT id, full_name, is_anonymous, class_name, gender,
                  q1, q2, q3, q4, q5, q6, q7, q8, open_ended, created_at
           FROM survey_responses
           WHERE created_at BETWEEN $1 AND $2
           ORDER BY created_at ASC"#,
    )
    .bind(start)
    .bind(end)
    .fetch_all(pool)
    .await
}
