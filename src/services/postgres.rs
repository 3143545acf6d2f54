use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

use crate::core::CanonicalPair;
use crate::models::{CreateJobRequest, InterestRelation, JobCategory, JobPosting, JobType};

/// Errors that can occur when interacting with PostgreSQL
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Corrupt row: {0}")]
    Decode(String),
}

/// Outcome of an express-interest upsert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterestOutcome {
    /// Whether this call created the relation (vs. merging into an existing one)
    pub created: bool,
    /// Matched state after the merge
    pub is_matched: bool,
}

/// PostgreSQL store for job postings and interest relations
///
/// All shared mutable state lives here; request handlers hold no other
/// mutable state. The express-interest merge is a single atomic
/// `INSERT ... ON CONFLICT` statement so that two sides liking each other
/// at the same instant cannot lose an update.
pub struct PostgresClient {
    pool: PgPool,
}

impl PostgresClient {
    /// Create a new PostgreSQL client from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(600))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new PostgreSQL client from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
        _acquire_timeout_secs: Option<u64>,
        _idle_timeout_secs: Option<u64>,
    ) -> Result<Self, StoreError> {
        tracing::info!("Connecting to PostgreSQL with URL: {}", url);

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
        )
        .await
    }

    /// Insert a new posting from a validated draft, assigning id and
    /// creation timestamp. New postings are always active.
    pub async fn create_posting(&self, draft: &CreateJobRequest) -> Result<JobPosting, StoreError> {
        let query = r#"
            INSERT INTO job_postings
                (id, job_type, category, name, phone, hourly_rate, experience_level,
                 description, location, created_at, is_active)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, NOW(), TRUE)
            RETURNING id, job_type, category, name, phone, hourly_rate, experience_level,
                      description, location, created_at, is_active
        "#;

        let row = sqlx::query(query)
            .bind(Uuid::new_v4())
            .bind(draft.job_type)
            .bind(draft.category)
            .bind(&draft.name)
            .bind(&draft.phone)
            .bind(draft.hourly_rate)
            .bind(u8::from(draft.experience_level) as i16)
            .bind(&draft.description)
            .bind(&draft.location)
            .fetch_one(&self.pool)
            .await?;

        let posting = map_posting(&row)?;
        tracing::debug!("Created posting {} ({:?}/{:?})", posting.id, posting.job_type, posting.category);

        Ok(posting)
    }

    /// Fetch a posting by id, if it exists
    pub async fn find_posting(&self, id: Uuid) -> Result<Option<JobPosting>, StoreError> {
        let query = r#"
            SELECT id, job_type, category, name, phone, hourly_rate, experience_level,
                   description, location, created_at, is_active
            FROM job_postings
            WHERE id = $1
        "#;

        let row = sqlx::query(query).bind(id).fetch_optional(&self.pool).await?;

        row.as_ref().map(map_posting).transpose()
    }

    /// Fetch a posting by id, failing with NotFound if absent
    pub async fn get_posting(&self, id: Uuid) -> Result<JobPosting, StoreError> {
        self.find_posting(id)
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("job posting {}", id)))
    }

    /// List active postings, optionally filtered by side and category,
    /// newest first.
    pub async fn list_postings(
        &self,
        job_type: Option<JobType>,
        category: Option<JobCategory>,
    ) -> Result<Vec<JobPosting>, StoreError> {
        let query = r#"
            SELECT id, job_type, category, name, phone, hourly_rate, experience_level,
                   description, location, created_at, is_active
            FROM job_postings
            WHERE is_active
              AND ($1::job_type IS NULL OR job_type = $1)
              AND ($2::job_category IS NULL OR category = $2)
            ORDER BY created_at DESC
            LIMIT 1000
        "#;

        let rows = sqlx::query(query)
            .bind(job_type)
            .bind(category)
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(map_posting).collect()
    }

    /// Candidate pool for a source posting: active postings on the given
    /// side and category, newest first, excluding the source itself and
    /// every already-seen posting. The exclusion runs inside the query so a
    /// posting with a large seen-set still fills its page from the
    /// remaining unseen postings.
    pub async fn list_candidate_pool(
        &self,
        job_type: JobType,
        category: JobCategory,
        exclude_id: Uuid,
        excluded_ids: &[Uuid],
        limit: usize,
    ) -> Result<Vec<JobPosting>, StoreError> {
        let query = r#"
            SELECT id, job_type, category, name, phone, hourly_rate, experience_level,
                   description, location, created_at, is_active
            FROM job_postings
            WHERE is_active
              AND job_type = $1
              AND category = $2
              AND id <> $3
              AND id <> ALL($4)
            ORDER BY created_at DESC
            LIMIT $5
        "#;

        let rows = sqlx::query(query)
            .bind(job_type)
            .bind(category)
            .bind(exclude_id)
            .bind(excluded_ids)
            .bind(limit as i64)
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(map_posting).collect()
    }

    /// Every interest relation touching the posting, on either side
    pub async fn relations_for_posting(&self, job_id: Uuid) -> Result<Vec<InterestRelation>, StoreError> {
        let query = r#"
            SELECT id, employer_job_id, worker_job_id, employer_interested,
                   worker_interested, is_matched, created_at, matched_at
            FROM interest_relations
            WHERE employer_job_id = $1 OR worker_job_id = $1
        "#;

        let rows = sqlx::query(query).bind(job_id).fetch_all(&self.pool).await?;

        rows.iter().map(map_relation).collect()
    }

    /// Record one side's interest for a canonical pair.
    ///
    /// Single atomic upsert-with-monotonic-merge: interest flags are ORed
    /// into the existing relation, `is_matched` is derived from the merged
    /// flags, and `matched_at` is stamped exactly once, on the statement
    /// that promotes the relation to matched. `xmax = 0` distinguishes a
    /// fresh insert from a merge into an existing row.
    pub async fn upsert_interest(&self, pair: &CanonicalPair) -> Result<InterestOutcome, StoreError> {
        let flags = crate::core::InterestFlags::for_slot(pair.acting_slot);

        let query = r#"
            INSERT INTO interest_relations
                (id, employer_job_id, worker_job_id, employer_interested,
                 worker_interested, is_matched, created_at, matched_at)
            VALUES ($1, $2, $3, $4, $5, $4 AND $5, NOW(),
                    CASE WHEN $4 AND $5 THEN NOW() END)
            ON CONFLICT (employer_job_id, worker_job_id) DO UPDATE SET
                employer_interested = interest_relations.employer_interested OR EXCLUDED.employer_interested,
                worker_interested   = interest_relations.worker_interested   OR EXCLUDED.worker_interested,
                is_matched = (interest_relations.employer_interested OR EXCLUDED.employer_interested)
                         AND (interest_relations.worker_interested   OR EXCLUDED.worker_interested),
                matched_at = COALESCE(
                    interest_relations.matched_at,
                    CASE WHEN (interest_relations.employer_interested OR EXCLUDED.employer_interested)
                          AND (interest_relations.worker_interested   OR EXCLUDED.worker_interested)
                         THEN NOW() END)
            RETURNING (xmax = 0) AS created, is_matched
        "#;

        let row = sqlx::query(query)
            .bind(Uuid::new_v4())
            .bind(pair.employer_job_id)
            .bind(pair.worker_job_id)
            .bind(flags.employer_interested)
            .bind(flags.worker_interested)
            .fetch_one(&self.pool)
            .await?;

        let outcome = InterestOutcome {
            created: row.try_get("created")?,
            is_matched: row.try_get("is_matched")?,
        };

        tracing::debug!(
            "Interest upsert {} -> {}: created={}, matched={}",
            pair.employer_job_id,
            pair.worker_job_id,
            outcome.created,
            outcome.is_matched
        );

        Ok(outcome)
    }

    /// All confirmed matches involving the posting, newest match first
    pub async fn matched_relations(&self, job_id: Uuid) -> Result<Vec<InterestRelation>, StoreError> {
        let query = r#"
            SELECT id, employer_job_id, worker_job_id, employer_interested,
                   worker_interested, is_matched, created_at, matched_at
            FROM interest_relations
            WHERE is_matched
              AND (employer_job_id = $1 OR worker_job_id = $1)
            ORDER BY matched_at DESC
        "#;

        let rows = sqlx::query(query).bind(job_id).fetch_all(&self.pool).await?;

        rows.iter().map(map_relation).collect()
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, StoreError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}

fn map_posting(row: &PgRow) -> Result<JobPosting, StoreError> {
    let level: i16 = row.try_get("experience_level")?;
    let experience_level = crate::models::ExperienceLevel::try_from(level as u8)
        .map_err(StoreError::Decode)?;

    Ok(JobPosting {
        id: row.try_get("id")?,
        job_type: row.try_get("job_type")?,
        category: row.try_get("category")?,
        name: row.try_get("name")?,
        phone: row.try_get("phone")?,
        hourly_rate: row.try_get("hourly_rate")?,
        experience_level,
        description: row.try_get("description")?,
        location: row.try_get("location")?,
        created_at: row.try_get("created_at")?,
        is_active: row.try_get("is_active")?,
    })
}

fn map_relation(row: &PgRow) -> Result<InterestRelation, StoreError> {
    Ok(InterestRelation {
        id: row.try_get("id")?,
        employer_job_id: row.try_get("employer_job_id")?,
        worker_job_id: row.try_get("worker_job_id")?,
        employer_interested: row.try_get("employer_interested")?,
        worker_interested: row.try_get("worker_interested")?,
        is_matched: row.try_get("is_matched")?,
        created_at: row.try_get("created_at")?,
        matched_at: row.try_get("matched_at")?,
    })
}
