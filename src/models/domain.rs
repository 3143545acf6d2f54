use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which side of the market a posting represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "job_type", rename_all = "snake_case")]
pub enum JobType {
    /// Employer looking for workers
    SeekingWorker,
    /// Worker looking for jobs
    SeekingWork,
}

impl JobType {
    /// The side a posting of this type gets matched against
    pub fn opposite(self) -> JobType {
        match self {
            JobType::SeekingWorker => JobType::SeekingWork,
            JobType::SeekingWork => JobType::SeekingWorker,
        }
    }
}

/// Trade categories a posting can belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "job_category", rename_all = "snake_case")]
pub enum JobCategory {
    Handyman,
    Electrician,
    Plumber,
    Painter,
    Allrounder,
}

impl JobCategory {
    pub const ALL: [JobCategory; 5] = [
        JobCategory::Handyman,
        JobCategory::Electrician,
        JobCategory::Plumber,
        JobCategory::Painter,
        JobCategory::Allrounder,
    ];

    /// Wire value, matching the serde representation
    pub fn value(self) -> &'static str {
        match self {
            JobCategory::Handyman => "handyman",
            JobCategory::Electrician => "electrician",
            JobCategory::Plumber => "plumber",
            JobCategory::Painter => "painter",
            JobCategory::Allrounder => "allrounder",
        }
    }

    /// Human-readable label derived from the wire value
    pub fn label(self) -> String {
        self.value()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Self-assessed experience, ordered Beginner < Intermediate < Expert.
/// Serialized as its numeric level (1-3) on the wire and in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ExperienceLevel {
    Beginner = 1,
    Intermediate = 2,
    Expert = 3,
}

impl TryFrom<u8> for ExperienceLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ExperienceLevel::Beginner),
            2 => Ok(ExperienceLevel::Intermediate),
            3 => Ok(ExperienceLevel::Expert),
            other => Err(format!("invalid experience level: {}", other)),
        }
    }
}

impl From<ExperienceLevel> for u8 {
    fn from(value: ExperienceLevel) -> Self {
        value as u8
    }
}

/// A single employer-or-worker listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: Uuid,
    pub job_type: JobType,
    pub category: JobCategory,
    pub name: String,
    pub phone: String,
    pub hourly_rate: f64,
    pub experience_level: ExperienceLevel,
    pub description: String,
    pub location: String,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

/// Per-pair record of expressed interest between an employer posting and a
/// worker posting. `employer_job_id` always refers to a seeking_worker
/// posting and `worker_job_id` to a seeking_work posting, regardless of
/// which side acted first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterestRelation {
    pub id: Uuid,
    pub employer_job_id: Uuid,
    pub worker_job_id: Uuid,
    pub employer_interested: bool,
    pub worker_interested: bool,
    pub is_matched: bool,
    pub created_at: DateTime<Utc>,
    pub matched_at: Option<DateTime<Utc>>,
}

/// A confirmed match enriched with both sides' posting details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichedMatch {
    pub match_id: Uuid,
    pub matched_at: DateTime<Utc>,
    pub employer: JobPosting,
    pub worker: JobPosting,
}
