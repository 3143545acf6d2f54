use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::domain::{ExperienceLevel, JobCategory, JobType};

/// Request to create a job posting
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateJobRequest {
    pub job_type: JobType,
    pub category: JobCategory,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub phone: String,
    #[validate(range(min = 0.0))]
    pub hourly_rate: f64,
    pub experience_level: ExperienceLevel,
    pub description: String,
    pub location: String,
}

/// Query filters for listing postings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListJobsQuery {
    pub job_type: Option<JobType>,
    pub category: Option<JobCategory>,
}

/// Request to express interest in another posting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowInterestRequest {
    pub job_id: Uuid,
    pub interested_in_job_id: Uuid,
}
