// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{EnrichedMatch, ExperienceLevel, InterestRelation, JobCategory, JobPosting, JobType};
pub use requests::{CreateJobRequest, ListJobsQuery, ShowInterestRequest};
pub use responses::{CategoryEntry, ErrorResponse, HealthResponse, InterestResponse};
