use thiserror::Error;
use uuid::Uuid;

use crate::models::{JobPosting, JobType};

/// Which slot of the canonical pair the acting posting occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairSlot {
    Employer,
    Worker,
}

/// Canonical (employer, worker) ordering of a posting pair.
///
/// The seeking_worker posting always lands in the employer slot, so relation
/// lookups are independent of which side initiated the interest. Apply this
/// before every interest-relation store access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanonicalPair {
    pub employer_job_id: Uuid,
    pub worker_job_id: Uuid,
    pub acting_slot: PairSlot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PairingError {
    #[error("both postings are {0:?}; interest requires one employer and one worker posting")]
    SameSide(JobType),
}

/// Normalize an (acting, target) posting pair into canonical order.
///
/// Rejects pairs where both postings are on the same side of the market;
/// such a relation would be degenerate and can never match.
pub fn canonical_pair(acting: &JobPosting, target: &JobPosting) -> Result<CanonicalPair, PairingError> {
    if acting.job_type == target.job_type {
        return Err(PairingError::SameSide(acting.job_type));
    }

    Ok(match acting.job_type {
        JobType::SeekingWorker => CanonicalPair {
            employer_job_id: acting.id,
            worker_job_id: target.id,
            acting_slot: PairSlot::Employer,
        },
        JobType::SeekingWork => CanonicalPair {
            employer_job_id: target.id,
            worker_job_id: acting.id,
            acting_slot: PairSlot::Worker,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExperienceLevel, JobCategory};
    use chrono::Utc;

    fn posting(job_type: JobType) -> JobPosting {
        JobPosting {
            id: Uuid::new_v4(),
            job_type,
            category: JobCategory::Electrician,
            name: "Test".to_string(),
            phone: "555-0100".to_string(),
            hourly_rate: 35.0,
            experience_level: ExperienceLevel::Intermediate,
            description: String::new(),
            location: "Berlin".to_string(),
            created_at: Utc::now(),
            is_active: true,
        }
    }

    #[test]
    fn test_employer_acting_keeps_employer_slot() {
        let employer = posting(JobType::SeekingWorker);
        let worker = posting(JobType::SeekingWork);

        let pair = canonical_pair(&employer, &worker).unwrap();
        assert_eq!(pair.employer_job_id, employer.id);
        assert_eq!(pair.worker_job_id, worker.id);
        assert_eq!(pair.acting_slot, PairSlot::Employer);
    }

    #[test]
    fn test_worker_acting_swaps_into_canonical_order() {
        let employer = posting(JobType::SeekingWorker);
        let worker = posting(JobType::SeekingWork);

        let pair = canonical_pair(&worker, &employer).unwrap();
        assert_eq!(pair.employer_job_id, employer.id);
        assert_eq!(pair.worker_job_id, worker.id);
        assert_eq!(pair.acting_slot, PairSlot::Worker);
    }

    #[test]
    fn test_canonical_order_is_direction_independent() {
        let employer = posting(JobType::SeekingWorker);
        let worker = posting(JobType::SeekingWork);

        let forward = canonical_pair(&employer, &worker).unwrap();
        let reverse = canonical_pair(&worker, &employer).unwrap();
        assert_eq!(forward.employer_job_id, reverse.employer_job_id);
        assert_eq!(forward.worker_job_id, reverse.worker_job_id);
    }

    #[test]
    fn test_same_side_pairs_rejected() {
        let a = posting(JobType::SeekingWorker);
        let b = posting(JobType::SeekingWorker);
        assert_eq!(
            canonical_pair(&a, &b),
            Err(PairingError::SameSide(JobType::SeekingWorker))
        );

        let c = posting(JobType::SeekingWork);
        let d = posting(JobType::SeekingWork);
        assert_eq!(
            canonical_pair(&c, &d),
            Err(PairingError::SameSide(JobType::SeekingWork))
        );
    }
}
