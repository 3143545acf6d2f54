use std::collections::HashSet;
use uuid::Uuid;

use crate::models::{InterestRelation, JobPosting};

/// Collect the posting ids already linked to `job_id` by any interest
/// relation, mutual or one-sided. These have been surfaced once and are
/// never offered again (swipe-once policy).
pub fn already_seen_ids(relations: &[InterestRelation], job_id: Uuid) -> HashSet<Uuid> {
    relations
        .iter()
        .map(|rel| {
            if rel.employer_job_id == job_id {
                rel.worker_job_id
            } else {
                rel.employer_job_id
            }
        })
        .collect()
}

/// Filter a raw candidate pool down to the postings that may be offered to
/// `source`: active, opposite side, same category, not the source itself,
/// and not already linked by an interest relation. Newest first, capped at
/// `limit`.
pub fn filter_candidates(
    source: &JobPosting,
    pool: Vec<JobPosting>,
    excluded: &HashSet<Uuid>,
    limit: usize,
) -> Vec<JobPosting> {
    let opposite = source.job_type.opposite();

    let mut candidates: Vec<JobPosting> = pool
        .into_iter()
        .filter(|posting| posting.is_active)
        .filter(|posting| posting.job_type == opposite)
        .filter(|posting| posting.category == source.category)
        .filter(|posting| posting.id != source.id)
        .filter(|posting| !excluded.contains(&posting.id))
        .collect();

    candidates.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    candidates.truncate(limit);
    candidates
}
