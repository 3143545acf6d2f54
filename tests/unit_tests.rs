// Unit tests for JobSwipe core logic

use chrono::{Duration, Utc};
use jobswipe::core::{canonical_pair, filter_candidates, merge_interest, InterestFlags, PairSlot, PairingError};
use jobswipe::models::{ExperienceLevel, InterestRelation, JobCategory, JobPosting, JobType};
use std::collections::HashSet;
use uuid::Uuid;

fn posting(job_type: JobType, category: JobCategory) -> JobPosting {
    JobPosting {
        id: Uuid::new_v4(),
        job_type,
        category,
        name: "Test".to_string(),
        phone: "555-0100".to_string(),
        hourly_rate: 30.0,
        experience_level: ExperienceLevel::Beginner,
        description: String::new(),
        location: "Cologne".to_string(),
        created_at: Utc::now(),
        is_active: true,
    }
}

fn relation_for(pair_employer: Uuid, pair_worker: Uuid, flags: InterestFlags) -> InterestRelation {
    InterestRelation {
        id: Uuid::new_v4(),
        employer_job_id: pair_employer,
        worker_job_id: pair_worker,
        employer_interested: flags.employer_interested,
        worker_interested: flags.worker_interested,
        is_matched: flags.is_matched(),
        created_at: Utc::now(),
        matched_at: None,
    }
}

#[test]
fn test_canonical_pair_employer_slot_fixed() {
    let employer = posting(JobType::SeekingWorker, JobCategory::Electrician);
    let worker = posting(JobType::SeekingWork, JobCategory::Electrician);

    let from_employer = canonical_pair(&employer, &worker).unwrap();
    let from_worker = canonical_pair(&worker, &employer).unwrap();

    assert_eq!(from_employer.employer_job_id, employer.id);
    assert_eq!(from_worker.employer_job_id, employer.id);
    assert_eq!(from_employer.acting_slot, PairSlot::Employer);
    assert_eq!(from_worker.acting_slot, PairSlot::Worker);
}

#[test]
fn test_same_side_pair_is_invalid() {
    let a = posting(JobType::SeekingWork, JobCategory::Painter);
    let b = posting(JobType::SeekingWork, JobCategory::Painter);

    assert_eq!(
        canonical_pair(&a, &b),
        Err(PairingError::SameSide(JobType::SeekingWork))
    );
}

#[test]
fn test_interest_flags_single_bit() {
    for slot in [PairSlot::Employer, PairSlot::Worker] {
        let flags = InterestFlags::for_slot(slot);
        assert_ne!(flags.employer_interested, flags.worker_interested);
        assert!(!flags.is_matched());
    }
}

#[test]
fn test_merge_promotes_exactly_once() {
    let employer_flags = InterestFlags::for_slot(PairSlot::Employer);
    let worker_flags = InterestFlags::for_slot(PairSlot::Worker);
    let mut rel = relation_for(Uuid::new_v4(), Uuid::new_v4(), employer_flags);

    assert!(!merge_interest(&mut rel, employer_flags, Utc::now()));
    assert!(merge_interest(&mut rel, worker_flags, Utc::now()));
    assert!(!merge_interest(&mut rel, worker_flags, Utc::now()));
    assert!(rel.is_matched);
}

#[test]
fn test_merge_stamps_matched_at_once() {
    let mut rel = relation_for(
        Uuid::new_v4(),
        Uuid::new_v4(),
        InterestFlags::for_slot(PairSlot::Worker),
    );

    let promote_time = Utc::now();
    merge_interest(&mut rel, InterestFlags::for_slot(PairSlot::Employer), promote_time);
    assert_eq!(rel.matched_at, Some(promote_time));

    merge_interest(
        &mut rel,
        InterestFlags::for_slot(PairSlot::Employer),
        promote_time + Duration::minutes(5),
    );
    assert_eq!(rel.matched_at, Some(promote_time));
}

#[test]
fn test_filter_rejects_wrong_side_and_category() {
    let source = posting(JobType::SeekingWorker, JobCategory::Electrician);

    let pool = vec![
        posting(JobType::SeekingWork, JobCategory::Electrician),
        posting(JobType::SeekingWork, JobCategory::Plumber),
        posting(JobType::SeekingWorker, JobCategory::Electrician),
    ];
    let expected = pool[0].id;

    let result = filter_candidates(&source, pool, &HashSet::new(), 50);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, expected);
}

#[test]
fn test_filter_respects_page_size() {
    let source = posting(JobType::SeekingWork, JobCategory::Handyman);
    let pool: Vec<JobPosting> = (0..80)
        .map(|_| posting(JobType::SeekingWorker, JobCategory::Handyman))
        .collect();

    let result = filter_candidates(&source, pool, &HashSet::new(), 50);
    assert_eq!(result.len(), 50);
}

#[test]
fn test_experience_level_round_trip() {
    for level in [
        ExperienceLevel::Beginner,
        ExperienceLevel::Intermediate,
        ExperienceLevel::Expert,
    ] {
        let raw = u8::from(level);
        assert_eq!(ExperienceLevel::try_from(raw), Ok(level));
    }
}

#[test]
fn test_posting_wire_format() {
    let source = posting(JobType::SeekingWorker, JobCategory::Allrounder);
    let json = serde_json::to_value(&source).unwrap();

    assert_eq!(json["job_type"], "seeking_worker");
    assert_eq!(json["category"], "allrounder");
    assert_eq!(json["experience_level"], 1);
    assert_eq!(json["is_active"], true);
}
