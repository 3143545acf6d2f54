// Criterion benchmarks for JobSwipe

use chrono::{Duration, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use jobswipe::core::{already_seen_ids, canonical_pair, filter_candidates};
use jobswipe::models::{ExperienceLevel, InterestRelation, JobCategory, JobPosting, JobType};
use std::collections::HashSet;
use uuid::Uuid;

fn create_posting(i: usize) -> JobPosting {
    JobPosting {
        id: Uuid::new_v4(),
        job_type: if i % 2 == 0 { JobType::SeekingWork } else { JobType::SeekingWorker },
        category: JobCategory::ALL[i % JobCategory::ALL.len()],
        name: format!("Contact {}", i),
        phone: "555-0100".to_string(),
        hourly_rate: 25.0 + (i % 40) as f64,
        experience_level: ExperienceLevel::Intermediate,
        description: String::new(),
        location: "Berlin".to_string(),
        created_at: Utc::now() - Duration::minutes(i as i64),
        is_active: i % 17 != 0,
    }
}

fn bench_canonical_pair(c: &mut Criterion) {
    let employer = create_posting(1);
    let worker = create_posting(2);

    c.bench_function("canonical_pair", |b| {
        b.iter(|| canonical_pair(black_box(&worker), black_box(&employer)));
    });
}

fn bench_filter_candidates(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_candidates");

    for pool_size in [100, 1_000, 10_000] {
        let source = create_posting(0);
        let pool: Vec<JobPosting> = (1..=pool_size).map(create_posting).collect();
        let excluded: HashSet<Uuid> = pool.iter().step_by(10).map(|p| p.id).collect();

        group.bench_with_input(BenchmarkId::from_parameter(pool_size), &pool_size, |b, _| {
            b.iter(|| {
                filter_candidates(
                    black_box(&source),
                    black_box(pool.clone()),
                    black_box(&excluded),
                    50,
                )
            });
        });
    }

    group.finish();
}

fn bench_already_seen_ids(c: &mut Criterion) {
    let source_id = Uuid::new_v4();
    let relations: Vec<InterestRelation> = (0..1_000)
        .map(|i| InterestRelation {
            id: Uuid::new_v4(),
            employer_job_id: if i % 2 == 0 { source_id } else { Uuid::new_v4() },
            worker_job_id: if i % 2 == 0 { Uuid::new_v4() } else { source_id },
            employer_interested: true,
            worker_interested: i % 3 == 0,
            is_matched: i % 3 == 0,
            created_at: Utc::now(),
            matched_at: None,
        })
        .collect();

    c.bench_function("already_seen_ids_1000", |b| {
        b.iter(|| already_seen_ids(black_box(&relations), black_box(source_id)));
    });
}

criterion_group!(
    benches,
    bench_canonical_pair,
    bench_filter_candidates,
    bench_already_seen_ids
);
criterion_main!(benches);
