use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::config::MatchingSettings;
use crate::core::{already_seen_ids, canonical_pair, filter_candidates};
use crate::models::{
    CategoryEntry, CreateJobRequest, EnrichedMatch, ErrorResponse, HealthResponse,
    InterestResponse, JobCategory, ListJobsQuery, ShowInterestRequest,
};
use crate::services::{PostgresClient, StoreError};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub postgres: Arc<PostgresClient>,
    pub matching: MatchingSettings,
}

/// Configure all job and matching routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/", web::get().to(root))
        .route("/health", web::get().to(health_check))
        .route("/jobs", web::post().to(create_job))
        .route("/jobs", web::get().to(list_jobs))
        .route("/jobs/{job_id}", web::get().to(get_job))
        .route("/jobs/{job_id}/potential-matches", web::get().to(get_potential_matches))
        .route("/show-interest", web::post().to(show_interest))
        .route("/matches/{job_id}", web::get().to(get_matches))
        .route("/categories", web::get().to(get_categories));
}

/// Map a store error onto the HTTP taxonomy: NotFound -> 404,
/// InvalidInput -> 400, everything else -> 500.
fn store_error_response(context: &str, err: StoreError) -> HttpResponse {
    match err {
        StoreError::NotFound(what) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Job posting not found".to_string(),
            message: what,
            status_code: 404,
        }),
        StoreError::InvalidInput(message) => HttpResponse::BadRequest().json(ErrorResponse {
            error: "Invalid input".to_string(),
            message,
            status_code: 400,
        }),
        other => {
            tracing::error!("{}: {}", context, other);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: context.to_string(),
                message: other.to_string(),
                status_code: 500,
            })
        }
    }
}

/// API root
async fn root() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "message": "Job Matching API" }))
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let pg_healthy = state.postgres.health_check().await.unwrap_or(false);

    let status = if pg_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Create a job posting
///
/// POST /api/jobs
async fn create_job(
    state: web::Data<AppState>,
    req: web::Json<CreateJobRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for create_job request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    match state.postgres.create_posting(&req).await {
        Ok(posting) => {
            tracing::info!(
                "Created {:?} posting {} in {:?}",
                posting.job_type,
                posting.id,
                posting.category
            );
            HttpResponse::Ok().json(posting)
        }
        Err(e) => store_error_response("Failed to create posting", e),
    }
}

/// List active postings, optionally filtered by side and category
///
/// GET /api/jobs?job_type=seeking_worker&category=electrician
async fn list_jobs(
    state: web::Data<AppState>,
    query: web::Query<ListJobsQuery>,
) -> impl Responder {
    match state.postgres.list_postings(query.job_type, query.category).await {
        Ok(postings) => HttpResponse::Ok().json(postings),
        Err(e) => store_error_response("Failed to list postings", e),
    }
}

/// Fetch a single posting
///
/// GET /api/jobs/{job_id}
async fn get_job(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let job_id = path.into_inner();

    match state.postgres.get_posting(job_id).await {
        Ok(posting) => HttpResponse::Ok().json(posting),
        Err(e) => store_error_response("Failed to fetch posting", e),
    }
}

/// Candidate pool for a posting: opposite side, same category, not yet
/// linked by any interest relation
///
/// GET /api/jobs/{job_id}/potential-matches
async fn get_potential_matches(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let job_id = path.into_inner();

    let source = match state.postgres.get_posting(job_id).await {
        Ok(posting) => posting,
        Err(e) => return store_error_response("Failed to fetch posting", e),
    };

    // Everything already surfaced to this posting is excluded, whether the
    // interest was mutual, one-sided, or never acted on.
    let relations = match state.postgres.relations_for_posting(job_id).await {
        Ok(relations) => relations,
        Err(e) => return store_error_response("Failed to fetch interest relations", e),
    };
    let excluded = already_seen_ids(&relations, job_id);
    let excluded_ids: Vec<Uuid> = excluded.iter().copied().collect();

    let page_size = state.matching.candidate_page_size;

    let pool = match state
        .postgres
        .list_candidate_pool(
            source.job_type.opposite(),
            source.category,
            job_id,
            &excluded_ids,
            page_size,
        )
        .await
    {
        Ok(pool) => pool,
        Err(e) => return store_error_response("Failed to query candidates", e),
    };

    let candidates = filter_candidates(&source, pool, &excluded, page_size);

    tracing::debug!(
        "Returning {} candidates for posting {} ({} excluded)",
        candidates.len(),
        job_id,
        excluded.len()
    );

    HttpResponse::Ok().json(candidates)
}

/// Express interest in another posting
///
/// POST /api/show-interest
///
/// Request body:
/// ```json
/// {
///   "job_id": "uuid",
///   "interested_in_job_id": "uuid"
/// }
/// ```
async fn show_interest(
    state: web::Data<AppState>,
    req: web::Json<ShowInterestRequest>,
) -> impl Responder {
    let acting = match state.postgres.find_posting(req.job_id).await {
        Ok(Some(posting)) => posting,
        Ok(None) => {
            return HttpResponse::NotFound().json(ErrorResponse {
                error: "Job posting not found".to_string(),
                message: format!("job posting {}", req.job_id),
                status_code: 404,
            });
        }
        Err(e) => return store_error_response("Failed to fetch posting", e),
    };

    let target = match state.postgres.find_posting(req.interested_in_job_id).await {
        Ok(Some(posting)) => posting,
        Ok(None) => {
            return HttpResponse::NotFound().json(ErrorResponse {
                error: "Job posting not found".to_string(),
                message: format!("job posting {}", req.interested_in_job_id),
                status_code: 404,
            });
        }
        Err(e) => return store_error_response("Failed to fetch posting", e),
    };

    let pair = match canonical_pair(&acting, &target) {
        Ok(pair) => pair,
        Err(e) => {
            tracing::info!(
                "Rejected same-side interest: {} -> {}",
                req.job_id,
                req.interested_in_job_id
            );
            return store_error_response(
                "Failed to record interest",
                StoreError::InvalidInput(e.to_string()),
            );
        }
    };

    match state.postgres.upsert_interest(&pair).await {
        Ok(outcome) => {
            if outcome.is_matched {
                tracing::info!(
                    "Mutual match confirmed between {} and {}",
                    pair.employer_job_id,
                    pair.worker_job_id
                );
            }

            let message = if outcome.created {
                "Interest recorded"
            } else {
                "Interest updated"
            };

            HttpResponse::Ok().json(InterestResponse {
                message: message.to_string(),
                created: outcome.created,
                is_matched: outcome.is_matched,
            })
        }
        Err(e) => store_error_response("Failed to record interest", e),
    }
}

/// Confirmed matches for a posting, enriched with both sides' details,
/// newest match first
///
/// GET /api/matches/{job_id}
async fn get_matches(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let job_id = path.into_inner();

    if let Err(e) = state.postgres.get_posting(job_id).await {
        return store_error_response("Failed to fetch posting", e);
    }

    let relations = match state.postgres.matched_relations(job_id).await {
        Ok(relations) => relations,
        Err(e) => return store_error_response("Failed to fetch matches", e),
    };

    let mut enriched = Vec::with_capacity(relations.len());
    for relation in relations {
        let employer = state.postgres.find_posting(relation.employer_job_id).await;
        let worker = state.postgres.find_posting(relation.worker_job_id).await;

        match (employer, worker) {
            (Ok(Some(employer)), Ok(Some(worker))) => {
                // matched_at is always set on matched relations; created_at
                // is a safe fallback for rows that predate that guarantee.
                let matched_at = relation.matched_at.unwrap_or(relation.created_at);
                enriched.push(EnrichedMatch {
                    match_id: relation.id,
                    matched_at,
                    employer,
                    worker,
                });
            }
            // Best-effort: a dangling posting reference drops that match
            // rather than failing the whole response.
            _ => {
                tracing::warn!(
                    "Skipping match {}: referenced posting missing",
                    relation.id
                );
            }
        }
    }

    HttpResponse::Ok().json(enriched)
}

/// Static category enumeration with display labels
///
/// GET /api/categories
async fn get_categories() -> impl Responder {
    let categories: Vec<CategoryEntry> = JobCategory::ALL
        .iter()
        .map(|category| CategoryEntry {
            value: category.value().to_string(),
            label: category.label(),
        })
        .collect();

    HttpResponse::Ok().json(categories)
}
