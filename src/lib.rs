//! JobSwipe - reciprocal-interest matching service for the trades job market
//!
//! Employers (seeking_worker postings) and workers (seeking_work postings)
//! are matched within a shared category space: each side swipes through a
//! candidate pool and a relation becomes a confirmed match once both sides
//! have expressed interest.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{canonical_pair, filter_candidates, CanonicalPair, InterestFlags, PairSlot};
pub use models::{EnrichedMatch, InterestRelation, JobCategory, JobPosting, JobType};
