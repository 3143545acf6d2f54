// Service exports
pub mod postgres;

pub use postgres::{InterestOutcome, PostgresClient, StoreError};
