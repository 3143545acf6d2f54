use serde::{Deserialize, Serialize};

/// Response for the express-interest endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterestResponse {
    pub message: String,
    pub created: bool,
    pub is_matched: bool,
}

/// One entry of the category listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryEntry {
    pub value: String,
    pub label: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
