//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Generic pagination parameters (`?limit=&offset=`).
///
/// Values are clamped with `launchpad_core::pagination` before they reach
/// the repository layer.
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Query parameters for `GET /internships`.
#[derive(Debug, Default, Deserialize)]
pub struct InternshipListParams {
    pub status: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Query parameters for `GET /portfolio/analytics`.
#[derive(Debug, Default, Deserialize)]
pub struct AnalyticsParams {
    pub days: Option<i64>,
}
