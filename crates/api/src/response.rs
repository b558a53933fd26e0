//! Shared response envelope types for API handlers.

use serde::Serialize;

/// Standard `{ "data": T }` envelope used by list endpoints.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// `{ "success": true }` body returned after a delete.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}
