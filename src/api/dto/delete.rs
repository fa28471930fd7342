//! DTOs for the delete endpoint.

use serde::Serialize;

/// Successful delete result carrying the URL that was removed.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub status: &'static str,
    pub deleted_url: String,
}

impl DeleteResponse {
    pub fn ok(deleted_url: String) -> Self {
        Self {
            status: "ok",
            deleted_url,
        }
    }
}
