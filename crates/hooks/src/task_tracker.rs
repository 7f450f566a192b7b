#![forbid(unsafe_code)]

use pace_core::{Request, Response};

// Sync with the external task manager is not wired up; the hook only acknowledges.
pub fn handle(_request: &Request) -> Response {
    Response::new().with("status", "tracked")
}
