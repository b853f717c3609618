//! Response envelopes of the workspace API.
//!
//! Every success body wraps its payload in `{ "data": ... }`. Error bodies
//! may carry a free-text `message`.

use serde::Deserialize;

use crate::projects::Project;
use crate::tenants::Tenant;

#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

#[derive(Debug, Deserialize)]
pub struct ProjectsPayload {
    pub projects: Vec<Project>,
}

#[derive(Debug, Deserialize)]
pub struct TenantsPayload {
    pub tenants: Vec<Tenant>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Extract `message` from an error body. Returns `None` for non-JSON
/// bodies, bodies without a message, and blank messages.
pub fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
}
