//! Workspace API client.
//!
//! [`WorkspaceApi`] is the seam the views depend on; [`HttpClient`] is the
//! reqwest-backed implementation used by the CLI.

pub mod client;
pub mod envelope;

pub use client::HttpClient;

use crate::errors::ApiError;
use crate::projects::{NewProject, Project};
use crate::tenants::Tenant;

pub const PROJECTS_PATH: &str = "/projects";

/// Path of the tenants collection with its page-size parameter.
pub fn tenants_path(limit: u32) -> String {
    format!("/tenants?limit={}", limit)
}

/// Calls the views make against the workspace API.
#[allow(async_fn_in_trait)]
pub trait WorkspaceApi {
    /// `GET /projects`
    async fn list_projects(&self) -> Result<Vec<Project>, ApiError>;

    /// `POST /projects`. The response body is not used.
    async fn create_project(&self, project: &NewProject) -> Result<(), ApiError>;

    /// `GET /tenants?limit={limit}`
    async fn list_tenants(&self, limit: u32) -> Result<Vec<Tenant>, ApiError>;
}
