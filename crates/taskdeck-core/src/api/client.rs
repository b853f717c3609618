use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::envelope::{Envelope, ProjectsPayload, TenantsPayload, error_message};
use super::{PROJECTS_PATH, WorkspaceApi, tenants_path};
use crate::config::ApiConfig;
use crate::errors::ApiError;
use crate::projects::{NewProject, Project};
use crate::tenants::Tenant;

/// HTTP client for the workspace API.
///
/// Every request is sent once, with the reqwest default timeout, and carries
/// `Authorization: Bearer <token>` when a token is configured.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(config.base_url.clone(), config.token.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, path: &str, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| ApiError::Transport {
                path: path.to_string(),
                source: e,
            })?;

        let status = response.status();
        debug!(
            event = "core.api.response_received",
            path = path,
            status = status.as_u16()
        );

        if status.is_success() {
            return Ok(response);
        }

        // Body is best-effort: a failed read just means no server message.
        let body = response.text().await.unwrap_or_default();
        let message = error_message(&body);

        warn!(
            event = "core.api.request_rejected",
            path = path,
            status = status.as_u16(),
            message = ?message
        );

        Err(ApiError::Status {
            path: path.to_string(),
            status: status.as_u16(),
            message,
        })
    }

    async fn get_data<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(path, self.client.get(self.url(path))).await?;

        let body = response.text().await.map_err(|e| ApiError::Transport {
            path: path.to_string(),
            source: e,
        })?;

        serde_json::from_str::<Envelope<T>>(&body)
            .map(|envelope| envelope.data)
            .map_err(|e| ApiError::Decode {
                path: path.to_string(),
                message: e.to_string(),
            })
    }
}

impl WorkspaceApi for HttpClient {
    async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        let payload: ProjectsPayload = self.get_data(PROJECTS_PATH).await?;
        Ok(payload.projects)
    }

    async fn create_project(&self, project: &NewProject) -> Result<(), ApiError> {
        let request = self.client.post(self.url(PROJECTS_PATH)).json(project);
        self.send(PROJECTS_PATH, request).await?;
        Ok(())
    }

    async fn list_tenants(&self, limit: u32) -> Result<Vec<Tenant>, ApiError> {
        let payload: TenantsPayload = self.get_data(&tenants_path(limit)).await?;
        Ok(payload.tenants)
    }
}
