//! Scripted in-memory API for view tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::api::{PROJECTS_PATH, WorkspaceApi, tenants_path};
use crate::errors::ApiError;
use crate::projects::{NewProject, Project, ProjectStatus};
use crate::tenants::{Tenant, TenantStatus};

/// A call the view made, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListProjects,
    CreateProject(NewProject),
    ListTenants(u32),
}

/// Answers each call from a queue of scripted responses. An empty queue
/// answers with a 500.
#[derive(Default)]
pub struct ScriptedApi {
    projects: Mutex<VecDeque<Result<Vec<Project>, ApiError>>>,
    creates: Mutex<VecDeque<Result<(), ApiError>>>,
    tenants: Mutex<VecDeque<Result<Vec<Tenant>, ApiError>>>,
    calls: Mutex<Vec<Call>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn projects(self, response: Result<Vec<Project>, ApiError>) -> Self {
        self.projects.lock().unwrap().push_back(response);
        self
    }

    pub fn create(self, response: Result<(), ApiError>) -> Self {
        self.creates.lock().unwrap().push_back(response);
        self
    }

    pub fn tenants(self, response: Result<Vec<Tenant>, ApiError>) -> Self {
        self.tenants.lock().unwrap().push_back(response);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

pub fn server_error(path: &str, message: Option<&str>) -> ApiError {
    ApiError::Status {
        path: path.to_string(),
        status: 500,
        message: message.map(str::to_string),
    }
}

pub fn project(id: &str, name: &str) -> Project {
    Project {
        id: id.to_string(),
        name: name.to_string(),
        description: None,
        status: ProjectStatus::Active.into(),
        creator: None,
        counts: None,
    }
}

pub fn tenant(name: &str, subdomain: &str, status: &str) -> Tenant {
    Tenant {
        id: format!("t-{}", subdomain),
        name: name.to_string(),
        subdomain: subdomain.to_string(),
        subscription_plan: "basic".to_string(),
        status: TenantStatus::from(status),
        created_at: "2024-05-06T12:00:00.000Z".to_string(),
    }
}

impl WorkspaceApi for ScriptedApi {
    async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        self.record(Call::ListProjects);
        self.projects
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(server_error(PROJECTS_PATH, None)))
    }

    async fn create_project(&self, project: &NewProject) -> Result<(), ApiError> {
        self.record(Call::CreateProject(project.clone()));
        self.creates
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(server_error(PROJECTS_PATH, None)))
    }

    async fn list_tenants(&self, limit: u32) -> Result<Vec<Tenant>, ApiError> {
        self.record(Call::ListTenants(limit));
        self.tenants
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(server_error(&tenants_path(limit), None)))
    }
}
