//! Projects view: a card list with a create-project modal.

use tracing::{error, info};

use super::collection::{CollectionView, LoadOutcome};
use crate::api::WorkspaceApi;
use crate::notify::{Notification, Notifier};
use crate::projects::{DraftError, DraftField, Project, ProjectDraft};

pub const TITLE: &str = "Projects";
pub const LOADING_LABEL: &str = "Loading Projects...";
pub const LOAD_FAILED: &str = "Failed to load projects";
pub const CREATED: &str = "Project Created!";
pub const CREATE_FAILED: &str = "Failed to create project";
pub const NO_DESCRIPTION: &str = "No description provided.";

/// Result of one `submit()` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The project was created and the list reloaded.
    Created { reload: LoadOutcome },
    /// The server rejected the request; the form and draft are untouched.
    Failed,
    /// The draft has no name; nothing was sent.
    MissingName,
}

/// Display values derived for one project card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectCard {
    pub name: String,
    pub status: String,
    /// CSS-style badge class; equal to the status value.
    pub badge_class: String,
    pub description: String,
    pub creator: String,
    pub task_count: u64,
    /// Detail page link, `/projects/{id}`.
    pub link: String,
}

impl From<&Project> for ProjectCard {
    fn from(project: &Project) -> Self {
        let description = project
            .description
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or(NO_DESCRIPTION)
            .to_string();

        Self {
            name: project.name.clone(),
            status: project.status.to_string(),
            badge_class: project.status.to_string(),
            description,
            creator: project
                .creator
                .as_ref()
                .and_then(|c| c.full_name.clone())
                .unwrap_or_default(),
            task_count: project
                .counts
                .as_ref()
                .and_then(|c| c.tasks)
                .unwrap_or(0),
            link: format!("/projects/{}", project.id),
        }
    }
}

/// Projects list plus the create form.
///
/// The view owns its collection and draft. The modal flag and the draft are
/// independent: the draft survives a failed submit so the user can retry.
pub struct ProjectsView<A, N> {
    api: A,
    notifier: N,
    projects: CollectionView<Project>,
    form_open: bool,
    draft: ProjectDraft,
}

impl<A: WorkspaceApi, N: Notifier> ProjectsView<A, N> {
    /// Mount the view: loading, empty, form closed, default draft.
    pub fn new(api: A, notifier: N) -> Self {
        Self {
            api,
            notifier,
            projects: CollectionView::new("projects", LOAD_FAILED),
            form_open: false,
            draft: ProjectDraft::default(),
        }
    }

    /// Fetch the projects collection once.
    pub async fn load(&mut self) -> LoadOutcome {
        self.projects
            .load(self.api.list_projects(), &self.notifier)
            .await
    }

    pub fn projects(&self) -> &[Project] {
        self.projects.items()
    }

    pub fn cards(&self) -> Vec<ProjectCard> {
        self.projects.items().iter().map(ProjectCard::from).collect()
    }

    pub fn is_loading(&self) -> bool {
        self.projects.is_loading()
    }

    pub fn is_form_open(&self) -> bool {
        self.form_open
    }

    pub fn draft(&self) -> &ProjectDraft {
        &self.draft
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn open_create(&mut self) {
        self.form_open = true;
    }

    /// Close the form without submitting and discard the draft's edits.
    pub fn cancel(&mut self) {
        self.form_open = false;
        self.draft.reset();
    }

    pub fn update_field(&mut self, field: DraftField, value: &str) -> Result<(), DraftError> {
        self.draft.update(field, value)
    }

    /// Send the draft to the creation endpoint.
    ///
    /// On success: notify, close the form, reset the draft, then reload,
    /// strictly in that order. On failure: one error notification with the
    /// server message or the static fallback; form and draft stay as they
    /// were.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if !self.draft.has_name() {
            info!(event = "core.projects.submit_skipped", reason = "missing name");
            return SubmitOutcome::MissingName;
        }

        let request = self.draft.to_request();
        info!(
            event = "core.projects.create_started",
            name = request.name.as_str(),
            status = %request.status
        );

        match self.api.create_project(&request).await {
            Ok(()) => {
                info!(event = "core.projects.create_completed", name = request.name.as_str());
                self.notifier.notify(Notification::success(CREATED));
                self.form_open = false;
                self.draft.reset();
                let reload = self.load().await;
                SubmitOutcome::Created { reload }
            }
            Err(e) => {
                error!(
                    event = "core.projects.create_failed",
                    name = request.name.as_str(),
                    error = %e
                );
                let message = e.server_message().unwrap_or(CREATE_FAILED);
                self.notifier.notify(Notification::error(message));
                SubmitOutcome::Failed
            }
        }
    }
}
