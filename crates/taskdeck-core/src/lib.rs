//! taskdeck-core: Core library for the taskdeck workspace client
//!
//! This library provides the view models behind taskdeck: a projects view
//! with a creation form and a read-only tenants table, both backed by the
//! workspace REST API. It is used by the CLI and by any other host that
//! wants to render the same views.
//!
//! # Main Entry Points
//!
//! - [`views`] - Projects and tenants view models
//! - [`api`] - Workspace API client
//! - [`notify`] - Transient user notifications
//! - [`config`] - Configuration management

pub mod api;
pub mod config;
pub mod errors;
pub mod events;
pub mod logging;
pub mod notify;
pub mod projects;
pub mod tenants;
pub mod views;

// Re-export commonly used types at crate root for convenience
pub use api::{HttpClient, WorkspaceApi};
pub use config::TaskdeckConfig;
pub use errors::{ApiError, ConfigError, TaskdeckError};
pub use notify::{Notification, NotificationLevel, Notifier};
pub use projects::{
    DraftError, DraftField, NewProject, Project, ProjectDraft, ProjectStatus, ReportedStatus,
};
pub use tenants::{Tenant, TenantStatus};
pub use views::{CollectionView, LoadOutcome, ProjectsView, SubmitOutcome, TenantRow, TenantsView};

// Re-export logging initialization
pub use logging::init_logging;
