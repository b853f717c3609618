//! View models for the projects and tenants screens.
//!
//! A view owns its collection (and, for projects, its draft) exclusively.
//! Hosts mount a view, call `load()`, and render from the accessors.

pub mod collection;
pub mod projects;
pub mod tenants;

#[cfg(test)]
pub(crate) mod fake;

pub use collection::{CollectionView, LoadOutcome, LoadState};
pub use projects::{ProjectCard, ProjectsView, SubmitOutcome};
pub use tenants::{TenantRow, TenantsView};
