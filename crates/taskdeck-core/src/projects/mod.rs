pub mod draft;
pub mod types;

pub use draft::{DraftError, DraftField, ProjectDraft};
pub use types::{Creator, NewProject, Project, ProjectCounts, ProjectStatus, ReportedStatus};
