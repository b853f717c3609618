use super::types::{NewProject, ProjectStatus};

/// Which field of the create form is being edited.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Description,
    Status,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("Invalid status '{value}'. Expected one of: active, completed, archived")]
    InvalidStatus { value: String },
}

impl crate::errors::TaskdeckError for DraftError {
    fn error_code(&self) -> &'static str {
        match self {
            DraftError::InvalidStatus { .. } => "DRAFT_INVALID_STATUS",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}

/// Staging record for a project that has not been submitted yet.
///
/// Defaults to an empty name and description with status `active`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
}

impl ProjectDraft {
    /// Merge one field into the draft.
    ///
    /// Name and description accept any text. Status must be one of the
    /// enumerated values; on error the draft is left unchanged.
    pub fn update(&mut self, field: DraftField, value: &str) -> Result<(), DraftError> {
        match field {
            DraftField::Name => self.name = value.to_string(),
            DraftField::Description => self.description = value.to_string(),
            DraftField::Status => {
                self.status = value.parse().map_err(|_| DraftError::InvalidStatus {
                    value: value.to_string(),
                })?;
            }
        }
        Ok(())
    }

    /// Whether the draft passes the form's required-name check.
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Copy the draft into a creation request body.
    pub fn to_request(&self) -> NewProject {
        NewProject {
            name: self.name.clone(),
            description: self.description.clone(),
            status: self.status,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
