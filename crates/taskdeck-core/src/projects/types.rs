use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Lifecycle status of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    #[default]
    Active,
    Completed,
    Archived,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] = [
        ProjectStatus::Active,
        ProjectStatus::Completed,
        ProjectStatus::Archived,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Completed => "completed",
            ProjectStatus::Archived => "archived",
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("unknown project status '{}'", s))
    }
}

/// Status of a listed project.
///
/// The create form only offers [`ProjectStatus`] values, but the server may
/// report others. Those are kept verbatim so one record cannot fail the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportedStatus {
    Known(ProjectStatus),
    Other(String),
}

impl ReportedStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ReportedStatus::Known(status) => status.as_str(),
            ReportedStatus::Other(s) => s,
        }
    }
}

impl From<ProjectStatus> for ReportedStatus {
    fn from(status: ProjectStatus) -> Self {
        ReportedStatus::Known(status)
    }
}

impl From<&str> for ReportedStatus {
    fn from(s: &str) -> Self {
        s.parse::<ProjectStatus>()
            .map(ReportedStatus::Known)
            .unwrap_or_else(|_| ReportedStatus::Other(s.to_string()))
    }
}

impl std::fmt::Display for ReportedStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ReportedStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ReportedStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(ReportedStatus::from(raw.as_str()))
    }
}

/// User who created a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creator {
    #[serde(default)]
    pub full_name: Option<String>,
}

/// Aggregate counts the API attaches to a project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectCounts {
    #[serde(default)]
    pub tasks: Option<u64>,
}

/// A project as returned by the projects collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: ReportedStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<Creator>,
    #[serde(rename = "_count", default, skip_serializing_if = "Option::is_none")]
    pub counts: Option<ProjectCounts>,
}

/// Body of a project creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProject {
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
}

/// Accept both string and numeric identifiers, normalized to a string.
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(u64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_status_parse() {
        assert_eq!("active".parse::<ProjectStatus>(), Ok(ProjectStatus::Active));
        assert_eq!(
            "archived".parse::<ProjectStatus>(),
            Ok(ProjectStatus::Archived)
        );
        assert!("Active".parse::<ProjectStatus>().is_err());
        assert!("paused".parse::<ProjectStatus>().is_err());
    }

    #[test]
    fn test_project_deserializes_api_shape() {
        let json = r#"{
            "id": "c9a1",
            "name": "Website relaunch",
            "description": null,
            "status": "completed",
            "creator": { "fullName": "Dana Scully" },
            "_count": { "tasks": 7 }
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.id, "c9a1");
        assert_eq!(project.status, ProjectStatus::Completed.into());
        assert!(project.description.is_none());
        assert_eq!(
            project.creator.and_then(|c| c.full_name).as_deref(),
            Some("Dana Scully")
        );
        assert_eq!(project.counts.and_then(|c| c.tasks), Some(7));
    }

    #[test]
    fn test_project_accepts_numeric_id_and_missing_optionals() {
        let json = r#"{ "id": 42, "name": "Ops", "status": "active" }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.id, "42");
        assert!(project.creator.is_none());
        assert!(project.counts.is_none());
    }

    #[test]
    fn test_unlisted_status_is_kept_verbatim() {
        let json = r#"{ "id": "p5", "name": "Migration", "status": "on_hold" }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.status, ReportedStatus::Other("on_hold".to_string()));
        assert_eq!(project.status.to_string(), "on_hold");
        assert_eq!(serde_json::to_value(&project).unwrap()["status"], "on_hold");
    }

    #[test]
    fn test_new_project_serializes_exact_body() {
        let body = NewProject {
            name: "Launch".to_string(),
            description: String::new(),
            status: ProjectStatus::Active,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({ "name": "Launch", "description": "", "status": "active" })
        );
    }
}
