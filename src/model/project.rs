use serde::{Deserialize, Deserializer, Serialize, Serializer};

resource_id!(ProjectId, "project");

/// Where a project is in its life. Only `InProgress` and `Applied` projects
/// receive allocations.
///
/// Serialized with the Korean labels the project board uses; the English variant
/// names are accepted on input as well. Unknown labels become `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectStatus {
    Planned,
    Applied,
    InProgress,
    Completed,
    Other,
}

impl ProjectStatus {
    pub fn is_active(self) -> bool {
        matches!(self, ProjectStatus::InProgress | ProjectStatus::Applied)
    }

    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Planned => "신청예정",
            ProjectStatus::Applied => "신청완료",
            ProjectStatus::InProgress => "진행중",
            ProjectStatus::Completed => "완료",
            ProjectStatus::Other => "기타",
        }
    }

    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "신청예정" | "Planned" => ProjectStatus::Planned,
            "신청완료" | "Applied" => ProjectStatus::Applied,
            "진행중" | "InProgress" => ProjectStatus::InProgress,
            "완료" | "Completed" => ProjectStatus::Completed,
            _ => ProjectStatus::Other,
        }
    }
}

impl Serialize for ProjectStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for ProjectStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Self::from_label(&label))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    /// Join key for [`ProjectShare`](crate::model::ProjectShare) rows.
    pub title: String,
    pub status: ProjectStatus,
    pub organization: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectCreate {
    pub title: String,
    pub status: ProjectStatus,
    #[serde(default)]
    pub organization: Option<String>,
}

/// A partial edit. `{"organization": null}` clears the organization; omitting it
/// keeps the current one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectUpdate {
    pub title: Option<String>,
    pub status: Option<ProjectStatus>,
    #[serde(default, deserialize_with = "super::present")]
    pub organization: Option<Option<String>>,
}

impl ProjectUpdate {
    pub fn status(status: ProjectStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}
