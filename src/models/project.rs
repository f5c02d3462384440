use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ParseStatusError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    Planning,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Planning => "Planning",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Completed => "Completed",
        }
    }
}

impl TryFrom<String> for ProjectStatus {
    type Error = ParseStatusError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "Planning" => Ok(ProjectStatus::Planning),
            "In Progress" => Ok(ProjectStatus::InProgress),
            "Completed" => Ok(ProjectStatus::Completed),
            _ => Err(ParseStatusError(value)),
        }
    }
}

#[derive(sqlx::FromRow, Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub name: String,
    #[sqlx(try_from = "String")]
    pub status: ProjectStatus,
    pub progress: i32,
    pub due_date: String,
    pub client_id: i64,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

/// A project row read together with its client's naming columns, so a
/// single query carries everything the display label needs.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct ProjectWithClient {
    #[sqlx(flatten)]
    pub project: Project,
    pub client_name: String,
    pub client_company: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    pub name: String,
    pub client_id: i64,
    #[serde(default)]
    pub status: Option<ProjectStatus>,
    #[serde(default)]
    pub progress: Option<i32>,
    pub due_date: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    pub name: Option<String>,
    pub status: Option<ProjectStatus>,
    pub progress: Option<i32>,
    pub due_date: Option<String>,
    pub client_id: Option<i64>,
}
