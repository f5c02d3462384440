use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ParseStatusError, double_option};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClientStatus {
    Active,
    Inactive,
}

impl ClientStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClientStatus::Active => "Active",
            ClientStatus::Inactive => "Inactive",
        }
    }
}

impl TryFrom<String> for ClientStatus {
    type Error = ParseStatusError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "Active" => Ok(ClientStatus::Active),
            "Inactive" => Ok(ClientStatus::Inactive),
            _ => Err(ParseStatusError(value)),
        }
    }
}

#[derive(sqlx::FromRow, Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub company: Option<String>,
    pub email: String,
    pub phone: String,
    #[sqlx(try_from = "String")]
    pub status: ClientStatus,
    pub lead_id: Option<i64>,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClient {
    pub name: String,
    #[serde(default)]
    pub company: Option<String>,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub status: Option<ClientStatus>,
    #[serde(default)]
    pub lead_id: Option<i64>,
}

/// Partial update payload. `None` means the field was absent from the
/// request body and the stored value must be left untouched; for nullable
/// columns an explicit JSON `null` arrives as `Some(None)` and clears the
/// column.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClient {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub company: Option<Option<String>>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub status: Option<ClientStatus>,
    #[serde(default, deserialize_with = "double_option")]
    pub lead_id: Option<Option<i64>>,
}
