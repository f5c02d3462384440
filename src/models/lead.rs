use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ParseStatusError, double_option};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeadStatus {
    New,
    Contacted,
    #[serde(rename = "Proposal Sent")]
    ProposalSent,
    Won,
    Lost,
}

impl LeadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::New => "New",
            LeadStatus::Contacted => "Contacted",
            LeadStatus::ProposalSent => "Proposal Sent",
            LeadStatus::Won => "Won",
            LeadStatus::Lost => "Lost",
        }
    }
}

impl TryFrom<String> for LeadStatus {
    type Error = ParseStatusError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "New" => Ok(LeadStatus::New),
            "Contacted" => Ok(LeadStatus::Contacted),
            "Proposal Sent" => Ok(LeadStatus::ProposalSent),
            "Won" => Ok(LeadStatus::Won),
            "Lost" => Ok(LeadStatus::Lost),
            _ => Err(ParseStatusError(value)),
        }
    }
}

#[derive(sqlx::FromRow, Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub value: Decimal,
    #[sqlx(try_from = "String")]
    pub status: LeadStatus,
    #[serde(rename = "type")]
    pub lead_type: String,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

/// A lead row joined with the naming columns of the client it was
/// converted into, when such a client exists.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct LeadWithClient {
    #[sqlx(flatten)]
    pub lead: Lead,
    pub client_name: Option<String>,
    pub client_company: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLead {
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub contact_name: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub value: Option<Decimal>,
    #[serde(default)]
    pub status: Option<LeadStatus>,
    #[serde(rename = "type")]
    pub lead_type: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLead {
    pub title: Option<String>,
    pub company: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub contact_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub contact_email: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub contact_phone: Option<Option<String>>,
    pub value: Option<Decimal>,
    pub status: Option<LeadStatus>,
    #[serde(rename = "type")]
    pub lead_type: Option<String>,
}
