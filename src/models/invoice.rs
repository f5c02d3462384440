use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ParseStatusError, double_option};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvoiceStatus {
    Paid,
    Pending,
    Overdue,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Paid => "Paid",
            InvoiceStatus::Pending => "Pending",
            InvoiceStatus::Overdue => "Overdue",
        }
    }
}

impl TryFrom<String> for InvoiceStatus {
    type Error = ParseStatusError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "Paid" => Ok(InvoiceStatus::Paid),
            "Pending" => Ok(InvoiceStatus::Pending),
            "Overdue" => Ok(InvoiceStatus::Overdue),
            _ => Err(ParseStatusError(value)),
        }
    }
}

#[derive(sqlx::FromRow, Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: i64,
    pub number: String,
    /// Issue date as the client entered it; a display string, not a
    /// parsed calendar date.
    pub date: String,
    pub amount: Decimal,
    #[sqlx(try_from = "String")]
    pub status: InvoiceStatus,
    pub client_id: i64,
    pub project_id: Option<i64>,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

/// An invoice row joined with its client's naming columns and, when
/// linked, the project name.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct InvoiceWithRelated {
    #[sqlx(flatten)]
    pub invoice: Invoice,
    pub client_name: String,
    pub client_company: Option<String>,
    pub project_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvoice {
    pub number: String,
    pub date: String,
    pub amount: Decimal,
    #[serde(default)]
    pub status: Option<InvoiceStatus>,
    pub client_id: i64,
    #[serde(default)]
    pub project_id: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInvoice {
    pub number: Option<String>,
    pub date: Option<String>,
    pub amount: Option<Decimal>,
    pub status: Option<InvoiceStatus>,
    pub client_id: Option<i64>,
    #[serde(default, deserialize_with = "double_option")]
    pub project_id: Option<Option<i64>>,
}
