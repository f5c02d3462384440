//! Client-facing response shapes.
//!
//! Stored rows are not returned as-is: joined clients collapse to a single
//! display label, invoices carry their project's name, and leads carry a
//! human-relative age. These projections are the response contract of the
//! HTTP layer.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{
    InvoiceStatus, InvoiceWithRelated, Lead, LeadStatus, LeadWithClient, ProjectStatus,
    ProjectWithClient,
};

/// Display label for a client in nested projections: the company name when
/// one is set, else the person's name.
pub fn display_label(name: &str, company: Option<&str>) -> String {
    match company {
        Some(c) if !c.is_empty() => c.to_string(),
        _ => name.to_string(),
    }
}

/// Human-relative age of a creation timestamp ("3d ago", "2w ago", ...).
/// Ages below one day (including a skewed clock reporting a future
/// timestamp) collapse to "Just now".
pub fn relative_age(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let days = (now - created_at).num_days();
    match days {
        i64::MIN..=0 => "Just now".to_string(),
        1..=6 => format!("{days}d ago"),
        7..=13 => "1w ago".to_string(),
        14..=29 => format!("{}w ago", days / 7),
        _ => format!("{}mo ago", days / 30),
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectView {
    pub id: i64,
    pub name: String,
    pub status: ProjectStatus,
    pub progress: i32,
    pub due_date: String,
    pub client_id: i64,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    /// Display label of the owning client.
    pub client: String,
}

impl From<ProjectWithClient> for ProjectView {
    fn from(row: ProjectWithClient) -> Self {
        let client = display_label(&row.client_name, row.client_company.as_deref());
        let p = row.project;
        ProjectView {
            id: p.id,
            name: p.name,
            status: p.status,
            progress: p.progress,
            due_date: p.due_date,
            client_id: p.client_id,
            user_id: p.user_id,
            created_at: p.created_at,
            client,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceView {
    pub id: i64,
    pub number: String,
    pub date: String,
    pub amount: Decimal,
    pub status: InvoiceStatus,
    pub client_id: i64,
    pub project_id: Option<i64>,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    /// Display label of the owning client.
    pub client: String,
    /// Name of the linked project, if any.
    pub project: Option<String>,
}

impl From<InvoiceWithRelated> for InvoiceView {
    fn from(row: InvoiceWithRelated) -> Self {
        let client = display_label(&row.client_name, row.client_company.as_deref());
        let i = row.invoice;
        InvoiceView {
            id: i.id,
            number: i.number,
            date: i.date,
            amount: i.amount,
            status: i.status,
            client_id: i.client_id,
            project_id: i.project_id,
            user_id: i.user_id,
            created_at: i.created_at,
            client,
            project: row.project_name,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadView {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub value: Decimal,
    pub status: LeadStatus,
    #[serde(rename = "type")]
    pub lead_type: String,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    /// Relative age of the lead, computed at read time.
    pub date: String,
    /// Display label of the client this lead was converted into, if any.
    pub client_name: Option<String>,
}

impl LeadView {
    pub fn from_row(row: LeadWithClient, now: DateTime<Utc>) -> Self {
        let client_name = row
            .client_name
            .map(|name| display_label(&name, row.client_company.as_deref()));
        let date = relative_age(row.lead.created_at, now);
        Self::build(row.lead, date, client_name)
    }

    /// View of a lead that was inserted within the current request. The
    /// age is pinned to "Just now" so an insert racing the clock can never
    /// report an older label.
    pub fn fresh(lead: Lead) -> Self {
        Self::build(lead, "Just now".to_string(), None)
    }

    fn build(lead: Lead, date: String, client_name: Option<String>) -> Self {
        LeadView {
            id: lead.id,
            title: lead.title,
            company: lead.company,
            contact_name: lead.contact_name,
            contact_email: lead.contact_email,
            contact_phone: lead.contact_phone,
            value: lead.value,
            status: lead.status,
            lead_type: lead.lead_type,
            user_id: lead.user_id,
            created_at: lead.created_at,
            date,
            client_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use pretty_assertions::assert_eq;

    #[test]
    fn label_prefers_company_when_present() {
        assert_eq!(display_label("Jane Cooper", Some("Acme Corp")), "Acme Corp");
    }

    #[test]
    fn label_falls_back_to_name_on_empty_or_missing_company() {
        assert_eq!(display_label("Jane Cooper", Some("")), "Jane Cooper");
        assert_eq!(display_label("Jane Cooper", None), "Jane Cooper");
    }

    #[test]
    fn relative_age_breakpoints() {
        let now = Utc::now();
        let cases = [
            (0, "Just now"),
            (1, "1d ago"),
            (6, "6d ago"),
            (7, "1w ago"),
            (13, "1w ago"),
            (14, "2w ago"),
            (29, "4w ago"),
            (30, "1mo ago"),
            (61, "2mo ago"),
        ];
        for (days, expected) in cases {
            let created = now - Duration::days(days);
            assert_eq!(relative_age(created, now), expected, "at {days} days");
        }
    }

    #[test]
    fn relative_age_tolerates_future_timestamps() {
        let now = Utc::now();
        assert_eq!(relative_age(now + Duration::days(2), now), "Just now");
    }

    #[test]
    fn lead_view_labels_converted_client() {
        let lead = Lead {
            id: 1,
            title: "Website redesign".into(),
            company: "Acme Corp".into(),
            contact_name: None,
            contact_email: None,
            contact_phone: None,
            value: Decimal::ZERO,
            status: LeadStatus::Won,
            lead_type: "Design".into(),
            user_id: 7,
            created_at: Utc::now() - Duration::days(3),
        };
        let row = LeadWithClient {
            lead,
            client_name: Some("Jane Cooper".into()),
            client_company: Some("Acme Corp".into()),
        };
        let view = LeadView::from_row(row, Utc::now());
        assert_eq!(view.client_name.as_deref(), Some("Acme Corp"));
        assert_eq!(view.date, "3d ago");
    }

    #[test]
    fn fresh_lead_reports_just_now() {
        let lead = Lead {
            id: 2,
            title: "SEO audit".into(),
            company: "Globex".into(),
            contact_name: None,
            contact_email: None,
            contact_phone: None,
            value: Decimal::ZERO,
            status: LeadStatus::New,
            lead_type: "Marketing".into(),
            user_id: 7,
            // Deliberately old: the pinned label must win regardless.
            created_at: Utc::now() - Duration::days(45),
        };
        let view = LeadView::fresh(lead);
        assert_eq!(view.date, "Just now");
        assert_eq!(view.client_name, None);
    }
}
