//! Dashboard summary statistics.
//!
//! Counts come straight from scoped COUNT queries; revenue and pipeline
//! figures are folded over the user's full invoice and lead sets. Sums use
//! `Decimal` so repeated monetary additions cannot drift.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Invoice, InvoiceStatus, Lead, LeadStatus};

#[derive(Debug, Clone, Serialize)]
pub struct ClientStats {
    pub total: i64,
    pub active: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectStats {
    pub active: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceStats {
    pub total_revenue: Decimal,
    pub pending_amount: Decimal,
    pub overdue_count: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct LeadStats {
    #[serde(rename = "new")]
    pub new_count: i64,
    #[serde(rename = "wonValue")]
    pub won_value: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub clients: ClientStats,
    pub projects: ProjectStats,
    pub invoices: InvoiceStats,
    pub leads: LeadStats,
}

/// Fold raw rows and counts into the dashboard summary.
pub fn summarize(
    clients_total: i64,
    clients_active: i64,
    projects_active: i64,
    invoices: &[Invoice],
    leads: &[Lead],
) -> DashboardSummary {
    let mut total_revenue = Decimal::ZERO;
    let mut pending_amount = Decimal::ZERO;
    let mut overdue_count = 0;
    for invoice in invoices {
        match invoice.status {
            InvoiceStatus::Paid => total_revenue += invoice.amount,
            InvoiceStatus::Pending => pending_amount += invoice.amount,
            InvoiceStatus::Overdue => {
                pending_amount += invoice.amount;
                overdue_count += 1;
            }
        }
    }

    let mut new_count = 0;
    let mut won_value = Decimal::ZERO;
    for lead in leads {
        match lead.status {
            LeadStatus::New => new_count += 1,
            LeadStatus::Won => won_value += lead.value,
            _ => {}
        }
    }

    DashboardSummary {
        clients: ClientStats {
            total: clients_total,
            active: clients_active,
        },
        projects: ProjectStats {
            active: projects_active,
        },
        invoices: InvoiceStats {
            total_revenue,
            pending_amount,
            overdue_count,
        },
        leads: LeadStats {
            new_count,
            won_value,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn invoice(amount: Decimal, status: InvoiceStatus) -> Invoice {
        Invoice {
            id: 0,
            number: "INV-001".into(),
            date: "2026-01-15".into(),
            amount,
            status,
            client_id: 1,
            project_id: None,
            user_id: 1,
            created_at: Utc::now(),
        }
    }

    fn lead(value: Decimal, status: LeadStatus) -> Lead {
        Lead {
            id: 0,
            title: "Lead".into(),
            company: "Acme".into(),
            contact_name: None,
            contact_email: None,
            contact_phone: None,
            value,
            status,
            lead_type: "Referral".into(),
            user_id: 1,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn invoice_arithmetic() {
        let invoices = vec![
            invoice(dec!(1200), InvoiceStatus::Paid),
            invoice(dec!(3500), InvoiceStatus::Pending),
            invoice(dec!(850), InvoiceStatus::Overdue),
        ];
        let summary = summarize(0, 0, 0, &invoices, &[]);
        assert_eq!(summary.invoices.total_revenue, dec!(1200));
        assert_eq!(summary.invoices.pending_amount, dec!(4350));
        assert_eq!(summary.invoices.overdue_count, 1);
    }

    #[test]
    fn lead_pipeline() {
        let leads = vec![
            lead(dec!(5000), LeadStatus::New),
            lead(dec!(2500), LeadStatus::New),
            lead(dec!(12000), LeadStatus::Won),
            lead(dec!(800), LeadStatus::Lost),
            lead(dec!(300), LeadStatus::Contacted),
        ];
        let summary = summarize(0, 0, 0, &[], &leads);
        assert_eq!(summary.leads.new_count, 2);
        assert_eq!(summary.leads.won_value, dec!(12000));
    }

    #[test]
    fn decimal_sums_do_not_drift() {
        // 0.1 + 0.2 style additions stay exact in fixed point.
        let invoices: Vec<_> = (0..100)
            .map(|_| invoice(dec!(0.10), InvoiceStatus::Paid))
            .collect();
        let summary = summarize(0, 0, 0, &invoices, &[]);
        assert_eq!(summary.invoices.total_revenue, dec!(10.00));
    }

    #[test]
    fn counts_pass_through() {
        let summary = summarize(12, 9, 4, &[], &[]);
        assert_eq!(summary.clients.total, 12);
        assert_eq!(summary.clients.active, 9);
        assert_eq!(summary.projects.active, 4);
    }

    #[test]
    fn summary_json_shape() {
        let summary = summarize(1, 1, 0, &[invoice(dec!(100), InvoiceStatus::Paid)], &[]);
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["clients"]["total"], 1);
        assert_eq!(json["invoices"]["totalRevenue"], serde_json::json!("100"));
        assert_eq!(json["leads"]["new"], 0);
        assert_eq!(json["leads"]["wonValue"], serde_json::json!("0"));
    }
}
