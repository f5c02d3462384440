mod client;
mod invoice;
mod lead;
mod project;

pub use client::{Client, ClientStatus, CreateClient, UpdateClient};
pub use invoice::{CreateInvoice, Invoice, InvoiceStatus, InvoiceWithRelated, UpdateInvoice};
pub use lead::{CreateLead, Lead, LeadStatus, LeadWithClient, UpdateLead};
pub use project::{CreateProject, Project, ProjectStatus, ProjectWithClient, UpdateProject};

use serde::{Deserialize, Deserializer};

/// The authenticated identity a request acts as. Every store operation is
/// scoped by this value; rows owned by anyone else are invisible to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActingUser(pub i64);

/// Returned when a TEXT status column holds a value outside the known set.
#[derive(Debug, thiserror::Error)]
#[error("unrecognized status value: {0}")]
pub struct ParseStatusError(pub String);

/// Deserialize helper for nullable update fields. Wrapping the field value
/// in an extra `Some` distinguishes "field present as null" (clear the
/// column) from "field absent" (leave the column alone), which serde's
/// plain `Option` collapses.
pub(crate) fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(de).map(Some)
}
