use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Deserialize;
use serde_json::json;

use super::AppState;
use crate::error::Result;
use crate::models::{ActingUser, CreateInvoice, InvoiceStatus, UpdateInvoice};
use crate::views::InvoiceView;

#[derive(Debug, Deserialize)]
pub struct StatusPayload {
    pub status: InvoiceStatus,
}

pub async fn list(
    State(state): State<Arc<AppState>>,
    user: ActingUser,
) -> Result<Json<Vec<InvoiceView>>> {
    let invoices = state.db.list_invoices(user).await?;
    Ok(Json(invoices.into_iter().map(InvoiceView::from).collect()))
}

pub async fn get_one(
    State(state): State<Arc<AppState>>,
    user: ActingUser,
    Path(id): Path<i64>,
) -> Result<Json<InvoiceView>> {
    let invoice = state.db.get_invoice(user, id).await?;
    Ok(Json(invoice.into()))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    user: ActingUser,
    Json(input): Json<CreateInvoice>,
) -> Result<(StatusCode, Json<InvoiceView>)> {
    let invoice = state.db.create_invoice(user, input).await?;
    Ok((StatusCode::CREATED, Json(invoice.into())))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    user: ActingUser,
    Path(id): Path<i64>,
    Json(input): Json<UpdateInvoice>,
) -> Result<Json<InvoiceView>> {
    let invoice = state.db.update_invoice(user, id, input).await?;
    Ok(Json(invoice.into()))
}

pub async fn update_status(
    State(state): State<Arc<AppState>>,
    user: ActingUser,
    Path(id): Path<i64>,
    Json(payload): Json<StatusPayload>,
) -> Result<Json<InvoiceView>> {
    let invoice = state.db.update_invoice_status(user, id, payload.status).await?;
    Ok(Json(invoice.into()))
}

pub async fn remove(
    State(state): State<Arc<AppState>>,
    user: ActingUser,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>> {
    state.db.delete_invoice(user, id).await?;
    Ok(Json(json!({ "message": "Invoice deleted" })))
}
