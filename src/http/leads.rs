use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;

use super::AppState;
use crate::error::Result;
use crate::models::{ActingUser, CreateLead, LeadStatus, UpdateLead};
use crate::views::LeadView;

#[derive(Debug, Deserialize)]
pub struct StatusPayload {
    pub status: LeadStatus,
}

pub async fn list(
    State(state): State<Arc<AppState>>,
    user: ActingUser,
) -> Result<Json<Vec<LeadView>>> {
    let leads = state.db.list_leads(user).await?;
    let now = Utc::now();
    Ok(Json(
        leads
            .into_iter()
            .map(|row| LeadView::from_row(row, now))
            .collect(),
    ))
}

pub async fn get_one(
    State(state): State<Arc<AppState>>,
    user: ActingUser,
    Path(id): Path<i64>,
) -> Result<Json<LeadView>> {
    let lead = state.db.get_lead(user, id).await?;
    Ok(Json(LeadView::from_row(lead, Utc::now())))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    user: ActingUser,
    Json(input): Json<CreateLead>,
) -> Result<(StatusCode, Json<LeadView>)> {
    let lead = state.db.create_lead(user, input).await?;
    Ok((StatusCode::CREATED, Json(LeadView::fresh(lead))))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    user: ActingUser,
    Path(id): Path<i64>,
    Json(input): Json<UpdateLead>,
) -> Result<Json<LeadView>> {
    let lead = state.db.update_lead(user, id, input).await?;
    Ok(Json(LeadView::from_row(lead, Utc::now())))
}

pub async fn update_status(
    State(state): State<Arc<AppState>>,
    user: ActingUser,
    Path(id): Path<i64>,
    Json(payload): Json<StatusPayload>,
) -> Result<Json<LeadView>> {
    let lead = state.db.update_lead_status(user, id, payload.status).await?;
    Ok(Json(LeadView::from_row(lead, Utc::now())))
}

pub async fn remove(
    State(state): State<Arc<AppState>>,
    user: ActingUser,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>> {
    state.db.delete_lead(user, id).await?;
    Ok(Json(json!({ "message": "Lead deleted" })))
}
