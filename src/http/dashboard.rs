use std::sync::Arc;

use axum::Json;
use axum::extract::State;

use super::AppState;
use crate::dashboard::DashboardSummary;
use crate::error::Result;
use crate::models::ActingUser;

pub async fn stats(
    State(state): State<Arc<AppState>>,
    user: ActingUser,
) -> Result<Json<DashboardSummary>> {
    let summary = state.db.dashboard_stats(user).await?;
    Ok(Json(summary))
}
