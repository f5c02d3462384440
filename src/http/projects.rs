use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::json;

use super::AppState;
use crate::error::Result;
use crate::models::{ActingUser, CreateProject, UpdateProject};
use crate::views::ProjectView;

pub async fn list(
    State(state): State<Arc<AppState>>,
    user: ActingUser,
) -> Result<Json<Vec<ProjectView>>> {
    let projects = state.db.list_projects(user).await?;
    Ok(Json(projects.into_iter().map(ProjectView::from).collect()))
}

pub async fn get_one(
    State(state): State<Arc<AppState>>,
    user: ActingUser,
    Path(id): Path<i64>,
) -> Result<Json<ProjectView>> {
    let project = state.db.get_project(user, id).await?;
    Ok(Json(project.into()))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    user: ActingUser,
    Json(input): Json<CreateProject>,
) -> Result<(StatusCode, Json<ProjectView>)> {
    let project = state.db.create_project(user, input).await?;
    Ok((StatusCode::CREATED, Json(project.into())))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    user: ActingUser,
    Path(id): Path<i64>,
    Json(input): Json<UpdateProject>,
) -> Result<Json<ProjectView>> {
    let project = state.db.update_project(user, id, input).await?;
    Ok(Json(project.into()))
}

pub async fn remove(
    State(state): State<Arc<AppState>>,
    user: ActingUser,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>> {
    state.db.delete_project(user, id).await?;
    Ok(Json(json!({ "message": "Project deleted" })))
}
