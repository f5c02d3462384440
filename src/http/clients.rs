use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::json;

use super::AppState;
use crate::error::Result;
use crate::models::{ActingUser, Client, CreateClient, UpdateClient};

pub async fn list(
    State(state): State<Arc<AppState>>,
    user: ActingUser,
) -> Result<Json<Vec<Client>>> {
    let clients = state.db.list_clients(user).await?;
    Ok(Json(clients))
}

pub async fn get_one(
    State(state): State<Arc<AppState>>,
    user: ActingUser,
    Path(id): Path<i64>,
) -> Result<Json<Client>> {
    let client = state.db.get_client(user, id).await?;
    Ok(Json(client))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    user: ActingUser,
    Json(input): Json<CreateClient>,
) -> Result<(StatusCode, Json<Client>)> {
    let client = state.db.create_client(user, input).await?;
    Ok((StatusCode::CREATED, Json(client)))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    user: ActingUser,
    Path(id): Path<i64>,
    Json(input): Json<UpdateClient>,
) -> Result<Json<Client>> {
    let client = state.db.update_client(user, id, input).await?;
    Ok(Json(client))
}

pub async fn remove(
    State(state): State<Arc<AppState>>,
    user: ActingUser,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>> {
    state.db.delete_client(user, id).await?;
    Ok(Json(json!({ "message": "Client deleted" })))
}
