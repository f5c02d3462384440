use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Which resource a not-found error refers to; drives the user-facing
/// message ("Client not found" etc.).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Client,
    Project,
    Invoice,
    Lead,
}

impl Entity {
    pub fn name(&self) -> &'static str {
        match self {
            Entity::Client => "Client",
            Entity::Project => "Project",
            Entity::Invoice => "Invoice",
            Entity::Lead => "Lead",
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    /// The row does not exist, or exists but belongs to another user.
    /// The two cases are deliberately indistinguishable.
    #[error("{} not found", .0.name())]
    NotFound(Entity),

    #[error("{0}")]
    Validation(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

pub type Result<T> = std::result::Result<T, Error>;

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Error::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            Error::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Error::Database(err) => {
                tracing::error!(error = %err, "store operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something went wrong".to_string(),
                )
            }
            Error::Migrate(err) => {
                tracing::error!(error = %err, "migration failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something went wrong".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_the_entity() {
        assert_eq!(Error::NotFound(Entity::Client).to_string(), "Client not found");
        assert_eq!(Error::NotFound(Entity::Lead).to_string(), "Lead not found");
    }

    #[test]
    fn response_status_codes() {
        let resp = Error::NotFound(Entity::Invoice).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = Error::Validation("amount must be non-negative".into()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = Error::Database(sqlx::Error::PoolClosed).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
