//! Bearer-token verification.
//!
//! Token issuance (login, password handling) lives in a separate service;
//! this layer only checks that the presented token was minted with the
//! shared secret and resolves it to an [`ActingUser`]. The token format is
//! `<user_id>.<base64url(HMAC-SHA256(secret, user_id))>`.

use std::sync::Arc;

use axum::Json;
use axum::extract::{FromRequestParts, Request, State};
use axum::http::{StatusCode, header::AUTHORIZATION, request::Parts};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::{Hmac, Mac};
use serde_json::json;
use sha2::Sha256;

use super::AppState;
use crate::models::ActingUser;

type HmacSha256 = Hmac<Sha256>;

/// HMAC-SHA256 keys of any length are valid (RFC 2104 pads or hashes
/// them), so `new_from_slice` only fails for fixed-size MACs. `unreachable!`
/// here rather than an error path no caller could hit.
fn keyed_mac(secret: &str) -> HmacSha256 {
    match HmacSha256::new_from_slice(secret.as_bytes()) {
        Ok(mac) => mac,
        Err(_) => unreachable!("HMAC-SHA256 accepts keys of any length"),
    }
}

/// Mint a token for a user id. Used by operator tooling and tests; the
/// production issuer lives in the auth service and uses the same scheme.
pub fn mint_token(secret: &str, user_id: i64) -> String {
    let mut mac = keyed_mac(secret);
    mac.update(user_id.to_string().as_bytes());
    let tag = mac.finalize().into_bytes();
    format!("{user_id}.{}", URL_SAFE_NO_PAD.encode(tag))
}

/// Verify a token and extract the user id it was minted for. The HMAC
/// comparison is constant-time.
pub fn verify_token(secret: &str, token: &str) -> Option<i64> {
    let (id_part, tag_part) = token.split_once('.')?;
    let user_id: i64 = id_part.parse().ok()?;
    let tag = URL_SAFE_NO_PAD.decode(tag_part).ok()?;

    let mut mac = keyed_mac(secret);
    mac.update(id_part.as_bytes());
    mac.verify_slice(&tag).ok()?;

    Some(user_id)
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "error": "Unauthorized" })),
    )
        .into_response()
}

/// Middleware guarding the `/api` resource routes. On success the acting
/// user is attached to the request for handler extraction.
pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Response {
    let token = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    match token.and_then(|t| verify_token(&state.auth_secret, t)) {
        Some(user_id) => {
            req.extensions_mut().insert(ActingUser(user_id));
            next.run(req).await
        }
        None => unauthorized(),
    }
}

impl<S> FromRequestParts<S> for ActingUser
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<ActingUser>()
            .copied()
            .ok_or_else(unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minted_token_verifies() {
        let token = mint_token("secret", 42);
        assert_eq!(verify_token("secret", &token), Some(42));
    }

    #[test]
    fn tampered_user_id_is_rejected() {
        let token = mint_token("secret", 42);
        let (_, tag) = token.split_once('.').unwrap();
        assert_eq!(verify_token("secret", &format!("7.{tag}")), None);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = mint_token("secret", 42);
        assert_eq!(verify_token("other-secret", &token), None);
    }

    #[test]
    fn any_secret_length_mints_and_verifies() {
        for secret in ["", "k", &"x".repeat(200)] {
            let token = mint_token(secret, 7);
            assert_eq!(verify_token(secret, &token), Some(7));
        }
    }

    #[test]
    fn malformed_tokens_are_rejected() {
        assert_eq!(verify_token("secret", ""), None);
        assert_eq!(verify_token("secret", "42"), None);
        assert_eq!(verify_token("secret", "not-a-number.dGFn"), None);
        assert_eq!(verify_token("secret", "42.!!!"), None);
    }
}
