// SPDX-License-Identifier: MPL-2.0
//! [`AuthBackend`] adapter for a Supabase (GoTrue) auth service.
//!
//! Endpoints used, relative to `<project url>/auth/v1/`:
//! - `GET user` (bearer token) - resolve the current user
//! - `POST token?grant_type=password` - email/password sign-in
//! - `POST token?grant_type=refresh_token` - refresh an expired session
//! - `POST signup` - create an account
//! - `POST logout` (bearer token) - revoke the session
//!
//! Every request carries the project's public key in the `apikey` header.

use super::backend::{AuthBackend, SignUpOutcome};
use super::{Session, User};
use crate::config::{AuthConfig, AUTH_REQUEST_TIMEOUT_SECS};
use crate::error::AuthError;
use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const USER_AGENT: &str = concat!("Bazam/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct SupabaseAuth {
    client: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseAuth {
    pub fn new(base_url: &str, anon_key: &str) -> Result<Self, AuthError> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(AuthError::NotConfigured);
        }

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(AUTH_REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| AuthError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            anon_key: anon_key.to_string(),
        })
    }

    /// Builds the adapter from `[auth]` settings; fails with
    /// [`AuthError::NotConfigured`] when no URL is set.
    pub fn from_config(config: &AuthConfig) -> Result<Self, AuthError> {
        let url = config.url.as_deref().ok_or(AuthError::NotConfigured)?;
        Self::new(url, config.anon_key.as_deref().unwrap_or_default())
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, self.endpoint(path))
            .header("apikey", &self.anon_key)
    }

    async fn token_grant<B: Serialize + Sync>(
        &self,
        grant_type: &str,
        body: &B,
    ) -> Result<Session, AuthError> {
        let response = self
            .request(Method::POST, &format!("token?grant_type={grant_type}"))
            .json(body)
            .send()
            .await?;
        let token: TokenResponse = ensure_success(response).await?.json().await?;
        Ok(token.into_session(Utc::now()))
    }
}

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RefreshGrant<'a> {
    refresh_token: &'a str,
}

/// Session payload returned by the token and signup endpoints.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    /// Lifetime in seconds.
    #[serde(default)]
    expires_in: Option<i64>,
    /// Unix timestamp; preferred over `expires_in` when present.
    #[serde(default)]
    expires_at: Option<i64>,
    user: User,
}

impl TokenResponse {
    fn into_session(self, now: DateTime<Utc>) -> Session {
        let expires_at = self
            .expires_at
            .and_then(|ts| DateTime::from_timestamp(ts, 0))
            .or_else(|| {
                self.expires_in
                    .and_then(TimeDelta::try_seconds)
                    .map(|lifetime| now + lifetime)
            });
        Session {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            expires_at,
            user: self.user,
        }
    }
}

/// Signup answers with a session when auto-confirm is on, with the bare
/// user otherwise.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SignUpResponse {
    Session(TokenResponse),
    User(User),
}

/// GoTrue error bodies come in a few historical shapes.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    error_description: Option<String>,
    msg: Option<String>,
    message: Option<String>,
}

impl ErrorBody {
    fn into_message(self, status: StatusCode) -> String {
        self.error_description
            .or(self.msg)
            .or(self.message)
            .or(self.error)
            .unwrap_or_else(|| status.to_string())
    }
}

async fn ensure_success(response: Response) -> Result<Response, AuthError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(status_error(status, &body))
}

fn status_error(status: StatusCode, body: &str) -> AuthError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .unwrap_or_default()
        .into_message(status);
    AuthError::Status {
        status: status.as_u16(),
        message,
    }
}

#[async_trait]
impl AuthBackend for SupabaseAuth {
    async fn get_user(&self, access_token: &str) -> Result<User, AuthError> {
        let response = self
            .request(Method::GET, "user")
            .bearer_auth(access_token)
            .send()
            .await?;
        Ok(ensure_success(response).await?.json().await?)
    }

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, AuthError> {
        self.token_grant("password", &Credentials { email, password })
            .await
            .map_err(|error| match error {
                // GoTrue answers 400 for unknown users and wrong passwords alike.
                AuthError::Status {
                    status: 400,
                    message,
                } => AuthError::InvalidCredentials(message),
                other => other,
            })
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<SignUpOutcome, AuthError> {
        let response = self
            .request(Method::POST, "signup")
            .json(&Credentials { email, password })
            .send()
            .await?;
        let body: SignUpResponse = ensure_success(response).await?.json().await?;
        Ok(match body {
            SignUpResponse::Session(token) => SignUpOutcome::SignedIn(token.into_session(Utc::now())),
            SignUpResponse::User(user) => SignUpOutcome::ConfirmationRequired(user),
        })
    }

    async fn refresh_session(&self, refresh_token: &str) -> Result<Session, AuthError> {
        self.token_grant("refresh_token", &RefreshGrant { refresh_token })
            .await
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError> {
        let response = self
            .request(Method::POST, "logout")
            .bearer_auth(access_token)
            .send()
            .await?;
        ensure_success(response).await?;
        Ok(())
    }
}
