// SPDX-License-Identifier: MPL-2.0
//! Auth service port.
//!
//! The [`SessionClient`](super::SessionClient) talks to the hosted auth
//! service only through [`AuthBackend`], so the facade can be exercised
//! against an in-memory backend in tests.

use super::{Session, User};
use crate::error::AuthError;
use async_trait::async_trait;

/// Result of a sign-up request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignUpOutcome {
    /// The service confirmed the account immediately and opened a session.
    SignedIn(Session),
    /// The account exists but must be confirmed (e.g. by email) first.
    ConfirmationRequired(User),
}

#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// Resolves the user owning `access_token`.
    async fn get_user(&self, access_token: &str) -> Result<User, AuthError>;

    async fn sign_in_with_password(&self, email: &str, password: &str)
        -> Result<Session, AuthError>;

    async fn sign_up(&self, email: &str, password: &str) -> Result<SignUpOutcome, AuthError>;

    /// Exchanges a refresh token for a new session.
    async fn refresh_session(&self, refresh_token: &str) -> Result<Session, AuthError>;

    /// Revokes the remote session behind `access_token`.
    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError>;
}

/// Backend used when no auth service URL is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unconfigured;

#[async_trait]
impl AuthBackend for Unconfigured {
    async fn get_user(&self, _access_token: &str) -> Result<User, AuthError> {
        Err(AuthError::NotConfigured)
    }

    async fn sign_in_with_password(
        &self,
        _email: &str,
        _password: &str,
    ) -> Result<Session, AuthError> {
        Err(AuthError::NotConfigured)
    }

    async fn sign_up(&self, _email: &str, _password: &str) -> Result<SignUpOutcome, AuthError> {
        Err(AuthError::NotConfigured)
    }

    async fn refresh_session(&self, _refresh_token: &str) -> Result<Session, AuthError> {
        Err(AuthError::NotConfigured)
    }

    async fn sign_out(&self, _access_token: &str) -> Result<(), AuthError> {
        Err(AuthError::NotConfigured)
    }
}
