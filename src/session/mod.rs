// SPDX-License-Identifier: MPL-2.0
//! Session client: a thin facade over the hosted auth service.
//!
//! The client owns the single session slot of the application and publishes
//! "current user or none" on a change-notification channel. Views never
//! mutate the session; they observe it through [`SessionClient::subscribe`]
//! (or the Iced adapter in [`subscription`]).
//!
//! An absent session is the normal logged-out state. Failures of the remote
//! service are logged and otherwise treated exactly like absence.

pub mod backend;
pub mod store;
pub mod subscription;
pub mod supabase;

pub use backend::{AuthBackend, SignUpOutcome, Unconfigured};
pub use store::SessionStore;
pub use supabase::SupabaseAuth;

use crate::config::{AuthConfig, SESSION_REFRESH_MARGIN_SECS};
use crate::error::AuthError;
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::watch;

/// Authenticated principal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Tokens issued by the auth service for one signed-in user.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    pub user: User,
}

impl Session {
    /// Whether the access token expires before `now + margin`.
    pub fn expires_within(&self, now: DateTime<Utc>, margin: TimeDelta) -> bool {
        self.expires_at.is_some_and(|at| at <= now + margin)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Tokens stay out of logs.
        f.debug_struct("Session")
            .field("user", &self.user)
            .field("expires_at", &self.expires_at)
            .finish_non_exhaustive()
    }
}

/// The session slot. `generation` changes on every commit, so a fetch that
/// started before a sign-in or sign-out can tell its result is stale.
#[derive(Default)]
struct Slot {
    session: Option<Session>,
    generation: u64,
}

struct Inner {
    id: u64,
    backend: Box<dyn AuthBackend>,
    store: SessionStore,
    slot: Mutex<Slot>,
    user_tx: watch::Sender<Option<User>>,
}

/// Outcome of checking a known session against the service.
enum Validation {
    Valid(Session),
    Rejected,
    /// The service could not be reached; the session is kept for a retry.
    Unreachable { session: Session, refreshed: bool },
}

/// Cloneable handle on the application's session.
#[derive(Clone)]
pub struct SessionClient {
    inner: Arc<Inner>,
}

impl fmt::Debug for SessionClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionClient")
            .field("id", &self.inner.id)
            .field("user", &self.user())
            .finish()
    }
}

impl SessionClient {
    pub fn new(backend: impl AuthBackend + 'static, store: SessionStore) -> Self {
        static NEXT_ID: AtomicU64 = AtomicU64::new(0);
        let (user_tx, _) = watch::channel(None);
        Self {
            inner: Arc::new(Inner {
                id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
                backend: Box::new(backend),
                store,
                slot: Mutex::new(Slot::default()),
                user_tx,
            }),
        }
    }

    /// Client for the service described in `[auth]`, or a permanently
    /// logged-out client when no service is configured.
    pub fn from_config(config: &AuthConfig, store: SessionStore) -> Self {
        match SupabaseAuth::from_config(config) {
            Ok(backend) => Self::new(backend, store),
            Err(error) => {
                tracing::warn!(%error, "auth service unavailable, running logged out");
                Self::new(Unconfigured, store)
            }
        }
    }

    /// Identifies this client (and its clones) for subscription bookkeeping.
    pub fn id(&self) -> u64 {
        self.inner.id
    }

    /// Last published user, without contacting the service.
    pub fn user(&self) -> Option<User> {
        self.inner.user_tx.borrow().clone()
    }

    /// Fetches the current session, refreshing or validating it against the
    /// service, and publishes the outcome.
    ///
    /// A sign-in or sign-out that completes while the fetch is in flight
    /// wins: the fetch result is then discarded.
    pub async fn current_user(&self) -> Option<User> {
        let (session, generation) = {
            let slot = self.slot();
            match slot.session.clone().or_else(|| self.inner.store.load()) {
                Some(session) => (session, slot.generation),
                None => {
                    self.publish(None);
                    return None;
                }
            }
        };

        let validation = self.validate(session).await;

        let mut slot = self.slot();
        if slot.generation != generation {
            tracing::debug!("session changed during fetch, discarding result");
            return self.user();
        }

        match validation {
            Validation::Valid(session) => {
                let user = session.user.clone();
                self.establish_locked(&mut slot, session);
                Some(user)
            }
            Validation::Rejected => {
                self.forget_locked(&mut slot);
                None
            }
            Validation::Unreachable { session, refreshed } => {
                if refreshed {
                    self.save(&session);
                }
                slot.session = Some(session);
                self.publish(None);
                None
            }
        }
    }

    async fn validate(&self, mut session: Session) -> Validation {
        let mut refreshed = false;

        let margin = TimeDelta::seconds(SESSION_REFRESH_MARGIN_SECS);
        if session.expires_within(Utc::now(), margin) {
            let Some(refresh_token) = session.refresh_token.clone() else {
                tracing::debug!("stored session expired without refresh token");
                return Validation::Rejected;
            };
            match self.inner.backend.refresh_session(&refresh_token).await {
                Ok(renewed) => {
                    session = renewed;
                    refreshed = true;
                }
                Err(error) => {
                    tracing::warn!(%error, "session refresh failed, treating as logged out");
                    return if is_rejection(&error) {
                        Validation::Rejected
                    } else {
                        Validation::Unreachable { session, refreshed }
                    };
                }
            }
        }

        match self.inner.backend.get_user(&session.access_token).await {
            Ok(user) => {
                session.user = user;
                Validation::Valid(session)
            }
            Err(error) => {
                tracing::warn!(%error, "session fetch failed, treating as logged out");
                if is_rejection(&error) {
                    Validation::Rejected
                } else {
                    Validation::Unreachable { session, refreshed }
                }
            }
        }
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let session = self
            .inner
            .backend
            .sign_in_with_password(email, password)
            .await?;
        let user = session.user.clone();
        self.establish_locked(&mut self.slot(), session);
        Ok(user)
    }

    /// Creates an account. Returns the signed-in user, or `None` when the
    /// service requires a confirmation step first.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<Option<User>, AuthError> {
        match self.inner.backend.sign_up(email, password).await? {
            SignUpOutcome::SignedIn(session) => {
                let user = session.user.clone();
                self.establish_locked(&mut self.slot(), session);
                Ok(Some(user))
            }
            SignUpOutcome::ConfirmationRequired(user) => {
                tracing::debug!(user = %user.id, "sign-up awaiting confirmation");
                Ok(None)
            }
        }
    }

    /// Clears the session locally and revokes it remotely (best effort).
    pub async fn sign_out(&self) {
        let session = {
            let mut slot = self.slot();
            let session = slot.session.take().or_else(|| self.inner.store.load());
            self.forget_locked(&mut slot);
            session
        };

        if let Some(session) = session {
            if let Err(error) = self.inner.backend.sign_out(&session.access_token).await {
                tracing::warn!(%error, "remote sign-out failed; local session cleared anyway");
            }
        }
    }

    /// Subscribes to session changes. Dropping the returned handle (or
    /// calling [`SessionSubscription::unsubscribe`]) stops delivery.
    pub fn subscribe(&self) -> SessionSubscription {
        SessionSubscription {
            rx: self.inner.user_tx.subscribe(),
        }
    }

    /// Number of live [`SessionSubscription`]s.
    pub fn subscriber_count(&self) -> usize {
        self.inner.user_tx.receiver_count()
    }

    fn slot(&self) -> MutexGuard<'_, Slot> {
        self.inner
            .slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn save(&self, session: &Session) {
        if let Err(error) = self.inner.store.save(session) {
            tracing::warn!(%error, "could not persist session");
        }
    }

    fn establish_locked(&self, slot: &mut Slot, session: Session) {
        self.save(&session);
        let user = session.user.clone();
        slot.session = Some(session);
        slot.generation += 1;
        tracing::debug!(user = %user.id, "session established");
        self.publish(Some(user));
    }

    fn forget_locked(&self, slot: &mut Slot) {
        slot.session = None;
        slot.generation += 1;
        if let Err(error) = self.inner.store.clear() {
            tracing::warn!(%error, "could not remove persisted session");
        }
        self.publish(None);
    }

    fn publish(&self, user: Option<User>) {
        let changed = self.inner.user_tx.send_if_modified(|current| {
            if *current == user {
                false
            } else {
                *current = user;
                true
            }
        });
        if changed {
            tracing::debug!(subscribers = self.subscriber_count(), "session change published");
        }
    }
}

/// The service definitively refused the token, as opposed to being unreachable.
fn is_rejection(error: &AuthError) -> bool {
    matches!(
        error,
        AuthError::Status {
            status: 400 | 401 | 403,
            ..
        } | AuthError::InvalidCredentials(_)
    )
}

/// Receiving end of the session change stream.
#[derive(Debug)]
pub struct SessionSubscription {
    rx: watch::Receiver<Option<User>>,
}

impl SessionSubscription {
    /// Latest value, whether or not it was already observed.
    pub fn current(&self) -> Option<User> {
        self.rx.borrow().clone()
    }

    /// Waits for the next change and returns the new user. Intermediate
    /// values published in quick succession collapse into the last one.
    /// Returns `None` once the client is gone.
    pub async fn changed(&mut self) -> Option<Option<User>> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }

    pub fn unsubscribe(self) {}
}
