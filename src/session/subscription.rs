// SPDX-License-Identifier: MPL-2.0
//! Iced subscription bridging [`SessionClient`] change notifications into
//! the UI event loop.
//!
//! The subscription lives as long as the application keeps returning it from
//! `subscription()`. When it is no longer returned, Iced drops the stream
//! receiver. The forwarding loop then ends on its next send, which drops the
//! underlying [`SessionSubscription`](super::SessionSubscription) and stops
//! delivery.

use super::{SessionClient, User};
use iced::futures::channel::mpsc;
use iced::futures::SinkExt;
use iced::stream;

/// Subscription ID; one stream per session client.
///
/// Carries the client so the stream builder can reach it; its hash
/// (the subscription identity) is the client id only.
#[derive(Clone)]
struct SessionWatchId(u64, SessionClient);

impl std::hash::Hash for SessionWatchId {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

/// Emits the new user (or `None`) each time the session changes.
pub fn session_changes(client: &SessionClient) -> iced::Subscription<Option<User>> {
    let client = client.clone();
    iced::Subscription::run_with(SessionWatchId(client.id(), client), |id| {
        let client = id.1.clone();
        stream::channel(16, move |output| forward_changes(client, output))
    })
}

/// Sends every session change to `output` until the receiving side is gone.
async fn forward_changes(client: SessionClient, mut output: mpsc::Sender<Option<User>>) {
    let mut changes = client.subscribe();
    while let Some(user) = changes.changed().await {
        if output.send(user).await.is_err() {
            break;
        }
    }
    changes.unsubscribe();
    tracing::debug!(
        remaining = client.subscriber_count(),
        "session stream receiver gone"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AuthError;
    use crate::session::{AuthBackend, Session, SessionStore, SignUpOutcome};
    use async_trait::async_trait;
    use iced::futures::StreamExt;
    use tempfile::tempdir;

    fn grace() -> User {
        User {
            id: "u-grace".into(),
            email: Some("grace@example.com".into()),
        }
    }

    struct AcceptAll;

    #[async_trait]
    impl AuthBackend for AcceptAll {
        async fn get_user(&self, _access_token: &str) -> Result<User, AuthError> {
            Ok(grace())
        }

        async fn sign_in_with_password(
            &self,
            _email: &str,
            _password: &str,
        ) -> Result<Session, AuthError> {
            Ok(Session {
                access_token: "token".into(),
                refresh_token: None,
                expires_at: None,
                user: grace(),
            })
        }

        async fn sign_up(&self, _email: &str, _password: &str) -> Result<SignUpOutcome, AuthError> {
            Err(AuthError::NotConfigured)
        }

        async fn refresh_session(&self, _refresh_token: &str) -> Result<Session, AuthError> {
            Err(AuthError::NotConfigured)
        }

        async fn sign_out(&self, _access_token: &str) -> Result<(), AuthError> {
            Ok(())
        }
    }

    async fn wait_for_subscribers(client: &SessionClient, count: usize) {
        while client.subscriber_count() != count {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test]
    async fn dropped_receiver_ends_forwarding_and_unsubscribes() {
        let dir = tempdir().expect("tempdir");
        let client = SessionClient::new(
            AcceptAll,
            SessionStore::with_override(Some(dir.path().to_path_buf())),
        );
        let (tx, mut rx) = mpsc::channel(16);
        let forwarding = tokio::spawn(forward_changes(client.clone(), tx));
        wait_for_subscribers(&client, 1).await;

        client.sign_in("grace@example.com", "pw").await.expect("sign in");
        assert_eq!(rx.next().await, Some(Some(grace())));

        drop(rx);
        client.sign_out().await;

        forwarding.await.expect("forwarding task");
        assert_eq!(client.subscriber_count(), 0);
    }
}
