// SPDX-License-Identifier: MPL-2.0
use async_trait::async_trait;
use bazam::config::{self, Config};
use bazam::error::AuthError;
use bazam::i18n::fluent::{resolve_language, I18n};
use bazam::i18n::Language;
use bazam::session::{AuthBackend, Session, SessionClient, SessionStore, SignUpOutcome, User};
use bazam::ui::navbar::{affordances, Affordance};
use tempfile::tempdir;

#[test]
fn every_language_choice_survives_reload() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let settings = dir.path().join("settings.toml");
    let english = I18n::with_language(Language::En, None).tr("nav-login");

    for language in Language::ALL {
        let mut cfg = Config::default();
        cfg.general.language = Some(language.code().to_string());
        config::save_to_path(&cfg, &settings).expect("Failed to write config file");

        let reloaded = config::load_from_path(&settings).expect("Failed to load config");
        let i18n = I18n::new(None, None, &reloaded);

        assert_eq!(i18n.current_language(), language);
        if language != Language::En {
            assert_ne!(i18n.tr("nav-login"), english, "{language} shows English text");
        }
    }
}

#[test]
fn cli_language_beats_persisted_choice() {
    let mut cfg = Config::default();
    cfg.general.language = Some("de".to_string());
    let i18n = I18n::new(Some("ja".to_string()), None, &cfg);
    assert_eq!(i18n.current_language(), Language::Ja);
}

#[test]
fn unsupported_codes_fall_back_without_error() {
    let mut cfg = Config::default();
    cfg.general.language = Some("tlh".to_string());
    let i18n = I18n::new(Some("xx-YY".to_string()), None, &cfg);
    // Falls through to the system locale, which may be anything supported.
    assert!(Language::ALL.contains(&i18n.current_language()));

    assert_eq!(Language::from_code("tlh"), None);
    assert_eq!(resolve_language(Some("tlh"), None, None), Language::En);
    assert_eq!(Language::from_code("fr-CA"), Some(Language::Fr));
    assert_eq!(Language::from_code("zh-Hans-CN"), Some(Language::Zh));
}

#[test]
fn navbar_offers_exactly_one_link_set() {
    let user = User {
        id: "u1".into(),
        email: None,
    };
    let anonymous = affordances(None);
    let signed_in = affordances(Some(&user));

    assert_eq!(anonymous, &[Affordance::Login, Affordance::Register]);
    assert_eq!(
        signed_in,
        &[Affordance::Dashboard, Affordance::Support, Affordance::Logout]
    );
    assert!(anonymous.iter().all(|a| !signed_in.contains(a)));
}

/// Accepts one account and hands out a fixed token.
struct SingleAccount;

fn grace() -> User {
    User {
        id: "u-grace".into(),
        email: Some("grace@example.com".into()),
    }
}

#[async_trait]
impl AuthBackend for SingleAccount {
    async fn get_user(&self, access_token: &str) -> Result<User, AuthError> {
        if access_token == "token" {
            Ok(grace())
        } else {
            Err(AuthError::Status {
                status: 401,
                message: "invalid JWT".into(),
            })
        }
    }

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, AuthError> {
        if email == "grace@example.com" && password == "cobol" {
            Ok(Session {
                access_token: "token".into(),
                refresh_token: None,
                expires_at: None,
                user: grace(),
            })
        } else {
            Err(AuthError::InvalidCredentials("Invalid login credentials".into()))
        }
    }

    async fn sign_up(&self, _email: &str, _password: &str) -> Result<SignUpOutcome, AuthError> {
        Ok(SignUpOutcome::ConfirmationRequired(grace()))
    }

    async fn refresh_session(&self, _refresh_token: &str) -> Result<Session, AuthError> {
        Err(AuthError::Status {
            status: 400,
            message: "invalid refresh token".into(),
        })
    }

    async fn sign_out(&self, _access_token: &str) -> Result<(), AuthError> {
        Ok(())
    }
}

#[tokio::test]
async fn sign_in_then_logout_round_trip() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let store = SessionStore::with_override(Some(dir.path().to_path_buf()));
    let client = SessionClient::new(SingleAccount, store.clone());
    let mut changes = client.subscribe();

    assert_eq!(client.current_user().await, None);
    assert_eq!(affordances(client.user().as_ref()).len(), 2);

    client
        .sign_in("grace@example.com", "cobol")
        .await
        .expect("sign in");
    assert_eq!(changes.changed().await, Some(Some(grace())));
    assert_eq!(affordances(client.user().as_ref()).len(), 3);
    assert!(store.load().is_some());

    client.sign_out().await;
    assert_eq!(changes.changed().await, Some(None));
    assert!(store.load().is_none());

    // A restart finds nobody signed in.
    let restarted = SessionClient::new(SingleAccount, store);
    assert_eq!(restarted.current_user().await, None);
}

#[tokio::test]
async fn unsubscribed_handles_stop_receiving() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let client = SessionClient::new(
        SingleAccount,
        SessionStore::with_override(Some(dir.path().to_path_buf())),
    );

    let kept = client.subscribe();
    let dropped = client.subscribe();
    assert_eq!(client.subscriber_count(), 2);

    dropped.unsubscribe();
    assert_eq!(client.subscriber_count(), 1);

    client
        .sign_in("grace@example.com", "cobol")
        .await
        .expect("sign in");
    assert_eq!(kept.current(), Some(grace()));
}
