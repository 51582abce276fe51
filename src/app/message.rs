// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and launch flags.

use crate::error::AuthError;
use crate::session::User;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::pages;
use std::time::Instant;

#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Page(pages::Message),
    Notification(notifications::NotificationMessage),
    /// The session client published a new user (or sign-out).
    SessionChanged(Option<User>),
    SignInCompleted(Result<User, AuthError>),
    /// `Ok(None)` means the account awaits confirmation.
    SignUpCompleted(Result<Option<User>, AuthError>),
    LogoutCompleted,
    Tick(Instant),
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional language override (e.g. `fr`, `pt-BR`).
    pub lang: Option<String>,
    /// Initial route path (e.g. `/orders`).
    pub route: Option<String>,
    /// Optional directory containing Fluent `.ftl` files overriding the
    /// embedded translations.
    pub i18n_dir: Option<String>,
    /// Optional data directory override (for `session.json`).
    /// Takes precedence over `BAZAM_DATA_DIR`.
    pub data_dir: Option<String>,
    /// Optional config directory override (for `settings.toml`).
    /// Takes precedence over `BAZAM_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
