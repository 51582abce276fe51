// SPDX-License-Identifier: MPL-2.0
//! Message handlers for [`App::update`](super::App).
//!
//! Each handler borrows the pieces of state it touches through
//! [`UpdateContext`] and returns the follow-up [`Task`].

use super::{persistence, Message};
use crate::error::AuthError;
use crate::i18n::fluent::I18n;
use crate::routes::{Location, Route};
use crate::session::{SessionClient, User};
use crate::ui::navbar;
use crate::ui::notifications::{self, Notification};
use crate::ui::pages::{self, AuthForm};
use iced::Task;
use std::path::PathBuf;

pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub location: &'a mut Location,
    pub language_menu_open: &'a mut bool,
    pub user: &'a mut Option<User>,
    pub session: &'a SessionClient,
    pub auth_form: &'a mut AuthForm,
    pub notifications: &'a mut notifications::Manager,
    pub config_dir: Option<PathBuf>,
}

pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match navbar::update(message, ctx.language_menu_open) {
        navbar::Event::None => Task::none(),
        navbar::Event::Navigate(route) => {
            navigate(ctx, route);
            Task::none()
        }
        navbar::Event::LanguageSelected(language) => {
            if let Some(key) =
                persistence::apply_language_change(ctx.i18n, language, ctx.config_dir.clone())
            {
                ctx.notifications.push(Notification::warning(key));
            }
            Task::none()
        }
        navbar::Event::Logout => {
            Task::perform(sign_out(ctx.session.clone()), std::convert::identity)
        }
    }
}

/// Ends the session, then reports back so the shell can leave for `/login`.
pub(super) async fn sign_out(session: SessionClient) -> Message {
    session.sign_out().await;
    Message::LogoutCompleted
}

pub fn handle_page_message(ctx: &mut UpdateContext<'_>, message: pages::Message) -> Task<Message> {
    match ctx.auth_form.update(message) {
        pages::Event::None => Task::none(),
        pages::Event::Navigate(route) => {
            navigate(ctx, route);
            Task::none()
        }
        pages::Event::SignIn { email, password } => {
            let session = ctx.session.clone();
            Task::perform(
                async move { session.sign_in(&email, &password).await },
                Message::SignInCompleted,
            )
        }
        pages::Event::SignUp { email, password } => {
            let session = ctx.session.clone();
            Task::perform(
                async move { session.sign_up(&email, &password).await },
                Message::SignUpCompleted,
            )
        }
    }
}

pub fn handle_session_changed(ctx: &mut UpdateContext<'_>, user: Option<User>) {
    if *ctx.user != user {
        tracing::debug!(
            signed_in = user.is_some(),
            "session changed"
        );
    }
    *ctx.user = user;
}

pub fn handle_sign_in_completed(ctx: &mut UpdateContext<'_>, result: Result<User, AuthError>) {
    match result {
        Ok(user) => signed_in(ctx, user),
        Err(error) => auth_failed(ctx, &error),
    }
}

pub fn handle_sign_up_completed(
    ctx: &mut UpdateContext<'_>,
    result: Result<Option<User>, AuthError>,
) {
    match result {
        Ok(Some(user)) => signed_in(ctx, user),
        Ok(None) => {
            ctx.auth_form.reset();
            ctx.notifications
                .push(Notification::info("notification-register-confirm"));
            navigate(ctx, Route::Login);
        }
        Err(error) => auth_failed(ctx, &error),
    }
}

pub fn handle_logout_completed(ctx: &mut UpdateContext<'_>) {
    *ctx.user = None;
    ctx.notifications
        .push(Notification::success("notification-logout-success"));
    navigate(ctx, Route::Login);
}

fn signed_in(ctx: &mut UpdateContext<'_>, user: User) {
    tracing::info!(user = %user.id, "signed in");
    ctx.auth_form.reset();
    ctx.notifications.clear_auth_errors();
    let toast = match &user.email {
        Some(email) => Notification::success("signed-in-as").with_arg("email", email.as_str()),
        None => Notification::success("notification-login-success"),
    };
    ctx.notifications.push(toast);
    *ctx.user = Some(user);
    navigate(ctx, Route::Dashboard);
}

fn auth_failed(ctx: &mut UpdateContext<'_>, error: &AuthError) {
    tracing::warn!(%error, "authentication request failed");
    ctx.auth_form.finish();
    ctx.notifications.push(Notification::error(error.i18n_key()));
}

/// Moves to `route`, dropping half-typed credentials when leaving a form.
fn navigate(ctx: &mut UpdateContext<'_>, route: Route) {
    let target = Location::Page(route);
    if *ctx.location == target {
        return;
    }
    tracing::debug!(path = route.path(), "navigate");
    if !ctx.auth_form.is_pending() {
        ctx.auth_form.reset();
    }
    *ctx.location = target;
}
