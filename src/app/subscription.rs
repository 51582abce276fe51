// SPDX-License-Identifier: MPL-2.0
//! Subscriptions feeding external events into the update loop.

use super::Message;
use crate::config::NOTIFICATION_TICK_MS;
use crate::session::{subscription::session_changes, SessionClient};
use crate::ui::navbar;
use iced::{event, keyboard, time, Subscription};
use std::time::Duration;

/// Session changes published by the client, for as long as the app runs.
pub fn create_session_subscription(session: &SessionClient) -> Subscription<Message> {
    session_changes(session).map(Message::SessionChanged)
}

/// Clock driving toast expiry; idle when no toast is shown.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(NOTIFICATION_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Escape closes the language menu while it is open.
pub fn create_menu_subscription(language_menu_open: bool) -> Subscription<Message> {
    if !language_menu_open {
        return Subscription::none();
    }
    event::listen_with(|event, _status, _window| match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Escape),
            ..
        }) => Some(Message::Navbar(navbar::Message::CloseLanguageMenu)),
        _ => None,
    })
}
