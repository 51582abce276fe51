// SPDX-License-Identifier: MPL-2.0
//! Notification queue and lifecycle.

use super::notification::{Notification, NotificationId, Severity};
use crate::config::MAX_VISIBLE_NOTIFICATIONS;
use std::collections::VecDeque;
use std::time::Instant;

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
}

/// Visible toasts (newest first) plus an overflow queue.
#[derive(Debug, Default)]
pub struct Manager {
    visible: VecDeque<Notification>,
    queue: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, mut notification: Notification) {
        match notification.severity() {
            Severity::Warning => tracing::warn!(key = notification.message_key(), "warning toast"),
            Severity::Error => tracing::warn!(key = notification.message_key(), "error toast"),
            Severity::Success | Severity::Info => {
                tracing::debug!(key = notification.message_key(), "toast");
            }
        }

        if self.visible.len() < MAX_VISIBLE_NOTIFICATIONS {
            notification.mark_shown(Instant::now());
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Removes a toast wherever it is; returns whether it existed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue(Instant::now());
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }

        false
    }

    /// Drops visible toasts whose display time has run out.
    pub fn tick(&mut self, now: Instant) {
        let before = self.visible.len();
        self.visible.retain(|n| !n.is_expired(now));
        if self.visible.len() < before {
            self.promote_from_queue(now);
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    /// Removes stale auth failures once the user gets in.
    pub fn clear_auth_errors(&mut self) {
        let is_auth_error = |n: &Notification| n.message_key().starts_with("notification-auth-");
        let before = self.visible.len();
        self.visible.retain(|n| !is_auth_error(n));
        self.queue.retain(|n| !is_auth_error(n));
        if self.visible.len() < before {
            self.promote_from_queue(Instant::now());
        }
    }

    /// Moves queued toasts onto the stack in arrival order. Queued toasts
    /// are newer than any visible one, so they go on top.
    fn promote_from_queue(&mut self, now: Instant) {
        while self.visible.len() < MAX_VISIBLE_NOTIFICATIONS {
            let Some(mut notification) = self.queue.pop_front() else {
                break;
            };
            notification.mark_shown(now);
            self.visible.push_front(notification);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.visible_count(), 0);
        assert_eq!(manager.queued_count(), 0);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn push_queues_when_visible_is_full() {
        let mut manager = Manager::new();
        for i in 0..MAX_VISIBLE_NOTIFICATIONS {
            manager.push(Notification::success(format!("toast-{i}")));
        }
        assert_eq!(manager.visible_count(), MAX_VISIBLE_NOTIFICATIONS);
        assert_eq!(manager.queued_count(), 0);

        manager.push(Notification::success("queued"));
        assert_eq!(manager.visible_count(), MAX_VISIBLE_NOTIFICATIONS);
        assert_eq!(manager.queued_count(), 1);
    }

    #[test]
    fn dismiss_promotes_from_queue() {
        let mut manager = Manager::new();
        let first = Notification::error("notification-auth-network");
        let first_id = first.id();
        manager.push(first);
        for i in 1..MAX_VISIBLE_NOTIFICATIONS {
            manager.push(Notification::error(format!("toast-{i}")));
        }
        manager.push(Notification::info("queued"));

        assert!(manager.dismiss(first_id));
        assert_eq!(manager.visible_count(), MAX_VISIBLE_NOTIFICATIONS);
        assert_eq!(manager.queued_count(), 0);
        assert!(manager.visible().any(|n| n.message_key() == "queued"));
    }

    #[test]
    fn promoted_toasts_stack_newest_first() {
        let mut manager = Manager::new();
        let oldest = Notification::error("toast-0");
        let oldest_id = oldest.id();
        manager.push(oldest);
        for i in 1..MAX_VISIBLE_NOTIFICATIONS {
            manager.push(Notification::error(format!("toast-{i}")));
        }
        manager.push(Notification::error("queued-first"));
        manager.push(Notification::error("queued-second"));

        manager.dismiss(oldest_id);

        let keys: Vec<_> = manager.visible().map(Notification::message_key).collect();
        assert_eq!(keys[0], "queued-first");
        assert_eq!(keys[1], format!("toast-{}", MAX_VISIBLE_NOTIFICATIONS - 1));
        assert_eq!(manager.queued_count(), 1);
    }

    #[test]
    fn promoted_toast_gets_full_display_time() {
        let start = Instant::now();
        let mut manager = Manager::new();
        for i in 0..MAX_VISIBLE_NOTIFICATIONS {
            manager.push(Notification::success(format!("toast-{i}")));
        }
        manager.push(Notification::info("waited"));

        // The visible successes expire well after the queued toast was created.
        let promoted_at = start + Duration::from_secs(10);
        manager.tick(promoted_at);
        assert_eq!(manager.visible_count(), 1);
        assert_eq!(manager.queued_count(), 0);

        manager.tick(promoted_at + Duration::from_millis(100));
        assert!(manager.visible().any(|n| n.message_key() == "waited"));

        manager.tick(promoted_at + Duration::from_secs(3));
        assert!(!manager.has_notifications());
    }

    #[test]
    fn dismiss_nonexistent_returns_false() {
        let mut manager = Manager::new();
        let stray = Notification::success("stray").id();
        assert!(!manager.dismiss(stray));
    }

    #[test]
    fn handle_message_dismisses() {
        let mut manager = Manager::new();
        let toast = Notification::success("notification-login-success");
        let id = toast.id();
        manager.push(toast);

        manager.handle_message(&Message::Dismiss(id));
        assert!(!manager.has_notifications());
    }

    #[test]
    fn tick_expires_only_timed_toasts() {
        let mut manager = Manager::new();
        manager.push(Notification::success("notification-login-success"));
        manager.push(Notification::error("notification-auth-failed"));

        manager.tick(Instant::now() + Duration::from_secs(10));
        assert_eq!(manager.visible_count(), 1);
        assert!(manager
            .visible()
            .all(|n| n.severity() == Severity::Error));
    }

    #[test]
    fn tick_before_expiry_keeps_toasts() {
        let mut manager = Manager::new();
        manager.push(Notification::warning("notification-config-save-error"));
        manager.tick(Instant::now());
        assert_eq!(manager.visible_count(), 1);
    }

    #[test]
    fn clear_auth_errors_keeps_other_toasts() {
        let mut manager = Manager::new();
        manager.push(Notification::error("notification-auth-invalid-credentials"));
        manager.push(Notification::error("notification-auth-network"));
        manager.push(Notification::warning("notification-config-load-error"));
        manager.push(Notification::success("notification-login-success"));
        assert_eq!(manager.queued_count(), 1);

        manager.clear_auth_errors();

        assert_eq!(manager.visible_count(), 2);
        assert_eq!(manager.queued_count(), 0);
        assert!(manager
            .visible()
            .all(|n| !n.message_key().starts_with("notification-auth-")));
    }
}
