// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for user feedback.
//!
//! Sign-in results, logout confirmations and settings failures surface as
//! toasts stacked in the bottom corner of the window.
//!
//! - Success/info toasts last 3s, warnings 5s, errors stay until dismissed
//! - At most three toasts are visible; the rest wait in a queue
//! - Messages are i18n keys resolved at render time, so a language switch
//!   re-translates toasts already on screen

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
