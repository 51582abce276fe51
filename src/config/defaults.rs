// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! # Categories
//!
//! - **Localization**: fallback language
//! - **Auth**: HTTP client limits for the hosted auth service
//! - **Notifications**: toast display limits

// ==========================================================================
// Localization Defaults
// ==========================================================================

/// Language used when nothing else resolves, and as the lookup fallback.
pub const DEFAULT_LANGUAGE_CODE: &str = "en";

// ==========================================================================
// Auth Defaults
// ==========================================================================

/// Timeout applied to every request sent to the auth service.
pub const AUTH_REQUEST_TIMEOUT_SECS: u64 = 15;

/// Sessions expiring within this margin are refreshed before use.
pub const SESSION_REFRESH_MARGIN_SECS: i64 = 60;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Maximum number of toasts shown at once; older ones are dropped.
pub const MAX_VISIBLE_NOTIFICATIONS: usize = 3;

/// Tick interval driving toast auto-dismiss.
pub const NOTIFICATION_TICK_MS: u64 = 100;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(AUTH_REQUEST_TIMEOUT_SECS > 0);
    assert!(SESSION_REFRESH_MARGIN_SECS >= 0);
    assert!(MAX_VISIBLE_NOTIFICATIONS > 0);
    assert!(NOTIFICATION_TICK_MS > 0);
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    #[test]
    fn default_language_is_supported() {
        assert_eq!(
            Language::from_code(DEFAULT_LANGUAGE_CODE),
            Some(Language::default())
        );
    }

    #[test]
    fn refresh_margin_covers_request_timeout() {
        assert!(SESSION_REFRESH_MARGIN_SECS as u64 >= AUTH_REQUEST_TIMEOUT_SECS);
    }
}
