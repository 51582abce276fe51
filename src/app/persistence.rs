// SPDX-License-Identifier: MPL-2.0
//! Preference persistence.

use crate::config;
use crate::i18n::fluent::I18n;
use crate::i18n::Language;
use std::path::PathBuf;

/// Switches the active language and records it in `settings.toml`.
///
/// The switch applies even when saving fails; the returned i18n key then
/// describes the failure for a warning toast.
pub fn apply_language_change(
    i18n: &mut I18n,
    language: Language,
    config_dir: Option<PathBuf>,
) -> Option<String> {
    i18n.set_language(language);

    let (mut cfg, _) = config::load_with_override(config_dir.clone());
    cfg.general.language = Some(language.code().to_string());

    match config::save_with_override(&cfg, config_dir) {
        Ok(()) => {
            tracing::debug!(%language, "language preference saved");
            None
        }
        Err(error) => {
            tracing::warn!(%error, "failed to save language preference");
            Some("notification-config-save-error".to_string())
        }
    }
}
