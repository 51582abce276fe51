// SPDX-License-Identifier: MPL-2.0
use super::Language;
use crate::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Localization service: the translation table for every supported language
/// plus the currently selected one.
pub struct I18n {
    bundles: HashMap<Language, FluentBundle<FluentResource>>,
    current: Language,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, None, &Config::default())
    }
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("current", &self.current)
            .field("loaded", &self.bundles.len())
            .finish()
    }
}

impl I18n {
    /// Builds the service and picks the initial language.
    ///
    /// Detection order: `cli_lang`, then the persisted config choice, then
    /// the system locale, then [`Language::default`].
    pub fn new(cli_lang: Option<String>, i18n_dir: Option<String>, config: &Config) -> Self {
        let system_locale = sys_locale::get_locale();
        let current = resolve_language(
            cli_lang.as_deref(),
            config.general.language.as_deref(),
            system_locale.as_deref(),
        );
        tracing::debug!(language = %current, "resolved initial language");
        Self::with_language(current, i18n_dir.as_deref().map(Path::new))
    }

    /// Builds the service with an explicit language, skipping detection.
    pub fn with_language(language: Language, i18n_dir: Option<&Path>) -> Self {
        Self {
            bundles: load_bundles(i18n_dir),
            current: language,
        }
    }

    pub fn current_language(&self) -> Language {
        self.current
    }

    pub fn set_language(&mut self, language: Language) {
        if !self.bundles.contains_key(&language) {
            tracing::warn!(%language, "no translation table loaded, default language will be used");
        }
        self.current = language;
    }

    /// Whether a translation table was loaded for `language`.
    pub fn has_language(&self, language: Language) -> bool {
        self.bundles.contains_key(&language)
    }

    /// Looks up `key` in the current language, falling back to the default
    /// language, and finally to the key itself.
    pub fn tr(&self, key: &str) -> String {
        self.lookup(key, None)
    }

    /// Same as [`I18n::tr`] with Fluent variables, e.g. `{ $email }`.
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, value.to_string());
        }
        self.lookup(key, Some(&fluent_args))
    }

    fn lookup(&self, key: &str, args: Option<&FluentArgs>) -> String {
        [self.current, Language::default()]
            .iter()
            .filter_map(|lang| self.bundles.get(lang))
            .find_map(|bundle| format_message(bundle, key, args))
            .unwrap_or_else(|| key.to_string())
    }
}

fn format_message(
    bundle: &FluentBundle<FluentResource>,
    key: &str,
    args: Option<&FluentArgs>,
) -> Option<String> {
    let pattern = bundle.get_message(key)?.value()?;
    let mut errors = vec![];
    let value = bundle.format_pattern(pattern, args, &mut errors);
    if errors.is_empty() {
        Some(value.into_owned())
    } else {
        tracing::debug!(key, ?errors, "fluent formatting failed");
        None
    }
}

/// Loads one bundle per supported language. A file named `<code>.ftl` in
/// `i18n_dir` replaces the embedded resource for that language.
fn load_bundles(i18n_dir: Option<&Path>) -> HashMap<Language, FluentBundle<FluentResource>> {
    let mut bundles = HashMap::new();

    for language in Language::ALL {
        let file_name = format!("{}.ftl", language.code());
        let source = i18n_dir
            .map(|dir| dir.join(&file_name))
            .filter(|path| path.is_file())
            .and_then(|path| match fs::read_to_string(&path) {
                Ok(content) => Some(content),
                Err(error) => {
                    tracing::warn!(path = %path.display(), %error, "unreadable translation override");
                    None
                }
            })
            .or_else(|| {
                Asset::get(&file_name)
                    .map(|content| String::from_utf8_lossy(content.data.as_ref()).into_owned())
            });

        if let Some(source) = source {
            bundles.insert(language, build_bundle(language, source));
        }
    }

    bundles
}

fn build_bundle(language: Language, source: String) -> FluentBundle<FluentResource> {
    let resource = FluentResource::try_new(source).unwrap_or_else(|(partial, errors)| {
        tracing::warn!(%language, ?errors, "translation table has syntax errors, keeping valid entries");
        partial
    });

    let mut bundle = FluentBundle::new(vec![language.langid()]);
    // Isolation marks would leak into plain widget text.
    bundle.set_use_isolating(false);
    if let Err(errors) = bundle.add_resource(resource) {
        tracing::warn!(%language, ?errors, "duplicate translation entries ignored");
    }
    bundle
}

/// Picks the first candidate that names a supported language.
pub fn resolve_language(
    cli_lang: Option<&str>,
    persisted: Option<&str>,
    system_locale: Option<&str>,
) -> Language {
    [cli_lang, persisted, system_locale]
        .into_iter()
        .flatten()
        .find_map(Language::from_code)
        .unwrap_or_default()
}
