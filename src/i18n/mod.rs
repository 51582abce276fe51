// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the storefront.
//!
//! This module provides localization capabilities using the Fluent localization system.
//!
//! # Features
//!
//! - Closed set of supported languages ([`Language`])
//! - Language detection from CLI, persisted config, or system settings
//! - Embedded `.ftl` translation tables, optionally overridden from a directory
//! - Runtime language switching
//! - Fallback to the default language when a translation is missing

pub mod fluent;
pub mod language;

pub use language::Language;
