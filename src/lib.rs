// SPDX-License-Identifier: MPL-2.0
//! `bazam` is the desktop shell of a marketplace storefront built with the
//! Iced GUI framework.
//!
//! It provides a navigation shell that follows the signed-in session, route
//! pages, and localization in eleven languages with a persisted choice.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod routes;
pub mod session;
pub mod ui;
