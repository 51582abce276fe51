// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! exposes a `Message`, an `update` returning an `Event` for the parent, and a
//! `view` fed by a borrowed context.
//!
//! - [`navbar`] - Navigation shell rendered on every route
//! - [`pages`] - Route pages and the login/register form
//! - [`notifications`] - Toast notifications
//! - [`styles`] - Shared widget styles
//! - [`design_tokens`] - Design system constants
//! - [`theming`] - Light/Dark/System theme mode

pub mod design_tokens;
pub mod navbar;
pub mod notifications;
pub mod pages;
pub mod styles;
pub mod theming;
