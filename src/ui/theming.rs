// SPDX-License-Identifier: MPL-2.0
//! Light/dark theme selection.

use crate::ui::design_tokens::palette;
use iced::theme::Palette;
use iced::Theme;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // Default to light when detection fails
            ThemeMode::System => matches!(dark_light::detect(), Ok(dark_light::Mode::Dark)),
        }
    }

    /// Builds the iced theme carrying the storefront brand colors.
    #[must_use]
    pub fn theme(self) -> Theme {
        let (name, base) = if self.is_dark() {
            ("Bazam Dark", Palette::DARK)
        } else {
            ("Bazam Light", Palette::LIGHT)
        };
        Theme::custom(
            name.to_string(),
            Palette {
                primary: if self.is_dark() {
                    palette::BRAND_400
                } else {
                    palette::BRAND_500
                },
                success: palette::SUCCESS_500,
                danger: palette::ERROR_500,
                ..base
            },
        )
    }
}
