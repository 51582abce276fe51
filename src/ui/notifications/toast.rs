// SPDX-License-Identifier: MPL-2.0
//! Toast widget rendering.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length};

pub struct Toast;

impl Toast {
    /// Renders a single toast: message then dismiss button.
    pub fn view<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
        let args: Vec<(&str, &str)> = notification
            .message_args()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        let message_text = i18n.tr_with_args(notification.message_key(), &args);

        let dismiss_button = button(text(i18n.tr("notification-dismiss")).size(typography::CAPTION))
            .on_press(Message::Dismiss(notification.id()))
            .padding(spacing::XXS)
            .style(styles::link);

        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(
                Container::new(Text::new(message_text).size(typography::BODY))
                    .width(Length::Fill),
            )
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(styles::toast(notification.severity().color()))
            .into()
    }

    /// Stacks visible toasts in the bottom-right corner (bottom-left for
    /// right-to-left languages).
    pub fn view_overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
        let toasts: Vec<Element<'a, Message>> = manager
            .visible()
            .map(|notification| Self::view(notification, i18n))
            .collect();

        if toasts.is_empty() {
            return Space::new().width(Length::Shrink).height(Length::Shrink).into();
        }

        let horizontal = if i18n.current_language().is_rtl() {
            alignment::Horizontal::Left
        } else {
            alignment::Horizontal::Right
        };

        Container::new(Column::with_children(toasts).spacing(spacing::XS))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(horizontal)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::MD)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_renders_empty_and_filled() {
        let i18n = I18n::default();
        let mut manager = Manager::new();
        let _empty = Toast::view_overlay(&manager, &i18n);
        drop(_empty);

        manager.push(Notification::error("notification-auth-network"));
        manager.push(Notification::success("signed-in-as").with_arg("email", "a@b.c"));
        let _filled = Toast::view_overlay(&manager, &i18n);
    }
}
