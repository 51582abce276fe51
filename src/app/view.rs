// SPDX-License-Identifier: MPL-2.0
//! Root view: navigation shell above the page, toasts on top.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::routes::Location;
use crate::session::User;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{self, Toast};
use crate::ui::pages::{self, AuthForm, ViewContext as PageViewContext};
use iced::widget::{Column, Container, Stack};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub location: &'a Location,
    pub user: Option<&'a User>,
    pub language_menu_open: bool,
    pub auth_form: &'a AuthForm,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        user: ctx.user,
        location: ctx.location,
        language_menu_open: ctx.language_menu_open,
    })
    .map(Message::Navbar);

    let page_view = pages::view(PageViewContext {
        i18n: ctx.i18n,
        location: ctx.location,
        auth_form: ctx.auth_form,
    })
    .map(Message::Page);

    let shell = Column::new()
        .push(navbar_view)
        .push(page_view)
        .width(Length::Fill)
        .height(Length::Fill);

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Container::new(Stack::new().push(shell).push(toasts))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
