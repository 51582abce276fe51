// SPDX-License-Identifier: MPL-2.0
//! Page bodies shown under the navigation shell.
//!
//! Most routes render a heading and a short description. The login and
//! register routes carry an email/password [`AuthForm`].

use crate::i18n::fluent::I18n;
use crate::routes::{Location, Route};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text_input, Column, Container, Text};
use iced::{alignment::Horizontal, Element, Length};
use std::fmt;

/// Whether the form creates an account or opens a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    fn route(self) -> Route {
        match self {
            AuthMode::Login => Route::Login,
            AuthMode::Register => Route::Register,
        }
    }

    fn other(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        }
    }
}

/// Email/password form state shared by the login and register pages.
#[derive(Clone, Default)]
pub struct AuthForm {
    email: String,
    password: String,
    pending: bool,
}

impl fmt::Debug for AuthForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthForm")
            .field("email", &self.email)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    EmailChanged(String),
    PasswordChanged(String),
    Submit(AuthMode),
    SwitchTo(AuthMode),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    SignIn { email: String, password: String },
    SignUp { email: String, password: String },
    Navigate(Route),
}

impl AuthForm {
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::EmailChanged(email) => {
                self.email = email;
                Event::None
            }
            Message::PasswordChanged(password) => {
                self.password = password;
                Event::None
            }
            Message::Submit(mode) => {
                if self.pending || !self.can_submit() {
                    return Event::None;
                }
                self.pending = true;
                let email = self.email.trim().to_string();
                let password = self.password.clone();
                match mode {
                    AuthMode::Login => Event::SignIn { email, password },
                    AuthMode::Register => Event::SignUp { email, password },
                }
            }
            Message::SwitchTo(mode) => Event::Navigate(mode.route()),
        }
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.email.trim().is_empty() && !self.password.is_empty()
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Re-enables the form after the request failed.
    pub fn finish(&mut self) {
        self.pending = false;
    }

    /// Forgets the credentials once the request succeeded.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn view<'a>(&'a self, i18n: &'a I18n, mode: AuthMode) -> Element<'a, Message> {
        let email_input = text_input(&i18n.tr("form-email-label"), &self.email)
            .on_input(Message::EmailChanged)
            .padding(spacing::XS);

        let mut password_input = text_input(&i18n.tr("form-password-label"), &self.password)
            .secure(true)
            .on_input(Message::PasswordChanged)
            .padding(spacing::XS);

        let submit_label = match mode {
            AuthMode::Login => i18n.tr("form-login-submit"),
            AuthMode::Register => i18n.tr("form-register-submit"),
        };
        let mut submit = button(Text::new(submit_label))
            .padding([spacing::XS, spacing::MD])
            .style(styles::primary);
        if self.can_submit() && !self.pending {
            submit = submit.on_press(Message::Submit(mode));
            password_input = password_input.on_submit(Message::Submit(mode));
        }

        let switch_label = match mode {
            AuthMode::Login => i18n.tr("form-switch-to-register"),
            AuthMode::Register => i18n.tr("form-switch-to-login"),
        };
        let switch = button(Text::new(switch_label).size(typography::CAPTION))
            .on_press(Message::SwitchTo(mode.other()))
            .style(styles::link);

        Column::new()
            .spacing(spacing::SM)
            .width(Length::Fixed(sizing::FORM_WIDTH))
            .push(Text::new(i18n.tr(mode.route().title_key())).size(typography::TITLE_LG))
            .push(Text::new(i18n.tr("form-email-label")).size(typography::CAPTION))
            .push(email_input)
            .push(Text::new(i18n.tr("form-password-label")).size(typography::CAPTION))
            .push(password_input)
            .push(submit)
            .push(switch)
            .into()
    }
}

/// i18n key of the description under each placeholder heading.
fn description_key(route: Route) -> Option<&'static str> {
    match route {
        Route::Home => Some("page-home-description"),
        Route::Dashboard => Some("page-dashboard-description"),
        Route::CreateProduct => Some("page-create-product-description"),
        Route::Orders => Some("page-orders-description"),
        Route::Support => Some("page-support-description"),
        Route::Login | Route::Register => None,
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub location: &'a Location,
    pub auth_form: &'a AuthForm,
}

/// Renders the body for the current location.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let body: Element<'a, Message> = match ctx.location {
        Location::Page(Route::Login) => ctx.auth_form.view(i18n, AuthMode::Login),
        Location::Page(Route::Register) => ctx.auth_form.view(i18n, AuthMode::Register),
        Location::Page(route) => {
            let mut column = Column::new()
                .spacing(spacing::SM)
                .push(Text::new(i18n.tr(route.title_key())).size(typography::TITLE_LG));
            if let Some(key) = description_key(*route) {
                column = column.push(Text::new(i18n.tr(key)).size(typography::BODY_LG));
            }
            column.into()
        }
        Location::NotFound(path) => Column::new()
            .spacing(spacing::SM)
            .push(Text::new(i18n.tr("page-not-found-title")).size(typography::TITLE_LG))
            .push(
                Text::new(i18n.tr_with_args("page-not-found-description", &[("path", path.as_str())]))
                    .size(typography::BODY_LG),
            )
            .into(),
    };

    let align = if i18n.current_language().is_rtl() {
        Horizontal::Right
    } else {
        Horizontal::Left
    };

    Container::new(
        Container::new(body)
            .padding(spacing::LG)
            .style(styles::card),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(align)
    .padding(spacing::XL)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> AuthForm {
        let mut form = AuthForm::default();
        form.update(Message::EmailChanged(" ada@example.com ".into()));
        form.update(Message::PasswordChanged("hunter22".into()));
        form
    }

    #[test]
    fn empty_form_does_not_submit() {
        let mut form = AuthForm::default();
        assert!(!form.can_submit());
        assert_eq!(form.update(Message::Submit(AuthMode::Login)), Event::None);
        assert!(!form.is_pending());
    }

    #[test]
    fn submit_emits_trimmed_credentials() {
        let mut form = filled();
        assert_eq!(
            form.update(Message::Submit(AuthMode::Login)),
            Event::SignIn {
                email: "ada@example.com".into(),
                password: "hunter22".into()
            }
        );
        assert!(form.is_pending());
    }

    #[test]
    fn pending_form_ignores_resubmit_until_finished() {
        let mut form = filled();
        form.update(Message::Submit(AuthMode::Register));
        assert_eq!(form.update(Message::Submit(AuthMode::Register)), Event::None);

        form.finish();
        assert!(matches!(
            form.update(Message::Submit(AuthMode::Register)),
            Event::SignUp { .. }
        ));
    }

    #[test]
    fn reset_clears_credentials() {
        let mut form = filled();
        form.update(Message::Submit(AuthMode::Login));
        form.reset();
        assert!(!form.can_submit());
        assert!(!form.is_pending());
    }

    #[test]
    fn switch_navigates_to_other_form() {
        let mut form = AuthForm::default();
        assert_eq!(
            form.update(Message::SwitchTo(AuthMode::Register)),
            Event::Navigate(Route::Register)
        );
        assert_eq!(AuthMode::Register.other(), AuthMode::Login);
    }

    #[test]
    fn every_location_renders() {
        let i18n = I18n::default();
        let form = filled();
        let mut locations: Vec<Location> = Route::ALL.into_iter().map(Location::from).collect();
        locations.push(Location::parse("/missing"));
        for location in &locations {
            let _element = view(ViewContext {
                i18n: &i18n,
                location,
                auth_form: &form,
            });
        }
    }

    #[test]
    fn placeholder_pages_have_descriptions() {
        for route in Route::ALL {
            let has_form = matches!(route, Route::Login | Route::Register);
            assert_eq!(description_key(route).is_none(), has_form);
        }
    }
}
