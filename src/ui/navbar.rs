// SPDX-License-Identifier: MPL-2.0
//! Navigation shell rendered above every page.
//!
//! Shows the brand link, the language selector and the links that depend on
//! whether someone is signed in. The shell only observes the session: it
//! receives the current user from the app and reports clicks as [`Event`]s.

use crate::i18n::fluent::I18n;
use crate::i18n::Language;
use crate::routes::{Location, Route};
use crate::session::User;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Column, Container, Row, Space, Text},
    Element, Length,
};

/// A link the shell offers depending on the session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affordance {
    /// Profile link to the seller dashboard.
    Dashboard,
    Support,
    Logout,
    Login,
    Register,
}

const SIGNED_IN: [Affordance; 3] = [Affordance::Dashboard, Affordance::Support, Affordance::Logout];
const SIGNED_OUT: [Affordance; 2] = [Affordance::Login, Affordance::Register];

/// Links to render for the given session: the authenticated set or the
/// anonymous set, never a mix.
pub fn affordances(user: Option<&User>) -> &'static [Affordance] {
    if user.is_some() {
        &SIGNED_IN
    } else {
        &SIGNED_OUT
    }
}

impl Affordance {
    pub fn label_key(self) -> &'static str {
        match self {
            Affordance::Dashboard => "nav-dashboard",
            Affordance::Support => "nav-support",
            Affordance::Logout => "nav-logout",
            Affordance::Login => "nav-login",
            Affordance::Register => "nav-register",
        }
    }

    fn message(self) -> Message {
        match self {
            Affordance::Dashboard => Message::Navigate(Route::Dashboard),
            Affordance::Support => Message::Navigate(Route::Support),
            Affordance::Login => Message::Navigate(Route::Login),
            Affordance::Register => Message::Navigate(Route::Register),
            Affordance::Logout => Message::Logout,
        }
    }

    fn route(self) -> Option<Route> {
        match self.message() {
            Message::Navigate(route) => Some(route),
            _ => None,
        }
    }
}

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub user: Option<&'a User>,
    pub location: &'a Location,
    pub language_menu_open: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    ToggleLanguageMenu,
    CloseLanguageMenu,
    SelectLanguage(Language),
    Navigate(Route),
    Logout,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(Route),
    LanguageSelected(Language),
    Logout,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, language_menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleLanguageMenu => {
            *language_menu_open = !*language_menu_open;
            Event::None
        }
        Message::CloseLanguageMenu => {
            *language_menu_open = false;
            Event::None
        }
        Message::SelectLanguage(language) => {
            *language_menu_open = false;
            Event::LanguageSelected(language)
        }
        Message::Navigate(route) => {
            *language_menu_open = false;
            Event::Navigate(route)
        }
        Message::Logout => {
            *language_menu_open = false;
            Event::Logout
        }
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill).push(build_bar(&ctx));

    if ctx.language_menu_open {
        content = content.push(build_language_menu(&ctx));
    }

    content.into()
}

fn build_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut items = bar_items(ctx);
    if ctx.i18n.current_language().is_rtl() {
        items.reverse();
    }

    let row = Row::with_children(items)
        .spacing(spacing::SM)
        .padding([spacing::XS, spacing::MD])
        .align_y(Vertical::Center);

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .align_y(Vertical::Center)
        .style(styles::navbar)
        .into()
}

/// Brand, spacer, language button, then one link per affordance.
fn bar_items<'a>(ctx: &ViewContext<'a>) -> Vec<Element<'a, Message>> {
    let current_route = ctx.location.route();

    let brand = button(Text::new(ctx.i18n.tr("brand-name")).size(typography::TITLE_MD))
        .on_press(Message::Navigate(Route::Home))
        .padding(spacing::XS)
        .style(styles::link);

    let language_button = button(Text::new(ctx.i18n.current_language().native_name()))
        .on_press(Message::ToggleLanguageMenu)
        .padding(spacing::XS)
        .style(if ctx.language_menu_open {
            styles::link_selected
        } else {
            styles::link
        });

    let mut items: Vec<Element<'a, Message>> = vec![
        brand.into(),
        Space::new().width(Length::Fill).into(),
        language_button.into(),
    ];

    for affordance in affordances(ctx.user) {
        let active = affordance.route().is_some() && affordance.route() == current_route;
        items.push(
            button(Text::new(ctx.i18n.tr(affordance.label_key())))
                .on_press(affordance.message())
                .padding(spacing::XS)
                .style(if active {
                    styles::link_selected
                } else {
                    styles::link
                })
                .into(),
        );
    }

    items
}

fn build_language_menu<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let current = ctx.i18n.current_language();

    let items = Language::ALL.into_iter().map(|language| {
        button(Text::new(language.native_name()))
            .on_press(Message::SelectLanguage(language))
            .padding([spacing::XXS, spacing::SM])
            .width(Length::Fill)
            .style(if language == current {
                styles::link_selected
            } else {
                styles::link
            })
    });

    let header = Text::new(ctx.i18n.tr("language-menu-label")).size(typography::CAPTION);
    let list = items.fold(
        Column::new().spacing(spacing::XXS).push(header),
        |column, item| column.push(item),
    );
    let menu = Container::new(list)
        .width(Length::Fixed(sizing::LANGUAGE_MENU_WIDTH))
        .padding(spacing::XS)
        .style(styles::dropdown);

    let horizontal = if current.is_rtl() {
        iced::alignment::Horizontal::Left
    } else {
        iced::alignment::Horizontal::Right
    };

    Container::new(menu)
        .width(Length::Fill)
        .align_x(horizontal)
        .padding([0.0, spacing::MD])
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: "u1".into(),
            email: Some("ada@example.com".into()),
        }
    }

    #[test]
    fn signed_out_offers_login_and_register_only() {
        assert_eq!(
            affordances(None),
            &[Affordance::Login, Affordance::Register]
        );
    }

    #[test]
    fn signed_in_offers_dashboard_support_logout_only() {
        let user = user();
        assert_eq!(
            affordances(Some(&user)),
            &[Affordance::Dashboard, Affordance::Support, Affordance::Logout]
        );
    }

    #[test]
    fn affordance_sets_never_mix() {
        let user = user();
        let signed_in = affordances(Some(&user));
        let signed_out = affordances(None);
        assert!(signed_in.iter().all(|a| !signed_out.contains(a)));
    }

    #[test]
    fn affordances_route_to_their_pages() {
        assert_eq!(Affordance::Dashboard.route(), Some(Route::Dashboard));
        assert_eq!(Affordance::Login.route(), Some(Route::Login));
        assert_eq!(Affordance::Register.route(), Some(Route::Register));
        assert_eq!(Affordance::Support.route(), Some(Route::Support));
        assert_eq!(Affordance::Logout.route(), None);
    }

    #[test]
    fn toggle_menu_changes_state() {
        let mut open = false;
        assert_eq!(update(Message::ToggleLanguageMenu, &mut open), Event::None);
        assert!(open);
        assert_eq!(update(Message::ToggleLanguageMenu, &mut open), Event::None);
        assert!(!open);
    }

    #[test]
    fn selecting_language_closes_menu() {
        let mut open = true;
        let event = update(Message::SelectLanguage(Language::Ja), &mut open);
        assert!(!open);
        assert_eq!(event, Event::LanguageSelected(Language::Ja));
    }

    #[test]
    fn links_close_menu_and_emit_events() {
        let mut open = true;
        assert_eq!(
            update(Message::Navigate(Route::Support), &mut open),
            Event::Navigate(Route::Support)
        );
        assert!(!open);

        open = true;
        assert_eq!(update(Message::Logout, &mut open), Event::Logout);
        assert!(!open);

        open = true;
        assert_eq!(update(Message::CloseLanguageMenu, &mut open), Event::None);
        assert!(!open);
    }

    #[test]
    fn bar_holds_only_fixed_items_and_affordance_links() {
        let i18n = I18n::with_language(Language::En, None);
        let location = Location::Page(Route::Home);
        let user = user();
        for user in [None, Some(&user)] {
            let items = bar_items(&ViewContext {
                i18n: &i18n,
                user,
                location: &location,
                language_menu_open: false,
            });
            assert_eq!(items.len(), 3 + affordances(user).len());
        }
    }

    #[test]
    fn navbar_view_renders_in_every_state() {
        let user = user();
        let location = Location::Page(Route::Dashboard);
        for language in [Language::En, Language::Ar] {
            let i18n = I18n::with_language(language, None);
            for (user, menu_open) in [(None, false), (Some(&user), true)] {
                let _element = view(ViewContext {
                    i18n: &i18n,
                    user,
                    location: &location,
                    language_menu_open: menu_open,
                });
            }
        }
    }
}
