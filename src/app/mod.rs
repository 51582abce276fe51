// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the navigation shell, the page area, the session
//! client and localization together, and turns their events into side
//! effects such as auth requests or preference persistence.

mod message;
pub mod paths;
mod persistence;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::i18n::fluent::I18n;
use crate::routes::Location;
use crate::session::{SessionClient, SessionStore, Unconfigured, User};
use crate::ui::notifications::{self, Notification};
use crate::ui::pages::AuthForm;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    location: Location,
    /// Last user observed from the session client.
    user: Option<User>,
    session: SessionClient,
    language_menu_open: bool,
    theme_mode: ThemeMode,
    auth_form: AuthForm,
    notifications: notifications::Manager,
    /// Config directory override; `None` resolves the usual way.
    config_dir: Option<PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("location", &self.location)
            .field("signed_in", &self.user.is_some())
            .field("language", &self.i18n.current_language())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced calls boot through `Fn`; the flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || App::new(boot_state.borrow_mut().take().unwrap_or_default());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            location: Location::default(),
            user: None,
            session: SessionClient::new(Unconfigured, SessionStore::in_memory()),
            language_menu_open: false,
            theme_mode: ThemeMode::System,
            auth_form: AuthForm::default(),
            notifications: notifications::Manager::new(),
            config_dir: None,
        }
    }
}

impl App {
    /// Loads preferences, builds the session client and starts the initial
    /// session fetch.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, flags.i18n_dir, &config);
        let session =
            SessionClient::from_config(&config.auth.with_env_overrides(), SessionStore::new());
        let location = flags
            .route
            .as_deref()
            .map(Location::parse)
            .unwrap_or_default();

        let mut app = App {
            i18n,
            location,
            session,
            theme_mode: config.general.theme_mode,
            ..Self::default()
        };

        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }

        tracing::info!(
            language = %app.i18n.current_language(),
            location = ?app.location,
            "storefront started"
        );

        let task = app.fetch_session();
        (app, task)
    }

    fn fetch_session(&self) -> Task<Message> {
        let session = self.session.clone();
        Task::perform(
            async move { session.current_user().await },
            Message::SessionChanged,
        )
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match &self.location {
            Location::Page(route) => format!("{} - {app_name}", self.i18n.tr(route.title_key())),
            Location::NotFound(_) => {
                format!("{} - {app_name}", self.i18n.tr("page-not-found-title"))
            }
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_session_subscription(&self.session),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
            subscription::create_menu_subscription(self.language_menu_open),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            location: &mut self.location,
            language_menu_open: &mut self.language_menu_open,
            user: &mut self.user,
            session: &self.session,
            auth_form: &mut self.auth_form,
            notifications: &mut self.notifications,
            config_dir: self.config_dir.clone(),
        };

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Page(page_message) => update::handle_page_message(&mut ctx, page_message),
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::SessionChanged(user) => {
                update::handle_session_changed(&mut ctx, user);
                Task::none()
            }
            Message::SignInCompleted(result) => {
                update::handle_sign_in_completed(&mut ctx, result);
                Task::none()
            }
            Message::SignUpCompleted(result) => {
                update::handle_sign_up_completed(&mut ctx, result);
                Task::none()
            }
            Message::LogoutCompleted => {
                update::handle_logout_completed(&mut ctx);
                Task::none()
            }
            Message::Tick(now) => {
                ctx.notifications.tick(now);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            location: &self.location,
            user: self.user.as_ref(),
            language_menu_open: self.language_menu_open,
            auth_form: &self.auth_form,
            notifications: &self.notifications,
        })
    }
}
