//! Main application module implementing the Cosmic Application trait
//!
//! This is the central hub of the application, implementing libCosmic's
//! Application trait for window management and message routing. Locale
//! switches mutate the owned `Localizer`; the runtime then re-invokes
//! `view`, so the new language is rendered without any explicit refresh.

use crate::config::{Config, APP_ID};
use crate::i18n::{keys, Localizer};
use crate::message::{LocaleMessage, Message};
use crate::ui;

use cosmic::app::{Core, Task};
use cosmic::{Application, ApplicationExt, Element};

/// Cosmic Welcome Application
pub struct WelcomeApp {
    /// libCosmic core reference
    core: Core,

    /// User configuration
    pub config: Config,

    /// Localization context (catalog + active locale)
    pub localizer: Localizer,
}

/// Application flags passed during initialization
///
/// The localizer is constructed in `main` and injected here so catalog
/// validation happens before the window opens.
#[derive(Debug, Clone)]
pub struct Flags {
    /// User configuration
    pub config: Config,

    /// Localization context
    pub localizer: Localizer,
}

impl Application for WelcomeApp {
    /// Executor for async tasks
    type Executor = cosmic::executor::Default;

    /// Application flags
    type Flags = Flags;

    /// Application message type
    type Message = Message;

    /// Application ID following reverse-DNS convention
    const APP_ID: &'static str = APP_ID;

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    /// Initialize the application
    fn init(core: Core, flags: Self::Flags) -> (Self, Task<Self::Message>) {
        let mut app = Self {
            core,
            config: flags.config,
            localizer: flags.localizer,
        };

        app.update_window_title();

        (app, Task::none())
    }

    /// Handle incoming messages
    fn update(&mut self, message: Self::Message) -> Task<Self::Message> {
        match message {
            Message::Locale(msg) => self.handle_locale_message(msg),
            Message::None => Task::none(),
        }
    }

    /// Render the application view
    fn view(&self) -> Element<'_, Self::Message> {
        ui::view(&self.localizer, &self.config.ui)
    }
}

impl WelcomeApp {
    /// Set the header title from the active locale's welcome phrase
    fn update_window_title(&mut self) {
        let title = self.localizer.translate(keys::WELCOME_MESSAGE).to_string();
        self.set_header_title(title);
    }

    /// Handle localization-related messages
    fn handle_locale_message(&mut self, msg: LocaleMessage) -> Task<Message> {
        match msg {
            LocaleMessage::Switch(code) => {
                // Unknown codes leave the previous locale active
                if self.localizer.set_locale(&code) {
                    self.update_window_title();
                } else {
                    log::warn!("Requested unsupported locale '{}'", code);
                }
            }
        }
        Task::none()
    }
}
