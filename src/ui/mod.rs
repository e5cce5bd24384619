//! UI module for Cosmic Welcome
//!
//! Contains the user interface components:
//! - Main window layout (welcome heading and language controls)

mod main_window;

use crate::config::UiConfig;
use crate::i18n::Localizer;
use crate::message::Message;
use cosmic::Element;

/// Build the main application view
pub fn view<'a>(localizer: &'a Localizer, ui: &UiConfig) -> Element<'a, Message> {
    main_window::view(localizer, ui)
}
