//! Main window layout and composition
//!
//! A vertical layout with the translated welcome heading on top and one
//! language-switch button per supported locale underneath. Button labels
//! combine the translated control label with the language's native name,
//! so the target language stays readable whatever locale is active.

use crate::config::UiConfig;
use crate::i18n::{keys, Localizer};
use crate::message::{LocaleMessage, Message};
use cosmic::iced::Length;
use cosmic::widget::{button, container, text, Column, Row};
use cosmic::Element;

/// Build the main window view
pub fn view<'a>(localizer: &'a Localizer, ui: &UiConfig) -> Element<'a, Message> {
    let heading = text(localizer.translate(keys::WELCOME_MESSAGE)).size(ui.heading_size);

    let content = Column::new()
        .push(heading)
        .push(language_controls(localizer, ui))
        .spacing(ui.content_spacing);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(ui.content_padding)
        .into()
}

/// Build one switch button per supported locale
fn language_controls<'a>(localizer: &'a Localizer, ui: &UiConfig) -> Element<'a, Message> {
    let label = localizer.translate(keys::CHANGE_LANGUAGE);

    let mut row = Row::new().spacing(ui.button_spacing);
    for (code, native_name) in localizer.locales() {
        row = row.push(
            button::text(format!("{} ({})", label, native_name))
                .on_press(Message::Locale(LocaleMessage::Switch(code.to_string()))),
        );
    }

    row.into()
}
