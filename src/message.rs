//! Application message types
//!
//! Defines all messages that can be sent to the application's update function.
//! Messages are organized by category for clear handling and routing.

/// Main application message enum
#[derive(Debug, Clone)]
pub enum Message {
    /// Localization operations
    Locale(LocaleMessage),

    /// No-op message (for subscriptions that don't need action)
    None,
}

/// Localization-related messages
#[derive(Debug, Clone)]
pub enum LocaleMessage {
    /// Make the given locale code the active locale
    Switch(String),
}

impl From<LocaleMessage> for Message {
    fn from(msg: LocaleMessage) -> Self {
        Message::Locale(msg)
    }
}
