//! Built-in translation resources
//!
//! All strings are inlined; there is no dynamic bundle loading. The
//! supported locale set and message key set are fixed at build time.

use super::catalog::{Catalog, Dictionary, LocaleBundle};

/// Message key constants
///
/// Keys are flat identifiers; no separator-based nesting is used.
pub mod keys {
    /// The headline greeting shown at the top of the window
    pub const WELCOME_MESSAGE: &str = "welcome_message";

    /// Label for the language-switch controls
    pub const CHANGE_LANGUAGE: &str = "change_language";
}

/// Build the catalog of built-in locales
///
/// Every locale here must define every key in `keys`; the parity check
/// in `Localizer::new` enforces this at startup.
pub fn builtin_catalog() -> Catalog {
    let mut catalog = Catalog::new();

    let mut en = Dictionary::new();
    en.insert(keys::WELCOME_MESSAGE, "Welcome to my website !");
    en.insert(keys::CHANGE_LANGUAGE, "Change Language");
    catalog.add_locale("en", LocaleBundle::new("English", en));

    let mut hi = Dictionary::new();
    hi.insert(keys::WELCOME_MESSAGE, "मेरी वेबसाइट पर आपका स्वागत है !");
    hi.insert(keys::CHANGE_LANGUAGE, "भाषा बदलें");
    catalog.add_locale("hi", LocaleBundle::new("हिन्दी", hi));

    catalog
}
