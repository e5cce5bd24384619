//! Internationalization (i18n) module for Cosmic Welcome
//!
//! Provides localization support with runtime language switching:
//! - `catalog`: immutable locale/dictionary data model
//! - `localizer`: active-locale state and translation lookup
//! - `resources`: built-in translation table (all strings inlined)
//!
//! The `Localizer` is an explicit context object constructed once in
//! `main` and owned by the application; it is passed to the view by
//! reference rather than living in a process-wide singleton.

mod catalog;
mod localizer;
mod resources;

pub use catalog::{Catalog, Dictionary, LocaleBundle};
pub use localizer::Localizer;
pub use resources::{builtin_catalog, keys};
