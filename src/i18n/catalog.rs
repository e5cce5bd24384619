//! Locale catalog data model
//!
//! The catalog is the immutable half of the translation store: a mapping
//! from locale code to that locale's dictionary and display metadata.
//! It is constructed once at startup and never mutated afterwards.
//!
//! Invariant: every locale's dictionary defines the same set of message
//! keys as every other locale. Violations are a configuration defect and
//! are detected by `validate_parity` at startup rather than discovered
//! per-render.

use std::collections::{BTreeMap, HashMap};

use crate::error::{LocaleError, LocaleResult};

/// Flat message-key to localized-string mapping for one locale
///
/// Keys are opaque identifiers; no nested-key splitting is performed and
/// values are stored raw (no output escaping - the rendering layer owns
/// escaping).
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: HashMap<String, String>,
}

impl Dictionary {
    /// Create an empty dictionary
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a localized string for a message key
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Look up a localized string by message key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether the dictionary defines a message key
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all message keys in this dictionary
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

/// A locale's dictionary plus its human-readable display metadata
#[derive(Debug, Clone)]
pub struct LocaleBundle {
    /// Name of the language in that language (e.g. "English", "हिन्दी"),
    /// used verbatim on the switch controls
    pub native_name: String,

    /// Translated strings for this locale
    pub dictionary: Dictionary,
}

impl LocaleBundle {
    /// Create a bundle from a native display name and a dictionary
    pub fn new(native_name: impl Into<String>, dictionary: Dictionary) -> Self {
        Self {
            native_name: native_name.into(),
            dictionary,
        }
    }
}

/// The full set of supported locales and their dictionaries
///
/// Locales are kept in a `BTreeMap` so iteration order (and therefore
/// the order of the language controls in the view) is deterministic.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    locales: BTreeMap<String, LocaleBundle>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a locale's bundle under its locale code
    ///
    /// Re-registering a code replaces the previous bundle; the built-in
    /// catalog never does this.
    pub fn add_locale(&mut self, code: impl Into<String>, bundle: LocaleBundle) {
        self.locales.insert(code.into(), bundle);
    }

    /// Whether a locale code is registered
    pub fn contains_locale(&self, code: &str) -> bool {
        self.locales.contains_key(code)
    }

    /// Look up a localized string for a (locale, key) pair
    pub fn get(&self, locale: &str, key: &str) -> Option<&str> {
        self.locales
            .get(locale)
            .and_then(|bundle| bundle.dictionary.get(key))
    }

    /// Number of registered locales
    pub fn locale_count(&self) -> usize {
        self.locales.len()
    }

    /// Iterate over (code, bundle) pairs in deterministic order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &LocaleBundle)> {
        self.locales
            .iter()
            .map(|(code, bundle)| (code.as_str(), bundle))
    }

    /// Collect all unique message keys across every registered locale,
    /// sorted for deterministic diagnostics
    pub fn all_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .locales
            .values()
            .flat_map(|bundle| bundle.dictionary.keys().map(String::from))
            .collect();
        keys.sort_unstable();
        keys.dedup();
        keys
    }

    /// Keys from the union key set that a locale's dictionary is missing,
    /// sorted alphabetically
    pub fn missing_keys(&self, locale: &str) -> Vec<String> {
        let Some(bundle) = self.locales.get(locale) else {
            return self.all_keys();
        };
        let mut missing: Vec<String> = self
            .all_keys()
            .into_iter()
            .filter(|key| !bundle.dictionary.contains_key(key))
            .collect();
        missing.sort_unstable();
        missing
    }

    /// Validate the key-parity invariant across all locales
    ///
    /// Returns the first (locale, key) pair where a locale is missing a
    /// key that another locale defines. Locales are checked in catalog
    /// order so the diagnostic is stable.
    pub fn validate_parity(&self) -> LocaleResult<()> {
        if self.locales.is_empty() {
            return Err(LocaleError::EmptyCatalog);
        }

        for (code, _) in self.iter() {
            if let Some(key) = self.missing_keys(code).into_iter().next() {
                return Err(LocaleError::MissingKey {
                    locale: code.to_string(),
                    key,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_locale_catalog() -> Catalog {
        let mut catalog = Catalog::new();

        let mut en = Dictionary::new();
        en.insert("greeting", "Hello");
        en.insert("farewell", "Goodbye");
        catalog.add_locale("en", LocaleBundle::new("English", en));

        let mut de = Dictionary::new();
        de.insert("greeting", "Hallo");
        de.insert("farewell", "Tschüss");
        catalog.add_locale("de", LocaleBundle::new("Deutsch", de));

        catalog
    }

    #[test]
    fn test_dictionary_lookup() {
        let mut dict = Dictionary::new();
        dict.insert("greeting", "Hello");
        assert_eq!(dict.get("greeting"), Some("Hello"));
        assert_eq!(dict.get("missing"), None);
        assert_eq!(dict.len(), 1);
        assert!(!dict.is_empty());
    }

    #[test]
    fn test_catalog_get() {
        let catalog = two_locale_catalog();
        assert_eq!(catalog.get("en", "greeting"), Some("Hello"));
        assert_eq!(catalog.get("de", "greeting"), Some("Hallo"));
        assert_eq!(catalog.get("fr", "greeting"), None);
        assert_eq!(catalog.get("en", "missing"), None);
    }

    #[test]
    fn test_iteration_order_is_deterministic() {
        let catalog = two_locale_catalog();
        let codes: Vec<&str> = catalog.iter().map(|(code, _)| code).collect();
        assert_eq!(codes, vec!["de", "en"]);
    }

    #[test]
    fn test_all_keys_sorted_and_deduped() {
        let catalog = two_locale_catalog();
        assert_eq!(catalog.all_keys(), vec!["farewell", "greeting"]);
    }

    #[test]
    fn test_parity_holds_for_complete_catalog() {
        let catalog = two_locale_catalog();
        assert!(catalog.validate_parity().is_ok());
    }

    #[test]
    fn test_parity_violation_reports_locale_and_key() {
        let mut catalog = two_locale_catalog();

        let mut fr = Dictionary::new();
        fr.insert("greeting", "Bonjour");
        // "farewell" missing in fr
        catalog.add_locale("fr", LocaleBundle::new("Français", fr));

        let err = catalog.validate_parity().unwrap_err();
        match err {
            crate::error::LocaleError::MissingKey { locale, key } => {
                assert_eq!(locale, "fr");
                assert_eq!(key, "farewell");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_catalog_is_a_parity_error() {
        let catalog = Catalog::new();
        assert!(matches!(
            catalog.validate_parity(),
            Err(crate::error::LocaleError::EmptyCatalog)
        ));
    }

    #[test]
    fn test_missing_keys_for_unknown_locale_is_full_key_set() {
        let catalog = two_locale_catalog();
        assert_eq!(catalog.missing_keys("fr"), vec!["farewell", "greeting"]);
    }
}
