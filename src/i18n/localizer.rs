//! Active-locale state and translation lookup
//!
//! The `Localizer` pairs the immutable `Catalog` with the single mutable
//! piece of localization state: the active locale. All reads go through
//! `translate`; the only write path is `set_locale`.

use crate::config::{GeneralConfig, MissingKeyBehavior};
use crate::error::{LocaleError, LocaleResult};

use super::catalog::Catalog;
use super::resources::builtin_catalog;

/// Localization context owned by the application
///
/// Constructed once at startup and handed to the application via its
/// flags; the view receives it by reference on every render.
#[derive(Debug, Clone)]
pub struct Localizer {
    /// Immutable locale/dictionary table
    catalog: Catalog,

    /// Currently active locale code
    active: String,

    /// What `translate` does when a key is absent from the active
    /// dictionary
    missing_key: MissingKeyBehavior,
}

impl Localizer {
    /// Build a localizer over the built-in catalog from configuration
    pub fn from_config(general: &GeneralConfig) -> LocaleResult<Self> {
        Self::new(
            builtin_catalog(),
            &general.default_locale,
            general.missing_key,
        )
    }

    /// Build a localizer over an explicit catalog
    ///
    /// Fails when the default locale is not registered. Key parity is
    /// validated at construction: under `MissingKeyBehavior::Fail` a
    /// violation is a hard error; under `KeyPlaceholder` it is logged
    /// and lookups degrade to echoing the key at render time.
    pub fn new(
        catalog: Catalog,
        default_locale: &str,
        missing_key: MissingKeyBehavior,
    ) -> LocaleResult<Self> {
        if !catalog.contains_locale(default_locale) {
            return Err(LocaleError::UnknownDefaultLocale(
                default_locale.to_string(),
            ));
        }

        match catalog.validate_parity() {
            Ok(()) => {}
            Err(e) if missing_key == MissingKeyBehavior::Fail => return Err(e),
            Err(e) => {
                log::warn!("Incomplete translation catalog: {}", e);
            }
        }

        log::debug!(
            "Localizer initialized: {} locale(s), default '{}'",
            catalog.locale_count(),
            default_locale
        );

        Ok(Self {
            catalog,
            active: default_locale.to_string(),
            missing_key,
        })
    }

    /// The currently active locale code
    pub fn active_locale(&self) -> &str {
        &self.active
    }

    /// Resolve a message key against the active locale's dictionary
    ///
    /// When the key is absent the key itself is returned as a visible
    /// placeholder, so an untranslated phrase degrades gracefully
    /// instead of breaking the view.
    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        match self.catalog.get(&self.active, key) {
            Some(value) => value,
            None => {
                log::warn!(
                    "Missing translation for key '{}' in locale '{}'",
                    key,
                    self.active
                );
                key
            }
        }
    }

    /// Strict variant of `translate` that surfaces the missing key
    /// instead of substituting a placeholder
    pub fn try_translate<'a>(&'a self, key: &'a str) -> LocaleResult<&'a str> {
        self.catalog
            .get(&self.active, key)
            .ok_or_else(|| LocaleError::MissingKey {
                locale: self.active.clone(),
                key: key.to_string(),
            })
    }

    /// Make `code` the active locale
    ///
    /// Unknown codes are ignored and the previous active locale is
    /// retained; no error is raised. Switching to the already-active
    /// locale is a legal no-op. Returns whether `code` is now active.
    pub fn set_locale(&mut self, code: &str) -> bool {
        if !self.catalog.contains_locale(code) {
            log::debug!("Ignoring switch to unknown locale '{}'", code);
            return false;
        }
        if self.active != code {
            log::info!("Switching locale '{}' -> '{}'", self.active, code);
            self.active = code.to_string();
        }
        true
    }

    /// Iterate over supported locales as (code, native name) pairs in
    /// deterministic order
    pub fn locales(&self) -> impl Iterator<Item = (&str, &str)> {
        self.catalog
            .iter()
            .map(|(code, bundle)| (code, bundle.native_name.as_str()))
    }

    /// Configured behavior for missing message keys
    pub fn missing_key_behavior(&self) -> MissingKeyBehavior {
        self.missing_key
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::catalog::{Catalog, Dictionary, LocaleBundle};
    use crate::i18n::resources::keys;

    fn default_localizer() -> Localizer {
        Localizer::new(builtin_catalog(), "en", MissingKeyBehavior::KeyPlaceholder)
            .expect("built-in catalog must be valid")
    }

    #[test]
    fn test_default_state_translations() {
        let localizer = default_localizer();
        assert_eq!(localizer.active_locale(), "en");
        assert_eq!(
            localizer.translate(keys::WELCOME_MESSAGE),
            "Welcome to my website !"
        );
        assert_eq!(localizer.translate(keys::CHANGE_LANGUAGE), "Change Language");
    }

    #[test]
    fn test_switch_to_hindi() {
        let mut localizer = default_localizer();
        assert!(localizer.set_locale("hi"));
        assert_eq!(localizer.active_locale(), "hi");
        assert_eq!(
            localizer.translate(keys::WELCOME_MESSAGE),
            "मेरी वेबसाइट पर आपका स्वागत है !"
        );
        assert_eq!(localizer.translate(keys::CHANGE_LANGUAGE), "भाषा बदलें");
    }

    #[test]
    fn test_unknown_locale_is_a_no_op() {
        let mut localizer = default_localizer();
        assert!(!localizer.set_locale("fr"));
        assert_eq!(localizer.active_locale(), "en");
        assert_eq!(
            localizer.translate(keys::WELCOME_MESSAGE),
            "Welcome to my website !"
        );
    }

    #[test]
    fn test_switch_round_trips() {
        let mut localizer = default_localizer();
        let initial_welcome = localizer.translate(keys::WELCOME_MESSAGE).to_string();
        let initial_label = localizer.translate(keys::CHANGE_LANGUAGE).to_string();

        localizer.set_locale("hi");
        localizer.set_locale("en");

        assert_eq!(localizer.translate(keys::WELCOME_MESSAGE), initial_welcome);
        assert_eq!(localizer.translate(keys::CHANGE_LANGUAGE), initial_label);
    }

    #[test]
    fn test_switch_is_idempotent() {
        let mut localizer = default_localizer();
        assert!(localizer.set_locale("en"));
        assert!(localizer.set_locale("en"));
        assert_eq!(localizer.active_locale(), "en");
        assert_eq!(
            localizer.translate(keys::WELCOME_MESSAGE),
            "Welcome to my website !"
        );
    }

    #[test]
    fn test_every_locale_resolves_every_key() {
        let mut localizer = default_localizer();
        let codes: Vec<String> = localizer
            .locales()
            .map(|(code, _)| code.to_string())
            .collect();

        for code in codes {
            assert!(localizer.set_locale(&code));
            for key in [keys::WELCOME_MESSAGE, keys::CHANGE_LANGUAGE] {
                let value = localizer.try_translate(key).unwrap();
                assert!(!value.is_empty());
                assert_ne!(value, key);
            }
        }
    }

    #[test]
    fn test_missing_key_falls_back_to_key() {
        let localizer = default_localizer();
        assert_eq!(localizer.translate("not_a_real_key"), "not_a_real_key");
        assert!(localizer.try_translate("not_a_real_key").is_err());
    }

    #[test]
    fn test_unknown_default_locale_is_a_startup_error() {
        let result = Localizer::new(
            builtin_catalog(),
            "fr",
            MissingKeyBehavior::KeyPlaceholder,
        );
        assert!(matches!(
            result,
            Err(LocaleError::UnknownDefaultLocale(code)) if code == "fr"
        ));
    }

    #[test]
    fn test_parity_violation_fails_under_strict_behavior() {
        let mut catalog = Catalog::new();

        let mut en = Dictionary::new();
        en.insert("greeting", "Hello");
        en.insert("farewell", "Goodbye");
        catalog.add_locale("en", LocaleBundle::new("English", en));

        let mut de = Dictionary::new();
        de.insert("greeting", "Hallo");
        // "farewell" missing in de
        catalog.add_locale("de", LocaleBundle::new("Deutsch", de));

        let strict = Localizer::new(catalog.clone(), "en", MissingKeyBehavior::Fail);
        assert!(matches!(strict, Err(LocaleError::MissingKey { .. })));

        // Permissive construction succeeds and degrades per-render
        let mut lenient =
            Localizer::new(catalog, "en", MissingKeyBehavior::KeyPlaceholder).unwrap();
        lenient.set_locale("de");
        assert_eq!(lenient.translate("farewell"), "farewell");
    }

    #[test]
    fn test_locales_listing_with_native_names() {
        let localizer = default_localizer();
        let listing: Vec<(String, String)> = localizer
            .locales()
            .map(|(code, name)| (code.to_string(), name.to_string()))
            .collect();
        assert_eq!(
            listing,
            vec![
                ("en".to_string(), "English".to_string()),
                ("hi".to_string(), "हिन्दी".to_string()),
            ]
        );
    }

    #[test]
    fn test_from_config_uses_configured_default() {
        let general = GeneralConfig::default();
        let localizer = Localizer::from_config(&general).unwrap();
        assert_eq!(localizer.active_locale(), "en");
        assert_eq!(
            localizer.missing_key_behavior(),
            MissingKeyBehavior::KeyPlaceholder
        );
    }
}
