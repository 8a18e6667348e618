//! Locale registry: single source of truth for the supported locales.
//!
//! The site serves a fixed, closed set of locales. The registry holds their
//! metadata and is initialized once behind an `OnceLock`; it is never
//! mutated afterwards.

use std::sync::OnceLock;

use crate::i18n::strings::{LocaleStrings, ENGLISH_STRINGS, SPANISH_STRINGS};

/// Configuration for a supported locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// ISO 639-1 language code (e.g., "en", "es")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "Spanish")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "Español")
    pub native_name: &'static str,

    /// Open Graph locale tag (e.g., "en_US", "es_ES")
    pub og_tag: &'static str,

    /// Whether this is the configured default locale (exactly one should be true)
    pub is_default: bool,

    /// Whether this locale is enabled for serving
    pub enabled: bool,

    /// The locale's translation table
    pub strings: &'static LocaleStrings,
}

/// Global locale registry singleton.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: default_locales(),
        })
    }

    /// Look up a locale configuration by its code.
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| locale.code == code)
    }

    /// All enabled locales, in registration order.
    pub fn list_enabled(&self) -> Vec<&LocaleConfig> {
        self.locales
            .iter()
            .filter(|locale| locale.enabled)
            .collect()
    }

    /// Get the configured default locale.
    ///
    /// The default is what every unknown or missing locale input normalizes
    /// to. There must be exactly one.
    ///
    /// # Panics
    /// Panics if no default locale is registered or more than one is (a
    /// configuration error).
    pub fn default_locale(&self) -> &LocaleConfig {
        let defaults: Vec<_> = self
            .locales
            .iter()
            .filter(|locale| locale.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default locale found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default locales found in registry"),
        }
    }

    /// Check whether a locale code is supported and enabled.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code)
            .map(|locale| locale.enabled)
            .unwrap_or(false)
    }
}

/// The supported locales.
///
/// Spanish is the default: it is the language of the company's home market
/// and the complete (canonical) translation table.
fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            code: "en",
            name: "English",
            native_name: "English",
            og_tag: "en_US",
            is_default: false,
            enabled: true,
            strings: &ENGLISH_STRINGS,
        },
        LocaleConfig {
            code: "es",
            name: "Spanish",
            native_name: "Español",
            og_tag: "es_ES",
            is_default: true,
            enabled: true,
            strings: &SPANISH_STRINGS,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LocaleRegistry::get();
        let registry2 = LocaleRegistry::get();

        // Should return the same instance (same memory address)
        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_get_by_code_english() {
        let registry = LocaleRegistry::get();
        let config = registry.get_by_code("en");

        assert!(config.is_some());
        let config = config.unwrap();
        assert_eq!(config.code, "en");
        assert_eq!(config.name, "English");
        assert_eq!(config.og_tag, "en_US");
        assert!(!config.is_default);
        assert!(config.enabled);
    }

    #[test]
    fn test_get_by_code_spanish() {
        let registry = LocaleRegistry::get();
        let config = registry.get_by_code("es");

        assert!(config.is_some());
        let config = config.unwrap();
        assert_eq!(config.code, "es");
        assert_eq!(config.name, "Spanish");
        assert_eq!(config.native_name, "Español");
        assert_eq!(config.og_tag, "es_ES");
        assert!(config.is_default);
        assert!(config.enabled);
    }

    #[test]
    fn test_get_by_code_nonexistent() {
        let registry = LocaleRegistry::get();
        assert!(registry.get_by_code("fr").is_none());
    }

    #[test]
    fn test_list_enabled_contains_both_locales() {
        let registry = LocaleRegistry::get();
        let enabled = registry.list_enabled();

        assert_eq!(enabled.len(), 2);
        assert!(enabled.iter().any(|locale| locale.code == "en"));
        assert!(enabled.iter().any(|locale| locale.code == "es"));
    }

    #[test]
    fn test_default_locale_is_spanish() {
        let registry = LocaleRegistry::get();
        let default = registry.default_locale();

        assert_eq!(default.code, "es");
        assert!(default.is_default);
    }

    #[test]
    fn test_is_enabled() {
        let registry = LocaleRegistry::get();
        assert!(registry.is_enabled("en"));
        assert!(registry.is_enabled("es"));
        assert!(!registry.is_enabled("fr"));
        assert!(!registry.is_enabled(""));
    }
}
