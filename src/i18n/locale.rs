//! Locale type: validated locale representation.
//!
//! A `Locale` can only be constructed from a code the registry knows about,
//! so every value in the rest of the program is guaranteed to belong to the
//! supported set.

use crate::i18n::{LocaleConfig, LocaleRegistry, LocaleStrings};
use anyhow::{bail, Result};

/// A validated locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    /// ISO 639-1 language code (e.g., "en", "es")
    code: &'static str,
}

impl Locale {
    pub const ENGLISH: Locale = Locale { code: "en" };
    pub const SPANISH: Locale = Locale { code: "es" };

    /// Create a Locale from a language code string.
    ///
    /// # Returns
    /// * `Ok(Locale)` if the code is supported and enabled
    /// * `Err` if the code is unknown or the locale is disabled
    pub fn from_code(code: &str) -> Result<Locale> {
        let registry = LocaleRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Locale {
                code: config.code, // Use the static str from the registry
            }),
            Some(_) => bail!("Locale '{}' is not enabled", code),
            None => bail!("Unknown locale code: '{}'", code),
        }
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full locale configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is not found in the registry. This cannot happen
    /// for a Locale constructed via `from_code` or the constants.
    pub fn config(&self) -> &'static LocaleConfig {
        LocaleRegistry::get()
            .get_by_code(self.code)
            .expect("Locale code should always be valid")
    }

    /// Get this locale's translation table.
    pub fn strings(&self) -> &'static LocaleStrings {
        self.config().strings
    }

    /// Get the Open Graph locale tag (e.g., "es_ES").
    pub fn og_tag(&self) -> &'static str {
        self.config().og_tag
    }

    /// The locale's root path (e.g., "/es").
    pub fn home_path(&self) -> String {
        format!("/{}", self.code)
    }

    /// Check if this is the configured default locale.
    pub fn is_default(&self) -> bool {
        self.config().is_default
    }
}

/// The configured default locale; what every unknown locale input
/// normalizes to.
impl Default for Locale {
    fn default() -> Self {
        let config = LocaleRegistry::get().default_locale();
        Locale { code: config.code }
    }
}
