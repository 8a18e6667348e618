//! Internationalization (i18n) module for the localized site.
//!
//! Everything locale-related lives here: the closed set of supported
//! locales, their metadata (Open Graph tags, native names), and the static
//! translation dictionary the pages and the metadata builder read from.
//!
//! # Architecture
//!
//! - `registry`: single source of truth for supported locales and their metadata
//! - `locale`: validated `Locale` type, constructible only from registry codes
//! - `strings`: the per-locale string tables and key-based lookup with fallback
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::i18n::{t, Locale, TextKey};
//!
//! let locale = Locale::from_code("es")?;
//! let title = t(TextKey::MetaTitleHome, locale);
//! ```

mod locale;
mod registry;
mod strings;

pub use locale::Locale;
pub use registry::{LocaleConfig, LocaleRegistry};
pub use strings::{t, LocaleStrings, TextKey};
