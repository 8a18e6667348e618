//! Page-level metadata assembly.
//!
//! Pure functions of (locale, dictionary keys, canonical path) plus the
//! configured base URL; the renderer turns the result into `<head>` tags.

use crate::i18n::{t, Locale, LocaleRegistry, TextKey};

/// The fixed social-preview image served from the media root.
pub const OG_IMAGE_PATH: &str = "/og.jpg";
pub const OG_IMAGE_WIDTH: u32 = 1200;
pub const OG_IMAGE_HEIGHT: u32 = 630;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OgImage {
    pub url: &'static str,
    pub width: u32,
    pub height: u32,
    pub alt: &'static str,
}

/// Open Graph descriptor for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenGraph {
    /// Always "website" for this site
    pub kind: &'static str,
    pub locale_tag: &'static str,
    pub site_name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub url: String,
    pub image: OgImage,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwitterCard {
    pub card: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

/// One `hreflang` alternate, pointing at a locale's localized root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlternateLink {
    pub locale: &'static str,
    pub href: String,
}

/// Everything a page's `<head>` needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: &'static str,
    pub description: &'static str,
    pub canonical: String,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
    pub alternates: Vec<AlternateLink>,
}

/// Build the metadata for one logical page.
///
/// Title and description resolve through the dictionary with default-locale
/// fallback, so they are never empty. `path` is the locale-qualified page
/// path ("" yields the site root as canonical URL).
pub fn page_metadata(
    base_url: &str,
    locale: Locale,
    title_key: TextKey,
    desc_key: TextKey,
    path: &str,
) -> PageMetadata {
    let title = t(title_key, locale);
    let description = t(desc_key, locale);
    let site_name = t(TextKey::AppTitle, locale);
    let canonical = if path.is_empty() {
        base_url.to_string()
    } else {
        format!("{base_url}{path}")
    };

    let alternates = LocaleRegistry::get()
        .list_enabled()
        .iter()
        .map(|config| AlternateLink {
            locale: config.code,
            href: format!("/{}", config.code),
        })
        .collect();

    PageMetadata {
        title,
        description,
        canonical: canonical.clone(),
        open_graph: OpenGraph {
            kind: "website",
            locale_tag: locale.og_tag(),
            site_name,
            title,
            description,
            url: canonical,
            image: OgImage {
                url: OG_IMAGE_PATH,
                width: OG_IMAGE_WIDTH,
                height: OG_IMAGE_HEIGHT,
                alt: site_name,
            },
        },
        twitter: TwitterCard {
            card: "summary_large_image",
            title,
            description,
            image: OG_IMAGE_PATH,
        },
        alternates,
    }
}
