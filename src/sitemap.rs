//! Sitemap generation: the locale × top-level page matrix.

use chrono::NaiveDate;

use crate::i18n::LocaleRegistry;

/// Top-level page paths, relative to a locale root.
pub const PAGE_PATHS: [&str; 4] = ["", "/arquitectura", "/construccion", "/acabados"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: NaiveDate,
}

/// One entry per (enabled locale × top-level page), all sharing the same
/// last-modified stamp.
pub fn entries(base_url: &str, last_modified: NaiveDate) -> Vec<SitemapEntry> {
    LocaleRegistry::get()
        .list_enabled()
        .iter()
        .flat_map(|locale| {
            PAGE_PATHS.iter().map(move |path| SitemapEntry {
                url: format!("{base_url}/{}{path}", locale.code),
                last_modified,
            })
        })
        .collect()
}

/// Render entries as a sitemap XML document.
pub fn render_xml(entries: &[SitemapEntry]) -> String {
    let mut xml = String::with_capacity(entries.len() * 96 + 128);
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");
    for entry in entries {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", entry.url));
        xml.push_str(&format!(
            "    <lastmod>{}</lastmod>\n",
            entry.last_modified.format("%Y-%m-%d")
        ));
        xml.push_str("  </url>\n");
    }
    xml.push_str("</urlset>\n");
    xml
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://darikson.example";

    fn stamp() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 5).unwrap()
    }

    #[test]
    fn test_entries_cover_locale_page_matrix() {
        let entries = entries(BASE, stamp());

        // 2 locales × 4 pages
        assert_eq!(entries.len(), 8);
        assert!(entries
            .iter()
            .any(|entry| entry.url == "https://darikson.example/en"));
        assert!(entries
            .iter()
            .any(|entry| entry.url == "https://darikson.example/es/acabados"));
        assert!(entries
            .iter()
            .any(|entry| entry.url == "https://darikson.example/en/arquitectura"));
    }

    #[test]
    fn test_entries_share_one_stamp() {
        let entries = entries(BASE, stamp());
        assert!(entries.iter().all(|entry| entry.last_modified == stamp()));
    }

    #[test]
    fn test_render_xml_document_shape() {
        let xml = render_xml(&entries(BASE, stamp()));

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">"));
        assert!(xml.contains("<loc>https://darikson.example/es/construccion</loc>"));
        assert!(xml.contains("<lastmod>2026-08-05</lastmod>"));
        assert!(xml.ends_with("</urlset>\n"));
        assert_eq!(xml.matches("<url>").count(), 8);
    }
}
