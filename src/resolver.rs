//! Locale resolution for incoming requests.
//!
//! Maps an inbound request to a locale-qualified path: paths that already
//! carry a supported locale prefix (and asset/API/operational paths) pass
//! through untouched; everything else is rewritten internally to
//! `/{locale}{path}`, with the locale negotiated from the `Accept-Language`
//! header. The rewrite never surfaces as a redirect, so the visible URL is
//! unchanged.

use std::sync::OnceLock;

use axum::{
    extract::Request,
    http::{header, uri::PathAndQuery, Uri},
    middleware::Next,
    response::Response,
};
use regex::Regex;
use tracing::debug;

use crate::i18n::{Locale, LocaleRegistry};

/// Path prefixes the resolver never rewrites.
const PASSTHROUGH_PREFIXES: [&str; 4] = ["/api", "/media", "/sitemap", "/healthz"];

/// Exact paths the resolver never rewrites.
const PASSTHROUGH_PATHS: [&str; 2] = ["/favicon.ico", "/robots.txt"];

static EXTENSION_RE: OnceLock<Regex> = OnceLock::new();

/// True when the path's last segment carries a file extension.
fn has_extension(path: &str) -> bool {
    EXTENSION_RE
        .get_or_init(|| Regex::new(r"\.[^/]+$").unwrap())
        .is_match(path)
}

/// True for paths that must be served as-is: API and asset paths,
/// operational endpoints, and anything that looks like a file.
pub fn is_passthrough(path: &str) -> bool {
    PASSTHROUGH_PREFIXES
        .iter()
        .any(|prefix| path.starts_with(prefix))
        || PASSTHROUGH_PATHS.contains(&path)
        || has_extension(path)
}

/// True when the path already begins with a supported locale segment,
/// either exactly (`/en`) or followed by a slash (`/en/...`).
pub fn has_locale_prefix(path: &str) -> bool {
    LocaleRegistry::get().list_enabled().iter().any(|locale| {
        let root = format!("/{}", locale.code);
        path == root || path.starts_with(&format!("{root}/"))
    })
}

/// Negotiate a locale from an `Accept-Language` header value.
///
/// Candidates are taken in header order; quality-value suffixes are
/// stripped rather than weighed, matching browsers' own preference order.
/// Each candidate is matched exactly against the supported set, then by its
/// base language subtag (`en-US` matches `en`). Malformed tokens are
/// skipped. An absent or unmatched header yields the default locale.
pub fn pick_locale(accept_language: Option<&str>) -> Locale {
    let Some(header) = accept_language else {
        return Locale::default();
    };

    for part in header.split(',') {
        let candidate = part
            .split(';')
            .next()
            .unwrap_or("")
            .trim()
            .to_ascii_lowercase();
        if candidate.is_empty() {
            continue;
        }

        if let Ok(locale) = Locale::from_code(&candidate) {
            return locale;
        }

        let base = candidate.split('-').next().unwrap_or("");
        if let Ok(locale) = Locale::from_code(base) {
            return locale;
        }
    }

    Locale::default()
}

/// Compute the locale-qualified path for a request, or `None` when the
/// path must pass through unchanged.
pub fn rewrite_path(path: &str, accept_language: Option<&str>) -> Option<String> {
    if is_passthrough(path) || has_locale_prefix(path) {
        return None;
    }

    let locale = pick_locale(accept_language);

    // The root maps to the locale root without a trailing slash so the
    // router matches it as a single segment.
    if path == "/" {
        Some(locale.home_path())
    } else {
        Some(format!("/{}{}", locale.code(), path))
    }
}

/// Middleware layer: rewrite the request URI in place (query preserved)
/// before routing. Internal rewrite only; the client never sees it.
pub async fn localize(mut request: Request, next: Next) -> Response {
    let accept_language = request
        .headers()
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let path = request.uri().path().to_owned();

    if let Some(rewritten) = rewrite_path(&path, accept_language.as_deref()) {
        let new_path_and_query = match request.uri().query() {
            Some(query) => format!("{rewritten}?{query}"),
            None => rewritten,
        };

        // A path derived from a valid URI stays valid; if it somehow does
        // not parse, serve the request unrewritten rather than fail it.
        if let Ok(path_and_query) = PathAndQuery::try_from(new_path_and_query.as_str()) {
            let mut parts = request.uri().clone().into_parts();
            parts.path_and_query = Some(path_and_query);
            if let Ok(uri) = Uri::from_parts(parts) {
                debug!("rewrote {} to {}", path, uri.path());
                *request.uri_mut() = uri;
            }
        }
    }

    next.run(request).await
}
