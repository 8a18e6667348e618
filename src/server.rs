//! HTTP surface: router assembly and request handlers.
//!
//! Every page route sits behind the locale-resolving middleware, so by the
//! time a handler runs its `:locale` segment is a supported code (explicit
//! prefixes pass through, everything else was rewritten). The quote
//! endpoint lives under `/api`, which the resolver never touches.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    middleware,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Json, Router,
};
use chrono::Utc;
use maud::Markup;
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::{
    config::Config,
    error::ValidationError,
    i18n::{Locale, TextKey},
    mail::{Mailer, OutboundEmail},
    pages::{self, Banner},
    quote::{QuoteForm, QuoteRequest},
    resolver, seo, sitemap,
};

/// Shared application state: immutable configuration plus the mail
/// transport.
#[derive(Clone)]
pub struct AppState<M: Mailer> {
    pub config: Arc<Config>,
    pub mailer: M,
}

/// Assemble the full router.
pub fn build_router<M: Mailer>(config: Config, mailer: M) -> Router {
    let state = AppState {
        config: Arc::new(config),
        mailer,
    };

    Router::new()
        .route("/healthz", get(healthz))
        .route("/robots.txt", get(robots::<M>))
        .route("/sitemap.xml", get(sitemap_xml::<M>))
        .route("/api/quote", post(submit_quote::<M>))
        .route("/:locale", get(home::<M>))
        .route("/:locale/arquitectura", get(architecture::<M>))
        .route("/:locale/construccion", get(construction::<M>))
        .route("/:locale/acabados", get(finishes::<M>))
        .layer(middleware::from_fn(resolver::localize))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ==================== Page Handlers ====================

/// One-shot feedback carried in the redirect query string.
#[derive(Debug, Default, Deserialize)]
pub struct FeedbackQuery {
    ok: Option<String>,
    msg: Option<String>,
}

impl FeedbackQuery {
    fn banner(&self) -> Option<Banner> {
        self.msg.as_ref().map(|message| Banner {
            ok: self.ok.as_deref() == Some("1"),
            message: message.clone(),
        })
    }
}

async fn home<M: Mailer>(
    State(state): State<AppState<M>>,
    Path(locale): Path<String>,
    Query(feedback): Query<FeedbackQuery>,
) -> Markup {
    let locale = Locale::from_code(&locale).unwrap_or_default();
    let metadata = seo::page_metadata(
        &state.config.site_url,
        locale,
        TextKey::MetaTitleHome,
        TextKey::MetaDescHome,
        &locale.home_path(),
    );
    pages::home(locale, &metadata, feedback.banner().as_ref())
}

async fn architecture<M: Mailer>(
    State(state): State<AppState<M>>,
    Path(locale): Path<String>,
) -> Markup {
    section(
        &state,
        &locale,
        TextKey::MetaTitleArchitecture,
        TextKey::MetaDescArchitecture,
        "arquitectura",
    )
}

async fn construction<M: Mailer>(
    State(state): State<AppState<M>>,
    Path(locale): Path<String>,
) -> Markup {
    section(
        &state,
        &locale,
        TextKey::MetaTitleConstruction,
        TextKey::MetaDescConstruction,
        "construccion",
    )
}

async fn finishes<M: Mailer>(
    State(state): State<AppState<M>>,
    Path(locale): Path<String>,
) -> Markup {
    section(
        &state,
        &locale,
        TextKey::MetaTitleFinishes,
        TextKey::MetaDescFinishes,
        "acabados",
    )
}

fn section<M: Mailer>(
    state: &AppState<M>,
    locale: &str,
    title_key: TextKey,
    desc_key: TextKey,
    slug: &str,
) -> Markup {
    let locale = Locale::from_code(locale).unwrap_or_default();
    let path = format!("{}/{slug}", locale.home_path());
    let metadata = seo::page_metadata(&state.config.site_url, locale, title_key, desc_key, &path);
    pages::section_page(locale, &metadata)
}

// ==================== Quote Submission ====================

async fn submit_quote<M: Mailer>(
    State(state): State<AppState<M>>,
    Form(form): Form<QuoteForm>,
) -> Redirect {
    // The locale survives validation failure so feedback stays localized.
    let locale = Locale::from_code(form.locale.trim()).unwrap_or_default();
    let strings = locale.strings();

    let quote = match QuoteRequest::from_form(form) {
        Ok(quote) => quote,
        Err(ValidationError::MissingFields) => {
            return feedback_redirect(locale, false, strings.feedback_missing_fields);
        }
        Err(ValidationError::InvalidEmail) => {
            return feedback_redirect(locale, false, strings.feedback_invalid_email);
        }
    };

    let email = OutboundEmail {
        to: state.config.contact_to.clone(),
        from: state.config.contact_from.clone(),
        reply_to: quote.email.clone(),
        subject: quote.subject(),
        text_body: quote.text_body(),
        html_body: Some(quote.html_body()),
    };

    match state.mailer.send(email).await {
        Ok(()) => {
            info!("quote request forwarded for service '{}'", quote.service);
            feedback_redirect(locale, true, strings.feedback_sent)
        }
        Err(error) => {
            // The cause stays in the logs; the visitor sees a generic
            // retry message.
            warn!("quote delivery failed: {error}");
            feedback_redirect(locale, false, strings.feedback_send_failed)
        }
    }
}

/// Redirect to the locale home with one-shot feedback in the query string.
fn feedback_redirect(locale: Locale, ok: bool, message: &str) -> Redirect {
    let flag = if ok { "1" } else { "0" };
    let query = serde_urlencoded::to_string([("ok", flag), ("msg", message)])
        .unwrap_or_else(|_| format!("ok={flag}"));
    Redirect::to(&format!("{}?{query}", locale.home_path()))
}

// ==================== Operational Routes ====================

async fn healthz() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn robots<M: Mailer>(State(state): State<AppState<M>>) -> String {
    format!(
        "User-agent: *\nAllow: /\n\nSitemap: {}/sitemap.xml\n",
        state.config.site_url
    )
}

async fn sitemap_xml<M: Mailer>(State(state): State<AppState<M>>) -> Response {
    let entries = sitemap::entries(&state.config.site_url, Utc::now().date_naive());
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/xml")],
        sitemap::render_xml(&entries),
    )
        .into_response()
}
