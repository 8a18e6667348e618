//! Server-rendered pages.
//!
//! Semantic markup only; the metadata builder supplies everything in the
//! `<head>`, and the dictionary supplies every visible string.

use maud::{html, Markup, DOCTYPE};

use crate::i18n::Locale;
use crate::quote::SERVICE_OPTIONS;
use crate::seo::PageMetadata;

/// One-shot submission feedback decoded from the `ok`/`msg` query
/// parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub ok: bool,
    pub message: String,
}

/// Base HTML document: metadata head, site header, content, footer.
fn base_document(locale: Locale, page: &PageMetadata, content: Markup) -> Markup {
    let strings = locale.strings();
    html! {
        (DOCTYPE)
        html lang=(locale.code()) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (page.title) }
                meta name="description" content=(page.description);
                link rel="canonical" href=(page.canonical);
                meta property="og:type" content=(page.open_graph.kind);
                meta property="og:locale" content=(page.open_graph.locale_tag);
                meta property="og:site_name" content=(page.open_graph.site_name);
                meta property="og:title" content=(page.open_graph.title);
                meta property="og:description" content=(page.open_graph.description);
                meta property="og:url" content=(page.open_graph.url);
                meta property="og:image" content=(page.open_graph.image.url);
                meta property="og:image:width" content=(page.open_graph.image.width);
                meta property="og:image:height" content=(page.open_graph.image.height);
                meta property="og:image:alt" content=(page.open_graph.image.alt);
                meta name="twitter:card" content=(page.twitter.card);
                meta name="twitter:title" content=(page.twitter.title);
                meta name="twitter:description" content=(page.twitter.description);
                meta name="twitter:image" content=(page.twitter.image);
                @for alternate in &page.alternates {
                    link rel="alternate" hreflang=(alternate.locale) href=(alternate.href);
                }
            }
            body {
                (site_header(locale))
                main { (content) }
                footer { small { (strings.app_title) } }
            }
        }
    }
}

fn site_header(locale: Locale) -> Markup {
    let strings = locale.strings();
    html! {
        header {
            nav {
                a href=(locale.home_path()) { (strings.app_title) }
                a href={ (locale.home_path()) "/arquitectura" } { (strings.nav_architecture) }
                a href={ (locale.home_path()) "/construccion" } { (strings.nav_construction) }
            }
        }
    }
}

/// The home page: hero, service links, feedback banner, contact form.
pub fn home(locale: Locale, page: &PageMetadata, banner: Option<&Banner>) -> Markup {
    let strings = locale.strings();
    let content = html! {
        section #top {
            h1 { (strings.hero_title) }
            p { (strings.hero_subtitle) }
            p {
                a href="#contacto" { (strings.cta_primary) }
                " "
                a href="#servicios" { (strings.cta_secondary) }
            }
        }
        section #servicios {
            ul {
                li { a href={ (locale.home_path()) "/arquitectura" } { (strings.nav_architecture) } }
                li { a href={ (locale.home_path()) "/construccion" } { (strings.nav_construction) } }
            }
        }
        section #contacto {
            h2 { (strings.contact_heading) }
            p { (strings.contact_intro) }
            @if let Some(banner) = banner {
                div class=(if banner.ok { "banner banner-ok" } else { "banner banner-error" }) {
                    p { (banner.message) }
                }
            }
            (contact_form(locale))
        }
    };
    base_document(locale, page, content)
}

fn contact_form(locale: Locale) -> Markup {
    let strings = locale.strings();
    html! {
        form method="post" action="/api/quote" {
            input type="hidden" name="locale" value=(locale.code());
            label {
                span { (strings.form_name_label) }
                input name="name" required;
            }
            label {
                span { (strings.form_email_label) }
                input type="email" name="email" required;
            }
            label {
                span { (strings.form_phone_label) }
                input name="phone";
            }
            label {
                span { (strings.form_service_label) }
                select name="service" required {
                    option value="" { (strings.form_service_placeholder) }
                    @for service in SERVICE_OPTIONS {
                        option value=(service) { (service) }
                    }
                }
            }
            label {
                span { (strings.form_message_label) }
                textarea name="message" rows="5" required {}
            }
            button type="submit" { (strings.form_submit) }
        }
    }
}

/// A section page (architecture, construction, finishes): localized
/// heading and description.
pub fn section_page(locale: Locale, page: &PageMetadata) -> Markup {
    base_document(
        locale,
        page,
        html! {
            section {
                h1 { (page.title) }
                p { (page.description) }
            }
        },
    )
}
