//! Quote-request intake: validation and message composition.
//!
//! A quote request lives for the duration of one submission: built from
//! untrusted form input, validated, composed into a notification email, and
//! discarded. Nothing is ever persisted.

use std::sync::OnceLock;

use maud::html;
use regex::Regex;
use serde::Deserialize;

use crate::error::ValidationError;
use crate::i18n::Locale;

/// The services offered in the contact form's select.
///
/// Values are submitted verbatim (the notification goes to a
/// Spanish-speaking inbox), so they are not localized.
pub const SERVICE_OPTIONS: [&str; 2] = ["Arquitectura", "Construcción"];

/// Raw, untrusted form payload as posted by the contact form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuoteForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub locale: String,
}

/// A validated quote request, ready to be composed into an email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub service: String,
    pub message: String,
    pub locale: Locale,
}

static EMAIL_SHAPE: OnceLock<Regex> = OnceLock::new();

/// Basic email shape check: local part, `@`, domain with a dot, no
/// embedded whitespace. Deliverability is the relay's problem.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap())
        .is_match(email)
}

impl QuoteRequest {
    /// Trim and validate a raw form payload.
    ///
    /// Name, email, service and message are required; phone is optional and
    /// unvalidated; an unknown locale normalizes to the default.
    pub fn from_form(form: QuoteForm) -> Result<Self, ValidationError> {
        let name = form.name.trim().to_string();
        let email = form.email.trim().to_string();
        let phone = form.phone.trim().to_string();
        let service = form.service.trim().to_string();
        let message = form.message.trim().to_string();
        let locale = Locale::from_code(form.locale.trim()).unwrap_or_default();

        if name.is_empty() || email.is_empty() || service.is_empty() || message.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        if !is_valid_email(&email) {
            return Err(ValidationError::InvalidEmail);
        }

        Ok(Self {
            name,
            email,
            phone: if phone.is_empty() { None } else { Some(phone) },
            service,
            message,
            locale,
        })
    }

    /// Notification subject line.
    pub fn subject(&self) -> String {
        format!("Nueva cotización — {} — {}", self.service, self.name)
    }

    /// Plain-text rendering: a newline-joined field listing.
    pub fn text_body(&self) -> String {
        let phone = self.phone.as_deref().unwrap_or("-");
        [
            format!("Nombre: {}", self.name),
            format!("Email: {}", self.email),
            format!("Teléfono: {phone}"),
            format!("Servicio: {}", self.service),
            String::new(),
            "Mensaje:".to_string(),
            self.message.clone(),
        ]
        .join("\n")
    }

    /// HTML rendering: field-labeled paragraphs, with the message's
    /// internal newlines converted to line breaks. All fields are escaped
    /// by the renderer.
    pub fn html_body(&self) -> String {
        let phone = self.phone.as_deref().unwrap_or("-");
        html! {
            h2 { "Nueva solicitud de cotización" }
            p { strong { "Nombre:" } " " (self.name) }
            p { strong { "Email:" } " " (self.email) }
            p { strong { "Teléfono:" } " " (phone) }
            p { strong { "Servicio:" } " " (self.service) }
            p {
                strong { "Mensaje:" }
                br;
                @for (index, line) in self.message.lines().enumerate() {
                    @if index > 0 { br; }
                    (line)
                }
            }
        }
        .into_string()
    }
}
