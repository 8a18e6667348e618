//! Outbound mail transport.
//!
//! The submission handler talks to a `Mailer`, not to SMTP directly; the
//! production implementation drives lettre's async transport, while tests
//! substitute a recording double.

use std::future::Future;

use lettre::{
    message::{header::ContentType, Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::info;

use crate::{config::Config, error::DeliveryError};

/// A fully composed outbound email, ready for the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub to: String,
    pub from: String,
    pub reply_to: String,
    pub subject: String,
    pub text_body: String,
    pub html_body: Option<String>,
}

/// Delivery seam for composed messages.
///
/// Any failure is a `DeliveryError`; callers treat every variant the same
/// way (no retries, generic user-facing message).
pub trait Mailer: Clone + Send + Sync + 'static {
    /// Hand one message to the transport and await the outcome.
    fn send(&self, email: OutboundEmail) -> impl Future<Output = Result<(), DeliveryError>> + Send;
}

/// Assemble the MIME message: plain text always, multipart/alternative
/// when an HTML rendering is present.
fn build_message(email: &OutboundEmail) -> Result<Message, DeliveryError> {
    let builder = Message::builder()
        .from(email.from.parse::<Mailbox>()?)
        .to(email.to.parse::<Mailbox>()?)
        .reply_to(email.reply_to.parse::<Mailbox>()?)
        .subject(email.subject.as_str());

    let message = match &email.html_body {
        Some(html) => builder.multipart(MultiPart::alternative_plain_html(
            email.text_body.clone(),
            html.clone(),
        ))?,
        None => builder
            .header(ContentType::TEXT_PLAIN)
            .body(email.text_body.clone())?,
    };

    Ok(message)
}

/// SMTP-backed mailer.
#[derive(Clone)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    /// Build the transport from configuration.
    ///
    /// Port 465 selects implicit TLS; any other port negotiates STARTTLS.
    pub fn from_config(config: &Config) -> Result<Self, DeliveryError> {
        let builder = if config.smtp_port == 465 {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
        };

        let transport = builder
            .port(config.smtp_port)
            .credentials(Credentials::new(
                config.smtp_user.clone(),
                config.smtp_pass.clone(),
            ))
            .build();

        Ok(Self { transport })
    }
}

impl Mailer for SmtpMailer {
    async fn send(&self, email: OutboundEmail) -> Result<(), DeliveryError> {
        let message = build_message(&email)?;
        self.transport.send(message).await?;
        info!("quote notification dispatched to {}", email.to);
        Ok(())
    }
}
