use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // SMTP relay
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_user: String,
    pub smtp_pass: String,

    // Quote notifications
    pub contact_to: String,
    pub contact_from: String,

    // Public site
    pub site_url: String,

    // Server
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // SMTP relay (port 465 selects implicit TLS, anything else STARTTLS)
            smtp_host: std::env::var("SMTP_HOST").context("SMTP_HOST not set")?,
            smtp_port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(587),
            smtp_user: std::env::var("SMTP_USER").context("SMTP_USER not set")?,
            smtp_pass: std::env::var("SMTP_PASS").context("SMTP_PASS not set")?,

            // Quote notifications
            contact_to: std::env::var("CONTACT_TO").context("CONTACT_TO not set")?,
            contact_from: std::env::var("CONTACT_FROM").context("CONTACT_FROM not set")?,

            // Public site base URL, without a trailing slash
            site_url: std::env::var("SITE_URL")
                .unwrap_or_else(|_| "https://example.com".to_string())
                .trim_end_matches('/')
                .to_string(),

            // Server
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
        })
    }
}
