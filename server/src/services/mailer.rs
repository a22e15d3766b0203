//! Delivery of sign-in access codes.
//!
//! DESIGN
//! ======
//! Delivery sits behind the `CodeMailer` trait so the email-auth routes do not
//! care whether Resend is configured. Without credentials the `LogMailer`
//! writes the code to the server log, which is enough for local development.

use async_trait::async_trait;
use resend_rs::Resend;
use resend_rs::types::CreateEmailBaseOptions;

use crate::config::ResendConfig;

const EMAIL_AUTH_TEMPLATE: &str = include_str!("../../templates/email_auth.html");
const EMAIL_AUTH_SUBJECT: &str = "Your Guildustry sign-in code";

#[derive(Debug, thiserror::Error)]
#[error("email delivery failed: {0}")]
pub struct DeliveryError(pub String);

#[async_trait]
pub trait CodeMailer: Send + Sync {
    /// Deliver `code` to `to_email`.
    async fn send_code(&self, to_email: &str, code: &str) -> Result<(), DeliveryError>;

    /// Short label for logs.
    fn name(&self) -> &'static str;
}

/// Sends codes through the Resend API.
pub struct ResendMailer {
    client: Resend,
    from: String,
}

impl ResendMailer {
    #[must_use]
    pub fn new(config: &ResendConfig) -> Self {
        Self { client: Resend::new(&config.api_key), from: config.from.clone() }
    }
}

#[async_trait]
impl CodeMailer for ResendMailer {
    async fn send_code(&self, to_email: &str, code: &str) -> Result<(), DeliveryError> {
        let to = [to_email];
        let html = render_email_auth_template(to_email, code);
        let email = CreateEmailBaseOptions::new(&self.from, to, EMAIL_AUTH_SUBJECT).with_html(&html);
        self.client
            .emails
            .send(email)
            .await
            .map_err(|e| DeliveryError(e.to_string()))?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "resend"
    }
}

/// Writes codes to the tracing log instead of sending them.
pub struct LogMailer;

#[async_trait]
impl CodeMailer for LogMailer {
    async fn send_code(&self, to_email: &str, code: &str) -> Result<(), DeliveryError> {
        tracing::info!(email = %to_email, %code, "access code generated (email delivery disabled)");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "log"
    }
}

#[must_use]
pub fn render_email_auth_template(email: &str, code: &str) -> String {
    EMAIL_AUTH_TEMPLATE
        .replace("{{EMAIL}}", email)
        .replace("{{CODE}}", code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_template_injects_email_and_code() {
        let html = render_email_auth_template("user@example.com", "ABC234");
        assert!(html.contains("user@example.com"));
        assert!(html.contains("ABC234"));
        assert!(!html.contains("{{EMAIL}}"));
        assert!(!html.contains("{{CODE}}"));
    }

    #[tokio::test]
    async fn log_mailer_always_succeeds() {
        let mailer = LogMailer;
        assert!(mailer.send_code("user@example.com", "ABC234").await.is_ok());
        assert_eq!(mailer.name(), "log");
    }
}
