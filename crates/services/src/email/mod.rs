pub mod templates;

use crate::error::{Result, ServiceError};
use lettre::{
    message::{header::ContentType, Mailbox, MultiPart, SinglePart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub enum EmailProvider {
    Smtp {
        host: String,
        port: u16,
        username: Option<String>,
        password: Option<String>,
        from_email: String,
        from_name: String,
    },
    /// Local development sink (MailHog and friends): no TLS, no auth.
    Local {
        host: String,
        port: u16,
        from_email: String,
        from_name: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailMessage {
    pub to: String,
    pub to_name: Option<String>,
    pub subject: String,
    pub text_body: String,
    pub html_body: Option<String>,
}

#[derive(Clone)]
pub struct EmailService {
    provider: EmailProvider,
}

impl EmailService {
    pub fn new(provider: EmailProvider) -> Self {
        Self { provider }
    }

    pub fn from_env() -> Result<Self> {
        let email_provider =
            std::env::var("EMAIL_PROVIDER").unwrap_or_else(|_| "local".to_string());

        let provider = match email_provider.as_str() {
            "local" => EmailProvider::Local {
                host: std::env::var("MAIL_HOST").unwrap_or_else(|_| "localhost".to_string()),
                port: std::env::var("MAIL_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(1025),
                from_email: std::env::var("EMAIL_FROM")
                    .unwrap_or_else(|_| "noreply@mentorship.dev".to_string()),
                from_name: std::env::var("EMAIL_FROM_NAME")
                    .unwrap_or_else(|_| "Mentorship Platform".to_string()),
            },
            "smtp" => EmailProvider::Smtp {
                host: std::env::var("SMTP_HOST")
                    .map_err(|_| ServiceError::Internal("SMTP_HOST not configured".to_string()))?,
                port: std::env::var("SMTP_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(587),
                username: std::env::var("SMTP_USERNAME").ok(),
                password: std::env::var("SMTP_PASSWORD").ok(),
                from_email: std::env::var("EMAIL_FROM")
                    .map_err(|_| ServiceError::Internal("EMAIL_FROM not configured".to_string()))?,
                from_name: std::env::var("EMAIL_FROM_NAME")
                    .unwrap_or_else(|_| "Mentorship Platform".to_string()),
            },
            _ => {
                return Err(ServiceError::Internal(format!(
                    "Unknown email provider: {}",
                    email_provider
                )))
            }
        };

        Ok(Self { provider })
    }

    pub async fn send(&self, email: EmailMessage) -> Result<()> {
        match &self.provider {
            EmailProvider::Smtp {
                host,
                port,
                username,
                password,
                from_email,
                from_name,
            } => {
                self.send_smtp(
                    host,
                    *port,
                    username.as_deref(),
                    password.as_deref(),
                    from_email,
                    from_name,
                    false,
                    email,
                )
                .await
            }
            EmailProvider::Local {
                host,
                port,
                from_email,
                from_name,
            } => {
                self.send_smtp(host, *port, None, None, from_email, from_name, true, email)
                    .await
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    async fn send_smtp(
        &self,
        host: &str,
        port: u16,
        username: Option<&str>,
        password: Option<&str>,
        from_email: &str,
        from_name: &str,
        plaintext_transport: bool,
        email: EmailMessage,
    ) -> Result<()> {
        let from = format!("{} <{}>", from_name, from_email)
            .parse::<Mailbox>()
            .map_err(|e| ServiceError::Internal(format!("Invalid from address: {}", e)))?;

        let to = if let Some(name) = &email.to_name {
            format!("{} <{}>", name, email.to)
        } else {
            email.to.clone()
        }
        .parse::<Mailbox>()
        .map_err(|e| ServiceError::Internal(format!("Invalid to address: {}", e)))?;

        let message_builder = Message::builder().from(from).to(to).subject(&email.subject);

        let message = if let Some(html) = &email.html_body {
            message_builder
                .multipart(
                    MultiPart::alternative()
                        .singlepart(
                            SinglePart::builder()
                                .header(ContentType::TEXT_PLAIN)
                                .body(email.text_body.clone()),
                        )
                        .singlepart(
                            SinglePart::builder()
                                .header(ContentType::TEXT_HTML)
                                .body(html.clone()),
                        ),
                )
                .map_err(|e| ServiceError::Internal(format!("Failed to build email: {}", e)))?
        } else {
            message_builder
                .body(email.text_body.clone())
                .map_err(|e| ServiceError::Internal(format!("Failed to build email: {}", e)))?
        };

        let mailer = if plaintext_transport {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
                .port(port)
                .build()
        } else {
            let mut transport_builder = AsyncSmtpTransport::<Tokio1Executor>::relay(host)
                .map_err(|e| {
                    ServiceError::Internal(format!("Failed to create SMTP transport: {}", e))
                })?
                .port(port);

            if let (Some(user), Some(pass)) = (username, password) {
                transport_builder = transport_builder
                    .credentials(Credentials::new(user.to_string(), pass.to_string()));
            }

            transport_builder.build()
        };

        mailer
            .send(message)
            .await
            .map_err(|e| ServiceError::Internal(format!("Failed to send email: {}", e)))?;

        tracing::info!(
            "Email sent to {} with subject: {}",
            email.to,
            email.subject
        );

        Ok(())
    }
}
