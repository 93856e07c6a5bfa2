use crate::error::{Result, ServiceError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub enum SmsProvider {
    /// Twilio SMS provider
    Twilio {
        account_sid: String,
        auth_token: String,
        from_number: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmsMessage {
    pub to: String,
    pub message: String,
}

#[derive(Clone)]
pub struct SmsService {
    provider: SmsProvider,
    client: reqwest::Client,
}

impl SmsService {
    pub fn new(provider: SmsProvider) -> Self {
        Self {
            provider,
            client: reqwest::Client::new(),
        }
    }

    /// Build from environment. Returns None when SMS is not configured;
    /// the platform degrades to email-only notifications.
    pub fn from_env() -> Option<Self> {
        let account_sid = std::env::var("TWILIO_ACCOUNT_SID").ok()?;
        let auth_token = std::env::var("TWILIO_AUTH_TOKEN").ok()?;
        let from_number = std::env::var("TWILIO_FROM_NUMBER").ok()?;

        Some(Self::new(SmsProvider::Twilio {
            account_sid,
            auth_token,
            from_number,
        }))
    }

    pub async fn send(&self, sms: SmsMessage) -> Result<()> {
        match &self.provider {
            SmsProvider::Twilio {
                account_sid,
                auth_token,
                from_number,
            } => {
                let url = format!(
                    "https://api.twilio.com/2010-04-01/Accounts/{}/Messages.json",
                    account_sid
                );

                let response = self
                    .client
                    .post(&url)
                    .basic_auth(account_sid, Some(auth_token))
                    .form(&[
                        ("To", sms.to.as_str()),
                        ("From", from_number.as_str()),
                        ("Body", sms.message.as_str()),
                    ])
                    .send()
                    .await
                    .map_err(|e| {
                        ServiceError::Internal(format!("Failed to send SMS via Twilio: {}", e))
                    })?;

                if !response.status().is_success() {
                    let status = response.status();
                    let error_text = response.text().await.unwrap_or_default();
                    return Err(ServiceError::Internal(format!(
                        "Twilio returned {}: {}",
                        status, error_text
                    )));
                }

                tracing::info!("SMS sent to {}", sms.to);
                Ok(())
            }
        }
    }
}
