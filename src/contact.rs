use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MAX_NAME_LEN: usize = 100;
pub const MAX_MESSAGE_LEN: usize = 5000;

#[cfg(feature = "ssr")]
pub const DEFAULT_API_URL: &str = "https://api.resend.com/emails";
#[cfg(feature = "ssr")]
pub const DEFAULT_FROM: &str = "Portfolio <onboarding@resend.dev>";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please tell me your name")]
    MissingName,
    #[error("Name is too long")]
    NameTooLong,
    #[error("Not a valid email address: {0}")]
    InvalidEmail(String),
    #[error("Message can't be empty")]
    EmptyMessage,
    #[error("Message is too long ({len} of {max} characters)")]
    MessageTooLong { len: usize, max: usize },
    #[error("Missing configuration: {0}")]
    MissingConfig(&'static str),
    #[error("Couldn't send message: {0}")]
    Delivery(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.is_empty() {
            return Err(ContactError::MissingName);
        }
        if self.name.chars().count() > MAX_NAME_LEN {
            return Err(ContactError::NameTooLong);
        }
        if !looks_like_email(&self.email) {
            return Err(ContactError::InvalidEmail(self.email.clone()));
        }
        if self.message.is_empty() {
            return Err(ContactError::EmptyMessage);
        }
        let len = self.message.chars().count();
        if len > MAX_MESSAGE_LEN {
            return Err(ContactError::MessageTooLong {
                len,
                max: MAX_MESSAGE_LEN,
            });
        }
        Ok(())
    }

    pub fn subject(&self) -> String {
        format!("Portfolio contact from {}", self.name)
    }

    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\n\n{}",
            self.name, self.email, self.message
        )
    }
}

fn looks_like_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && tld.len() >= 2,
        None => false,
    }
}

#[cfg(feature = "ssr")]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactConfig {
    pub api_url: String,
    pub api_key: String,
    pub to_address: String,
    pub from_address: String,
}

#[cfg(feature = "ssr")]
impl ContactConfig {
    pub fn from_env() -> Result<Self, ContactError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ContactError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Ok(Self {
            api_url: get("CONTACT_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            api_key: get("CONTACT_API_KEY")
                .ok_or(ContactError::MissingConfig("CONTACT_API_KEY"))?,
            to_address: get("CONTACT_TO").ok_or(ContactError::MissingConfig("CONTACT_TO"))?,
            from_address: get("CONTACT_FROM").unwrap_or_else(|| DEFAULT_FROM.to_string()),
        })
    }
}

#[cfg(feature = "ssr")]
#[derive(Debug, Serialize)]
struct EmailPayload<'a> {
    from: &'a str,
    to: Vec<&'a str>,
    reply_to: &'a str,
    subject: String,
    text: String,
}

#[cfg(feature = "ssr")]
static HTTP_CLIENT: std::sync::LazyLock<reqwest::Client> =
    std::sync::LazyLock::new(reqwest::Client::new);

#[cfg(feature = "ssr")]
pub async fn deliver(
    config: &ContactConfig,
    message: &ContactMessage,
) -> Result<(), ContactError> {
    let payload = EmailPayload {
        from: &config.from_address,
        to: vec![&config.to_address],
        reply_to: &message.email,
        subject: message.subject(),
        text: message.body(),
    };
    let response = HTTP_CLIENT
        .post(&config.api_url)
        .bearer_auth(&config.api_key)
        .json(&payload)
        .send()
        .await
        .map_err(|e| ContactError::Delivery(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let detail = response.text().await.unwrap_or_default();
        tracing::warn!(%status, %detail, "email api rejected contact message");
        return Err(ContactError::Delivery(format!("email api returned {status}")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(name: &str, email: &str, message: &str) -> ContactMessage {
        ContactMessage::new(name, email, message)
    }

    #[test]
    fn test_new_trims() {
        let m = msg("  Ada ", " ada@example.com\n", "\thello  ");
        assert_eq!(m.name, "Ada");
        assert_eq!(m.email, "ada@example.com");
        assert_eq!(m.message, "hello");
    }

    #[test]
    fn test_valid_message() {
        assert_eq!(msg("Ada", "ada@example.com", "Hi there").validate(), Ok(()));
        assert_eq!(
            msg("Ada", "ada.lovelace@mail.example.co.uk", "Hi").validate(),
            Ok(())
        );
    }

    #[test]
    fn test_missing_name() {
        assert_eq!(
            msg("   ", "ada@example.com", "Hi").validate(),
            Err(ContactError::MissingName)
        );
        let long_name = "a".repeat(MAX_NAME_LEN + 1);
        assert_eq!(
            msg(&long_name, "ada@example.com", "Hi").validate(),
            Err(ContactError::NameTooLong)
        );
    }

    #[test]
    fn test_invalid_email() {
        for email in [
            "",
            "ada",
            "ada@",
            "@example.com",
            "ada@example",
            "ada@.com",
            "ada@example.c",
            "ada@@example.com",
            "ada lovelace@example.com",
        ] {
            assert_eq!(
                msg("Ada", email, "Hi").validate(),
                Err(ContactError::InvalidEmail(email.to_string())),
                "{email} should be rejected"
            );
        }
    }

    #[test]
    fn test_message_bounds() {
        assert_eq!(
            msg("Ada", "ada@example.com", " \n ").validate(),
            Err(ContactError::EmptyMessage)
        );
        let at_limit = "x".repeat(MAX_MESSAGE_LEN);
        assert_eq!(msg("Ada", "ada@example.com", &at_limit).validate(), Ok(()));
        let too_long = "x".repeat(MAX_MESSAGE_LEN + 1);
        assert_eq!(
            msg("Ada", "ada@example.com", &too_long).validate(),
            Err(ContactError::MessageTooLong {
                len: MAX_MESSAGE_LEN + 1,
                max: MAX_MESSAGE_LEN
            })
        );
    }

    #[test]
    fn test_subject_and_body() {
        let m = msg("Ada", "ada@example.com", "Let's talk");
        assert_eq!(m.subject(), "Portfolio contact from Ada");
        assert_eq!(m.body(), "Name: Ada\nEmail: ada@example.com\n\nLet's talk");
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_config_from_lookup() {
        use std::collections::HashMap;

        let mut env = HashMap::new();
        env.insert("CONTACT_TO", "me@example.com");
        assert_eq!(
            ContactConfig::from_lookup(|k| env.get(k).map(|v| v.to_string())),
            Err(ContactError::MissingConfig("CONTACT_API_KEY"))
        );

        env.insert("CONTACT_API_KEY", "re_123");
        let config = ContactConfig::from_lookup(|k| env.get(k).map(|v| v.to_string()))
            .expect("config should load");
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.from_address, DEFAULT_FROM);
        assert_eq!(config.to_address, "me@example.com");

        env.insert("CONTACT_API_URL", "http://localhost:9000/send");
        env.insert("CONTACT_FROM", "  ");
        let config = ContactConfig::from_lookup(|k| env.get(k).map(|v| v.to_string()))
            .expect("config should load");
        assert_eq!(config.api_url, "http://localhost:9000/send");
        // blank values fall back to defaults
        assert_eq!(config.from_address, DEFAULT_FROM);

        env.remove("CONTACT_TO");
        assert_eq!(
            ContactConfig::from_lookup(|k| env.get(k).map(|v| v.to_string())),
            Err(ContactError::MissingConfig("CONTACT_TO"))
        );
    }
}
