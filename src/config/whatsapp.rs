use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_required_field, validate_url,
    Validate,
};
use std::env;
use std::time::Duration;

pub const DEFAULT_GRAPH_API_URL: &str = "https://graph.facebook.com/v20.0";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Credentials and endpoint for the WhatsApp Cloud API.
#[derive(Clone)]
pub struct WhatsAppConfig {
    pub access_token: String,
    pub phone_number_id: String,
    /// Token Meta echoes back when subscribing the webhook.
    pub verify_token: String,
    pub api_base_url: String,
    pub timeout_seconds: u64,
}

// keep secrets out of logs
impl std::fmt::Debug for WhatsAppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WhatsAppConfig")
            .field("access_token", &"***")
            .field("phone_number_id", &self.phone_number_id)
            .field("verify_token", &"***")
            .field("api_base_url", &self.api_base_url)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

impl WhatsAppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reads through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let access_token = lookup("WHATSAPP_TOKEN");
        let phone_number_id = lookup("PHONE_NUMBER_ID");
        let verify_token = lookup("VERIFY_TOKEN");

        Ok(Self {
            access_token: validate_required_field("WHATSAPP_TOKEN", &access_token)?.clone(),
            phone_number_id: validate_required_field("PHONE_NUMBER_ID", &phone_number_id)?.clone(),
            verify_token: validate_required_field("VERIFY_TOKEN", &verify_token)?.clone(),
            api_base_url: lookup("GRAPH_API_URL")
                .unwrap_or_else(|| DEFAULT_GRAPH_API_URL.to_string()),
            timeout_seconds: lookup("GRAPH_API_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        })
    }

    pub fn messages_url(&self) -> String {
        format!(
            "{}/{}/messages",
            self.api_base_url.trim_end_matches('/'),
            self.phone_number_id
        )
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Validate for WhatsAppConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("WHATSAPP_TOKEN", &self.access_token)?;
        validate_non_empty_string("PHONE_NUMBER_ID", &self.phone_number_id)?;
        validate_non_empty_string("VERIFY_TOKEN", &self.verify_token)?;
        validate_url("GRAPH_API_URL", &self.api_base_url)?;
        validate_positive_number("GRAPH_API_TIMEOUT_SECS", self.timeout_seconds, 1)?;

        tracing::debug!("✅ WhatsApp configuration validation passed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::BotError;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_from_lookup_applies_defaults() {
        let config = WhatsAppConfig::from_lookup(lookup_from(&[
            ("WHATSAPP_TOKEN", "tok"),
            ("PHONE_NUMBER_ID", "12345"),
            ("VERIFY_TOKEN", "verify"),
        ]))
        .unwrap();

        assert_eq!(config.api_base_url, DEFAULT_GRAPH_API_URL);
        assert_eq!(config.timeout_seconds, 10);
        assert_eq!(
            config.messages_url(),
            "https://graph.facebook.com/v20.0/12345/messages"
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_token_is_reported_by_name() {
        let err = WhatsAppConfig::from_lookup(lookup_from(&[
            ("PHONE_NUMBER_ID", "12345"),
            ("VERIFY_TOKEN", "verify"),
        ]))
        .unwrap_err();

        match err {
            BotError::MissingConfigError { field } => assert_eq!(field, "WHATSAPP_TOKEN"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_messages_url_tolerates_trailing_slash() {
        let config = WhatsAppConfig::from_lookup(lookup_from(&[
            ("WHATSAPP_TOKEN", "tok"),
            ("PHONE_NUMBER_ID", "42"),
            ("VERIFY_TOKEN", "verify"),
            ("GRAPH_API_URL", "http://localhost:9000/"),
            ("GRAPH_API_TIMEOUT_SECS", "3"),
        ]))
        .unwrap();

        assert_eq!(config.messages_url(), "http://localhost:9000/42/messages");
        assert_eq!(config.timeout(), Duration::from_secs(3));
    }

    #[test]
    fn test_debug_hides_secrets() {
        let config = WhatsAppConfig::from_lookup(lookup_from(&[
            ("WHATSAPP_TOKEN", "super-secret"),
            ("PHONE_NUMBER_ID", "42"),
            ("VERIFY_TOKEN", "also-secret"),
        ]))
        .unwrap();

        let printed = format!("{:?}", config);
        assert!(!printed.contains("super-secret"));
        assert!(!printed.contains("also-secret"));
    }
}
