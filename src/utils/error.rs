use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Messaging API returned {status}: {body}")]
    TransportError { status: u16, body: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Data,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl BotError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BotError::ApiError(_) | BotError::TransportError { .. } => ErrorCategory::Network,
            BotError::ConfigError { .. }
            | BotError::ConfigValidationError { .. }
            | BotError::InvalidConfigValueError { .. }
            | BotError::MissingConfigError { .. }
            | BotError::TomlError(_) => ErrorCategory::Configuration,
            BotError::SerializationError(_) => ErrorCategory::Data,
            BotError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 4xx from the Graph API usually means one bad reply, 5xx is worth retrying by hand
            BotError::TransportError { status, .. } if *status >= 500 => ErrorSeverity::Medium,
            BotError::TransportError { .. } => ErrorSeverity::Low,
            BotError::ApiError(_) => ErrorSeverity::Medium,
            BotError::SerializationError(_) => ErrorSeverity::High,
            BotError::ConfigError { .. }
            | BotError::ConfigValidationError { .. }
            | BotError::InvalidConfigValueError { .. }
            | BotError::MissingConfigError { .. }
            | BotError::TomlError(_) => ErrorSeverity::High,
            BotError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            BotError::ApiError(_) => {
                "Check network connectivity and GRAPH_API_URL".to_string()
            }
            BotError::TransportError { status, .. } if *status == 401 || *status == 403 => {
                "WHATSAPP_TOKEN is invalid or expired, generate a new access token".to_string()
            }
            BotError::TransportError { .. } => {
                "Inspect the response body; the reply payload may exceed WhatsApp limits"
                    .to_string()
            }
            BotError::MissingConfigError { field } => {
                format!("Set {} in the environment or the config file", field)
            }
            BotError::InvalidConfigValueError { field, .. }
            | BotError::ConfigValidationError { field, .. } => {
                format!("Fix the value of '{}' in the config file", field)
            }
            BotError::ConfigError { .. } | BotError::TomlError(_) => {
                "Make sure the config file exists and is valid TOML".to_string()
            }
            BotError::SerializationError(_) => {
                "The payload could not be encoded as JSON, check catalog text".to_string()
            }
            BotError::IoError(_) => "Check file permissions and that the port is free".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not reach the messaging API ({})", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Data => format!("Could not build a reply: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, BotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_severity_depends_on_status() {
        let client_side = BotError::TransportError {
            status: 400,
            body: "bad".to_string(),
        };
        let server_side = BotError::TransportError {
            status: 503,
            body: "down".to_string(),
        };

        assert_eq!(client_side.severity(), ErrorSeverity::Low);
        assert_eq!(server_side.severity(), ErrorSeverity::Medium);
        assert_eq!(client_side.category(), ErrorCategory::Network);
    }

    #[test]
    fn test_missing_config_suggestion_names_field() {
        let err = BotError::MissingConfigError {
            field: "VERIFY_TOKEN".to_string(),
        };
        assert!(err.recovery_suggestion().contains("VERIFY_TOKEN"));
        assert!(err.user_friendly_message().starts_with("Configuration problem"));
    }
}
