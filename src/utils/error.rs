use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmsError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("XML error: {0}")]
    XmlError(#[from] quick_xml::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Service returned HTTP {status}: {body}")]
    HttpStatusError { status: u16, body: String },

    #[error("SOAP fault ({code}): {message}")]
    SoapFault { code: String, message: String },

    #[error("Could not decode <{element}>: {message}")]
    DecodeError { element: String, message: String },

    #[error("No credentials configured for the service agent")]
    MissingCredentials,

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("{name}: {reason}")]
    InvalidArgument { name: String, reason: String },

    #[error("Could not read asset {path}: {source}")]
    AssetError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Protocol,
    Configuration,
    Input,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl EmsError {
    pub fn invalid_argument(name: &str, reason: &str) -> Self {
        EmsError::InvalidArgument {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn decode(element: &str, message: impl Into<String>) -> Self {
        EmsError::DecodeError {
            element: element.to_string(),
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            EmsError::HttpError(_) | EmsError::HttpStatusError { .. } => ErrorCategory::Network,
            EmsError::XmlError(_)
            | EmsError::SoapFault { .. }
            | EmsError::DecodeError { .. }
            | EmsError::SerializationError(_) => ErrorCategory::Protocol,
            EmsError::TomlError(_)
            | EmsError::MissingCredentials
            | EmsError::ConfigError { .. }
            | EmsError::MissingConfigError { .. }
            | EmsError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            EmsError::InvalidArgument { .. } | EmsError::AssetError { .. } => ErrorCategory::Input,
            EmsError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Protocol | ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            EmsError::HttpError(_) => {
                "Check the network connection and the service URL".to_string()
            }
            EmsError::HttpStatusError { status, .. } if *status >= 500 => {
                "The eMS service reported an internal error, try again later".to_string()
            }
            EmsError::HttpStatusError { .. } => {
                "Check that the service URL points to serviceagent.asmx".to_string()
            }
            EmsError::SoapFault { .. } => {
                "Check the login data and that your application is registered in eMS".to_string()
            }
            EmsError::MissingCredentials => {
                "Provide account, username, password and application via config file, flags or EMS_* env vars".to_string()
            }
            EmsError::MissingConfigError { field } => format!("Set '{}' in the configuration", field),
            EmsError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the configuration", field)
            }
            EmsError::AssetError { .. } => {
                "Make sure the assets directory contains the demo images".to_string()
            }
            EmsError::InvalidArgument { .. } => "Check the GUIDs passed to the demo".to_string(),
            _ => "Run again with --verbose for details".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not reach the eMS service: {}", self),
            ErrorCategory::Protocol => format!("The eMS service rejected the request: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Input => format!("Invalid input: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, EmsError>;
