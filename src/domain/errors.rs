use std::fmt::{Display, Formatter, Result as FmtResult};

/// Root error type for the entire application
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    Application(ApplicationError),
    Infrastructure(InfrastructureError),
}

/// Application layer errors
#[derive(Debug, Clone, PartialEq)]
pub enum ApplicationError {
    /// The backend answered, but refused the action (`status` other than success)
    ActionRejected { action: String, message: String },
    Configuration(ConfigurationError),
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    InvalidParameter { key: String, value: String },
    OutOfRange { key: String, value: String, min: String },
}

/// Infrastructure layer errors
#[derive(Debug, Clone, PartialEq)]
pub enum InfrastructureError {
    Network(NetworkError),
}

/// Network-related errors. Handling treats them all alike; the split only feeds the log.
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkError {
    HttpRequestFailed(String),
    HttpStatus { status: u16, status_text: String },
    Serialization(String),
    Deserialization(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            AppError::Application(e) => write!(f, "Application Error: {}", e),
            AppError::Infrastructure(e) => write!(f, "Infrastructure Error: {}", e),
        }
    }
}

impl Display for ApplicationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ApplicationError::ActionRejected { action, message } => {
                write!(f, "{} rejected by backend: {}", action, message)
            }
            ApplicationError::Configuration(e) => write!(f, "Configuration: {}", e),
        }
    }
}

impl Display for ConfigurationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ConfigurationError::InvalidParameter { key, value } => {
                write!(f, "invalid value '{}' for '{}'", value, key)
            }
            ConfigurationError::OutOfRange { key, value, min } => {
                write!(f, "'{}' = {} is below the minimum {}", key, value, min)
            }
        }
    }
}

impl Display for InfrastructureError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            InfrastructureError::Network(e) => write!(f, "Network: {}", e),
        }
    }
}

impl Display for NetworkError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            NetworkError::HttpRequestFailed(msg) => write!(f, "request failed: {}", msg),
            NetworkError::HttpStatus { status, status_text } => {
                write!(f, "HTTP error: {} - {}", status, status_text)
            }
            NetworkError::Serialization(msg) => write!(f, "failed to serialize body: {}", msg),
            NetworkError::Deserialization(msg) => write!(f, "failed to parse JSON: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}
impl std::error::Error for ApplicationError {}
impl std::error::Error for ConfigurationError {}
impl std::error::Error for InfrastructureError {}
impl std::error::Error for NetworkError {}

impl From<ApplicationError> for AppError {
    fn from(error: ApplicationError) -> Self {
        AppError::Application(error)
    }
}

impl From<InfrastructureError> for AppError {
    fn from(error: InfrastructureError) -> Self {
        AppError::Infrastructure(error)
    }
}

impl From<NetworkError> for InfrastructureError {
    fn from(error: NetworkError) -> Self {
        InfrastructureError::Network(error)
    }
}

impl From<ConfigurationError> for ApplicationError {
    fn from(error: ConfigurationError) -> Self {
        ApplicationError::Configuration(error)
    }
}

pub type NetworkResult<T> = Result<T, InfrastructureError>;
