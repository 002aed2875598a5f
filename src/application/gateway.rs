use crate::domain::dashboard::StatusUpdate;
use crate::domain::errors::NetworkResult;
use crate::domain::market_data::{GainerSnapshot, Symbol};

/// Backend reply to a command endpoint
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ActionReply {
    pub status: Option<String>,
    pub message: Option<String>,
    /// Rendered test signal, only sent by `/api/test-bot`
    pub test_signal: Option<String>,
}

impl ActionReply {
    pub fn success(message: impl Into<String>) -> Self {
        Self { status: Some("success".to_string()), message: Some(message.into()), test_signal: None }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { status: Some("error".to_string()), message: Some(message.into()), test_signal: None }
    }

    /// Strict check used by test and close actions
    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some("success")
    }

    /// Start/stop replies may omit `status`; only an explicit error refuses the command.
    pub fn is_acknowledged(&self) -> bool {
        self.status.as_deref() != Some("error")
    }

    pub fn message_or(&self, fallback: &str) -> String {
        self.message.clone().filter(|message| !message.is_empty()).unwrap_or_else(|| fallback.to_string())
    }
}

/// Port to the trading-bot backend. The HTTP adapter lives in infrastructure; tests
/// substitute an in-memory implementation.
#[allow(async_fn_in_trait)]
pub trait DashboardApi {
    async fn fetch_status(&self) -> NetworkResult<StatusUpdate>;
    async fn fetch_gainers(&self) -> NetworkResult<Vec<GainerSnapshot>>;
    async fn start_bot(&self) -> NetworkResult<ActionReply>;
    async fn stop_bot(&self) -> NetworkResult<ActionReply>;
    async fn test_bot(&self) -> NetworkResult<ActionReply>;
    async fn test_telegram(&self) -> NetworkResult<ActionReply>;
    async fn close_position(&self, symbol: &Symbol) -> NetworkResult<ActionReply>;
}
