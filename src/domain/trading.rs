//! Backend-authoritative trading records: positions, alerts, statistics and bot status.

use serde::{Deserialize, Serialize};
use strum::EnumString;

use crate::domain::market_data::{Price, Symbol};

/// Lifecycle status of a position as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumString, Serialize, Deserialize)]
pub enum PositionStatus {
    #[strum(serialize = "ACTIVE")]
    Active,
    #[strum(serialize = "TP1_HIT")]
    Tp1Hit,
    #[strum(serialize = "TP2_HIT")]
    Tp2Hit,
    #[strum(serialize = "STOP_LOSS")]
    StopLoss,
    #[strum(serialize = "CLOSED")]
    Closed,
    #[strum(default)]
    Other(String),
}

impl PositionStatus {
    /// Parse the wire value; unknown statuses are preserved verbatim.
    pub fn from_wire(value: &str) -> Self {
        // strum's default variant makes this infallible
        value.trim().to_uppercase().parse().unwrap_or_else(|_| Self::Other(value.to_string()))
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Active => "OPEN",
            Self::Tp1Hit => "TP1",
            Self::Tp2Hit => "TP2",
            Self::StopLoss => "SL",
            Self::Closed => "CLOSED",
            Self::Other(raw) => raw,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Active => "status-active",
            Self::Tp1Hit | Self::Tp2Hit => "status-profit",
            Self::StopLoss => "status-loss",
            Self::Closed | Self::Other(_) => "status-closed",
        }
    }
}

/// Domain entity - an open (or recently closed) position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub symbol: Symbol,
    pub coin: String,
    pub entry_price: Price,
    pub current_price: Price,
    pub status: PositionStatus,
    /// Share of the original size still open, in percent
    pub remaining_size: Option<f64>,
    pub realized_pnl: Option<f64>,
    pub unrealized_pnl: Option<f64>,
    pub pnl_percent: Option<f64>,
    pub tp1: Option<Price>,
    pub tp2: Option<Price>,
    pub stop_loss: Option<Price>,
    pub entry_time: Option<String>,
    pub last_update: Option<String>,
    pub tp1_hit: bool,
    /// Scaling tier the position was opened at (1..=3)
    pub entry_level: Option<u8>,
}

impl Position {
    /// Percent pnl as reported; falls back to the unrealized figure.
    pub fn display_pnl(&self) -> f64 {
        self.pnl_percent.or(self.unrealized_pnl).unwrap_or(0.0)
    }
}

/// Kind of an alert in the signals feed
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumString, Serialize, Deserialize)]
pub enum AlertKind {
    #[strum(serialize = "SIGNAL")]
    Signal,
    #[strum(serialize = "TEST")]
    Test,
    #[strum(serialize = "INFO")]
    Info,
    #[strum(default)]
    Other(String),
}

impl AlertKind {
    pub fn from_wire(value: &str) -> Self {
        value.trim().to_uppercase().parse().unwrap_or_else(|_| Self::Other(value.to_string()))
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Signal => "alert-signal",
            Self::Test => "alert-test",
            Self::Info => "alert-info",
            Self::Other(_) => "alert-other",
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Signal => "🚨 SIGNAL",
            Self::Test => "🧪 TEST",
            Self::Info => "ℹ️ INFO",
            Self::Other(raw) => raw,
        }
    }
}

/// Domain entity - one entry of the backend's alert feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
    pub time: String,
    pub details: Option<String>,
}

/// Aggregate trading counters, display only
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TradingStats {
    pub total_trades: u64,
    pub win_rate: f64,
    pub total_pnl: f64,
    pub tp1_hits: u64,
    pub tp2_hits: u64,
    pub sl_hits: u64,
    pub best_trade: f64,
    pub worst_trade: f64,
    pub profit_factor: f64,
}

/// Header counters from the status endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HeaderStats {
    pub total_symbols: u64,
    pub signals_count: u64,
    pub alert_count: u64,
    pub running: bool,
}

/// Remote bot status. Only server data moves it: start/stop acknowledgments and
/// the `running` flag of a status response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BotStatus {
    #[default]
    Offline,
    Online,
}

impl BotStatus {
    pub fn from_running(running: bool) -> Self {
        if running { Self::Online } else { Self::Offline }
    }

    /// Move to `next`; returns whether the status changed.
    pub fn transition(&mut self, next: BotStatus) -> bool {
        let changed = *self != next;
        *self = next;
        changed
    }

    pub fn is_online(&self) -> bool {
        matches!(self, Self::Online)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Online => "Online",
            Self::Offline => "Offline",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Online => "status-online",
            Self::Offline => "status-offline",
        }
    }
}

/// User-triggered command sent to the backend
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BotAction {
    Start,
    Stop,
    TestBot,
    TestTelegram,
    ClosePosition(Symbol),
}

impl BotAction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
            Self::TestBot => "test-bot",
            Self::TestTelegram => "test-telegram",
            Self::ClosePosition(_) => "close-position",
        }
    }
}
