//! Wire shapes of the backend JSON. Every field is defaulted so a partial payload
//! still parses; conversion into domain types happens here and nowhere else.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::gateway::ActionReply;
use crate::domain::{
    dashboard::StatusUpdate,
    market_data::{GainerSnapshot, Price, Symbol, Volume},
    scanning::{ConditionSet, IndicatorReadings, ScanSnapshot},
    trading::{Alert, AlertKind, HeaderStats, Position, PositionStatus, TradingStats},
};

/// `GET /api/status`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StatusDto {
    pub total_symbols: u64,
    pub signals_count: u64,
    pub alert_count: u64,
    pub running: bool,
    pub current_scanning: Option<String>,
    pub top_opportunities: Vec<OpportunityDto>,
    pub positions: Option<PositionsDto>,
    pub alerts: Vec<AlertDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OpportunityDto {
    pub symbol: String,
    pub conditions_met: u32,
    pub rsi_5m: Option<f64>,
    pub rsi_15m: Option<f64>,
    pub rsi_1h: Option<f64>,
    pub atr: Option<f64>,
    pub order_book_imbalance: Option<f64>,
    pub conditions: HashMap<String, bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PositionsDto {
    pub active_positions: Vec<PositionDto>,
    pub statistics: Option<StatisticsDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PositionDto {
    pub symbol: String,
    pub coin: Option<String>,
    pub entry_price: f64,
    pub current_price: f64,
    pub status: String,
    pub remaining_size: Option<f64>,
    pub realized_pnl: Option<f64>,
    pub unrealized_pnl: Option<f64>,
    pub pnl_percent: Option<f64>,
    pub tp1: Option<f64>,
    pub tp2: Option<f64>,
    pub stop_loss: Option<f64>,
    pub entry_time: Option<String>,
    pub last_update: Option<String>,
    pub tp1_hit: bool,
    pub entry_level: Option<u8>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StatisticsDto {
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

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AlertDto {
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
    pub time: String,
    /// Free-form; objects are shown as compact JSON
    pub details: Option<Value>,
}

/// `GET /api/gainers`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GainersDto {
    pub gainers: Vec<GainerDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GainerDto {
    pub symbol: String,
    pub coin: Option<String>,
    pub price: f64,
    pub change_24h: f64,
    pub volume_usdt: f64,
    pub high_24h: Option<f64>,
    pub low_24h: Option<f64>,
    pub trades: Option<u64>,
}

/// Reply of the command endpoints
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ActionDto {
    pub status: Option<String>,
    pub message: Option<String>,
    pub test_signal: Option<Value>,
}

/// `POST /api/close-position` body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClosePositionRequest {
    pub symbol: String,
}

fn value_to_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}

impl From<OpportunityDto> for ScanSnapshot {
    fn from(dto: OpportunityDto) -> Self {
        let conditions = ConditionSet::from_pairs(dto.conditions.iter().map(|(name, met)| (name.as_str(), *met)));
        let indicators = IndicatorReadings {
            rsi_5m: dto.rsi_5m,
            rsi_15m: dto.rsi_15m,
            rsi_1h: dto.rsi_1h,
            atr: dto.atr,
            order_book_imbalance: dto.order_book_imbalance,
        };
        ScanSnapshot::new(Symbol::from(dto.symbol.as_str()), dto.conditions_met, conditions, indicators)
    }
}

impl From<PositionDto> for Position {
    fn from(dto: PositionDto) -> Self {
        let symbol = Symbol::from(dto.symbol.as_str());
        let coin = dto.coin.unwrap_or_else(|| symbol.base_asset().to_string());
        Self {
            coin,
            symbol,
            entry_price: Price::from(dto.entry_price),
            current_price: Price::from(dto.current_price),
            status: PositionStatus::from_wire(&dto.status),
            remaining_size: dto.remaining_size,
            realized_pnl: dto.realized_pnl,
            unrealized_pnl: dto.unrealized_pnl,
            pnl_percent: dto.pnl_percent,
            tp1: dto.tp1.map(Price::from),
            tp2: dto.tp2.map(Price::from),
            stop_loss: dto.stop_loss.map(Price::from),
            entry_time: dto.entry_time,
            last_update: dto.last_update,
            tp1_hit: dto.tp1_hit,
            entry_level: dto.entry_level.filter(|level| (1..=3).contains(level)),
        }
    }
}

impl From<StatisticsDto> for TradingStats {
    fn from(dto: StatisticsDto) -> Self {
        Self {
            total_trades: dto.total_trades,
            win_rate: dto.win_rate,
            total_pnl: dto.total_pnl,
            tp1_hits: dto.tp1_hits,
            tp2_hits: dto.tp2_hits,
            sl_hits: dto.sl_hits,
            best_trade: dto.best_trade,
            worst_trade: dto.worst_trade,
            profit_factor: dto.profit_factor,
        }
    }
}

impl From<AlertDto> for Alert {
    fn from(dto: AlertDto) -> Self {
        Self {
            kind: AlertKind::from_wire(&dto.kind),
            message: dto.message,
            time: dto.time,
            details: dto.details.and_then(value_to_text),
        }
    }
}

impl From<StatusDto> for StatusUpdate {
    fn from(dto: StatusDto) -> Self {
        let header = HeaderStats {
            total_symbols: dto.total_symbols,
            signals_count: dto.signals_count,
            alert_count: dto.alert_count,
            running: dto.running,
        };
        let (positions, stats) = match dto.positions {
            Some(block) => (
                Some(block.active_positions.into_iter().map(Position::from).collect()),
                block.statistics.map(TradingStats::from),
            ),
            None => (None, None),
        };

        Self {
            header,
            current_scanning: dto.current_scanning.filter(|marker| !marker.trim().is_empty()),
            opportunities: dto
                .top_opportunities
                .into_iter()
                .filter(|opportunity| !opportunity.symbol.trim().is_empty())
                .map(ScanSnapshot::from)
                .collect(),
            positions,
            stats,
            alerts: dto.alerts.into_iter().map(Alert::from).collect(),
        }
    }
}

impl From<GainerDto> for GainerSnapshot {
    fn from(dto: GainerDto) -> Self {
        let symbol = Symbol::from(dto.symbol.as_str());
        let coin = dto
            .coin
            .filter(|coin| !coin.is_empty())
            .unwrap_or_else(|| symbol.base_asset().to_string());
        Self {
            symbol,
            coin,
            price: Price::from(dto.price),
            change_24h: dto.change_24h,
            volume_usdt: Volume::from(dto.volume_usdt),
            high_24h: dto.high_24h.map(Price::from),
            low_24h: dto.low_24h.map(Price::from),
            trades: dto.trades,
        }
    }
}

impl GainersDto {
    /// Rows without a symbol cannot be keyed and are dropped.
    pub fn into_domain(self) -> Vec<GainerSnapshot> {
        self.gainers
            .into_iter()
            .filter(|gainer| !gainer.symbol.trim().is_empty())
            .map(GainerSnapshot::from)
            .collect()
    }
}

impl From<ActionDto> for ActionReply {
    fn from(dto: ActionDto) -> Self {
        Self {
            status: dto.status,
            message: dto.message,
            test_signal: dto.test_signal.and_then(value_to_text),
        }
    }
}
