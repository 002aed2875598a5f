//! Display structures built from the state cache.
//!
//! Components only bind these to markup, so every text the page shows can be
//! checked without a DOM.

use crate::domain::{
    dashboard::{
        CoinRow, DashboardState, FilterCriteria, LoadPhase, filtered_view,
        format::{
            change_class, format_change, format_pnl, format_price, format_reading, format_volume,
            progress_percent, scan_status_text,
        },
    },
    market_data::Symbol,
    scanning::{CONDITION_COUNT, ConditionKey},
    trading::{Alert, Position, TradingStats},
};

pub const LOADING_GAINERS: &str = "Loading top gainers...";
pub const NO_MATCHING_COINS: &str = "No coins match the current filters";
pub const NO_POSITIONS: &str = "No active positions";
pub const NO_SIGNALS: &str = "No signals yet";
pub const NO_STATS: &str = "No trading statistics yet";
pub const NO_CURRENT_SCAN: &str = "No coin being scanned";

#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorView {
    pub label: &'static str,
    pub hint: &'static str,
    pub met: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CardFooter {
    Volume(String),
    /// All eight conditions met
    Signal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CoinCardView {
    pub symbol: Symbol,
    pub coin: String,
    pub card_class: String,
    pub price: String,
    pub change: String,
    pub change_class: &'static str,
    pub status_text: String,
    pub scanning: bool,
    pub is_signal: bool,
    pub indicators: Vec<IndicatorView>,
    /// CSS width of the progress fill, e.g. `"62.5%"`
    pub progress_width: String,
    pub readings: Option<String>,
    pub footer: CardFooter,
    pub tooltip: String,
}

impl CoinCardView {
    pub fn build(row: &CoinRow) -> Self {
        let gainer = &row.gainer;
        let scan = row.lookup();
        let conditions = scan.conditions();
        let is_signal = scan.is_signal();

        let card_class = if is_signal {
            "coin-card signal".to_string()
        } else if scan.scanning() {
            "coin-card scanning".to_string()
        } else {
            "coin-card".to_string()
        };

        Self {
            symbol: gainer.symbol.clone(),
            coin: gainer.coin.clone(),
            card_class,
            price: format_price(gainer.price.value()),
            change: format_change(gainer.change_24h),
            change_class: change_class(gainer.change_24h),
            status_text: scan_status_text(scan),
            scanning: scan.scanning(),
            is_signal,
            indicators: conditions
                .iter()
                .map(|(key, met)| IndicatorView { label: key.label(), hint: key.hint(), met })
                .collect(),
            progress_width: format!("{}%", progress_percent(scan.conditions_met())),
            readings: readings_line(row),
            footer: if is_signal {
                CardFooter::Signal
            } else {
                CardFooter::Volume(format_volume(gainer.volume_usdt.value()))
            },
            tooltip: tooltip_line(row),
        }
    }
}

fn readings_line(row: &CoinRow) -> Option<String> {
    let readings = row.lookup().indicators();
    if readings.is_empty() {
        return None;
    }

    let mut parts = Vec::new();
    if readings.rsi_5m.is_some() || readings.rsi_15m.is_some() || readings.rsi_1h.is_some() {
        parts.push(format!(
            "RSI {}/{}/{}",
            format_reading(readings.rsi_5m, 1),
            format_reading(readings.rsi_15m, 1),
            format_reading(readings.rsi_1h, 1)
        ));
    }
    if let Some(atr) = readings.atr {
        parts.push(format!("ATR {}", format_price(atr)));
    }
    if let Some(imbalance) = readings.order_book_imbalance {
        parts.push(format!("OB {:.2}", imbalance));
    }
    Some(parts.join(" | "))
}

fn tooltip_line(row: &CoinRow) -> String {
    let gainer = &row.gainer;
    let mut parts = vec![gainer.symbol.to_string()];
    if let Some(high) = gainer.high_24h {
        parts.push(format!("24h High ${}", format_price(high.value())));
    }
    if let Some(low) = gainer.low_24h {
        parts.push(format!("24h Low ${}", format_price(low.value())));
    }
    if let Some(trades) = gainer.trades {
        parts.push(format!("{} trades", trades));
    }
    parts.join(" | ")
}

#[derive(Debug, Clone, PartialEq)]
pub enum GridView {
    Placeholder { text: String, is_error: bool },
    Cards(Vec<CoinCardView>),
}

/// The coins grid for the current filters, or the placeholder standing in for it
pub fn coin_grid(state: &DashboardState, criteria: &FilterCriteria) -> GridView {
    match &state.gainers_phase {
        LoadPhase::Loading => GridView::Placeholder { text: LOADING_GAINERS.to_string(), is_error: false },
        LoadPhase::Failed(reason) => GridView::Placeholder {
            text: format!("Error loading gainers: {}", reason),
            is_error: true,
        },
        LoadPhase::Ready => {
            let rows = filtered_view(&state.coin_rows(), criteria);
            if rows.is_empty() {
                GridView::Placeholder { text: NO_MATCHING_COINS.to_string(), is_error: false }
            } else {
                GridView::Cards(rows.iter().map(CoinCardView::build).collect())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PositionCardView {
    pub symbol: Symbol,
    pub coin: String,
    pub status_label: String,
    pub status_class: &'static str,
    pub entry: String,
    pub current: String,
    pub pnl: String,
    pub pnl_class: &'static str,
    pub remaining: Option<String>,
    pub targets: Option<String>,
    pub realized: Option<String>,
    pub opened: Option<String>,
    pub entry_level: Option<String>,
}

impl PositionCardView {
    pub fn build(position: &Position) -> Self {
        let pnl = position.display_pnl();

        let mut targets = Vec::new();
        if let Some(tp1) = position.tp1 {
            let mark = if position.tp1_hit { " ✓" } else { "" };
            targets.push(format!("TP1 ${}{}", format_price(tp1.value()), mark));
        }
        if let Some(tp2) = position.tp2 {
            targets.push(format!("TP2 ${}", format_price(tp2.value())));
        }
        if let Some(stop) = position.stop_loss {
            targets.push(format!("SL ${}", format_price(stop.value())));
        }

        Self {
            symbol: position.symbol.clone(),
            coin: position.coin.clone(),
            status_label: position.status.label().to_string(),
            status_class: position.status.css_class(),
            entry: format_price(position.entry_price.value()),
            current: format_price(position.current_price.value()),
            pnl: format_pnl(pnl),
            pnl_class: change_class(pnl),
            remaining: position.remaining_size.map(|size| format!("{:.0}% remaining", size)),
            targets: (!targets.is_empty()).then(|| targets.join(" | ")),
            realized: position.realized_pnl.map(|realized| format!("Realized {}", format_pnl(realized))),
            opened: position.entry_time.clone(),
            entry_level: position.entry_level.map(|level| format!("Level {}", level)),
        }
    }
}

pub fn position_cards(positions: &[Position]) -> Vec<PositionCardView> {
    positions.iter().map(PositionCardView::build).collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlertView {
    pub class: String,
    pub label: String,
    pub message: String,
    pub time: String,
    pub details: Option<String>,
}

/// Alerts in backend order (newest first)
pub fn alert_views(alerts: &[Alert]) -> Vec<AlertView> {
    alerts
        .iter()
        .map(|alert| AlertView {
            class: format!("signal-item {}", alert.kind.css_class()),
            label: alert.kind.label().to_string(),
            message: alert.message.clone(),
            time: alert.time.clone(),
            details: alert.details.clone().filter(|details| !details.is_empty()),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatRow {
    pub label: &'static str,
    pub value: String,
    pub class: &'static str,
}

pub fn stats_rows(stats: &TradingStats) -> Vec<StatRow> {
    let plain = |label, value: String| StatRow { label, value, class: "" };
    let signed = |label, value: f64| StatRow { label, value: format_pnl(value), class: change_class(value) };

    vec![
        plain("Total Trades", stats.total_trades.to_string()),
        plain("Win Rate", format!("{:.1}%", stats.win_rate)),
        signed("Total P&L", stats.total_pnl),
        plain("TP1 Hits", stats.tp1_hits.to_string()),
        plain("TP2 Hits", stats.tp2_hits.to_string()),
        plain("SL Hits", stats.sl_hits.to_string()),
        signed("Best Trade", stats.best_trade),
        signed("Worst Trade", stats.worst_trade),
        plain("Profit Factor", format!("{:.2}", stats.profit_factor)),
    ]
}

/// The coin the backend is working on right now
#[derive(Debug, Clone, PartialEq)]
pub enum CurrentScanView {
    Idle,
    /// Scan started but nothing scored yet
    Waiting { coin: String },
    Details { coin: String, rows: Vec<StatRow> },
}

impl CurrentScanView {
    pub fn from_state(state: &DashboardState) -> Self {
        let Some(symbol) = &state.current_scanning else {
            return Self::Idle;
        };
        let coin = symbol.base_asset().to_string();
        let scan = state.scan_for(symbol);
        let readings = scan.indicators();
        if readings.is_empty() && scan.conditions_met() == 0 {
            return Self::Waiting { coin };
        }

        let row = |label, value: String| StatRow { label, value, class: "" };
        let mut rows = vec![row("Coin", coin.clone())];
        if let Some(gainer) = state.gainers.iter().find(|gainer| &gainer.symbol == symbol) {
            rows.push(row("Price", format!("${}", format_price(gainer.price.value()))));
            rows.push(StatRow {
                label: "24h",
                value: format_change(gainer.change_24h),
                class: change_class(gainer.change_24h),
            });
        }
        rows.push(row("RSI 5m", format_reading(readings.rsi_5m, 1)));
        rows.push(row("RSI 15m", format_reading(readings.rsi_15m, 1)));
        rows.push(row("RSI 1h", format_reading(readings.rsi_1h, 1)));
        if let Some(atr) = readings.atr {
            rows.push(row("ATR", format_price(atr)));
        }
        if let Some(imbalance) = readings.order_book_imbalance {
            rows.push(row("OB Imbalance", format!("{:.2}", imbalance)));
        }
        rows.push(row("Conditions", format!("{}/{}", scan.conditions_met(), CONDITION_COUNT)));

        Self::Details { coin, rows }
    }

    pub fn title(&self) -> String {
        match self {
            Self::Idle => NO_CURRENT_SCAN.to_string(),
            Self::Waiting { coin } => format!("Scanning {}...", coin),
            Self::Details { coin, .. } => format!("Scanning {}", coin),
        }
    }
}

/// Scanner progress rows; offline bots show a fixed "0/0".
pub fn system_status_rows(state: &DashboardState) -> Vec<StatRow> {
    let row = |label, value: String, class| StatRow { label, value, class };
    if !state.bot_status.is_online() {
        return vec![
            row("Status", "OFFLINE".to_string(), "negative"),
            row("Scanned", "0/0".to_string(), ""),
        ];
    }

    let scanned = state
        .gainers
        .iter()
        .filter(|gainer| {
            let scan = state.scan_for(&gainer.symbol);
            scan.0.is_some() && !scan.scanning()
        })
        .count();
    let activity = match &state.current_scanning {
        Some(symbol) => format!("Scanning {}", symbol.base_asset()),
        None => "Between scans".to_string(),
    };

    vec![
        row("Status", activity, "positive"),
        row("Progress", format!("{}/{}", scanned, state.gainers.len()), ""),
        row("Signals", state.header.signals_count.to_string(), ""),
        row("Alerts", state.header.alert_count.to_string(), ""),
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderView {
    pub online: bool,
    pub status_text: &'static str,
    pub status_class: String,
    pub total_symbols: String,
    pub signals_count: String,
    pub alert_count: String,
    pub active_positions: String,
}

impl HeaderView {
    pub fn from_state(state: &DashboardState) -> Self {
        let status = state.bot_status;
        Self {
            online: status.is_online(),
            status_text: status.label(),
            status_class: format!("bot-status {}", status.css_class()),
            total_symbols: state.header.total_symbols.to_string(),
            signals_count: state.header.signals_count.to_string(),
            alert_count: state.header.alert_count.to_string(),
            active_positions: state.positions.len().to_string(),
        }
    }
}

/// Condition legend shown under the filter bar
pub fn legend() -> Vec<IndicatorView> {
    use strum::IntoEnumIterator;
    ConditionKey::iter()
        .map(|key| IndicatorView { label: key.label(), hint: key.hint(), met: false })
        .collect()
}
