use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::filter::CoinRow;
use crate::domain::market_data::{GainerSnapshot, Symbol};
use crate::domain::scanning::{ScanLookup, ScanSnapshot};
use crate::domain::trading::{Alert, BotStatus, HeaderStats, Position, TradingStats};

/// Lifecycle of the gainers list. Only the first load can end in `Failed`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum LoadPhase {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

/// Independently re-rendered areas of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    Header,
    Coins,
    Positions,
    Signals,
    Stats,
}

/// Parsed `/api/status` payload.
///
/// `positions` and `stats` are `None` when the response carried no positions block;
/// the cached values are kept in that case.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StatusUpdate {
    pub header: HeaderStats,
    pub current_scanning: Option<String>,
    pub opportunities: Vec<ScanSnapshot>,
    pub positions: Option<Vec<Position>>,
    pub stats: Option<TradingStats>,
    pub alerts: Vec<Alert>,
}

/// In-memory cache of everything the backend last reported
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardState {
    pub gainers: Vec<GainerSnapshot>,
    pub gainers_phase: LoadPhase,
    pub scans: HashMap<Symbol, ScanSnapshot>,
    pub positions: Vec<Position>,
    pub alerts: Vec<Alert>,
    pub stats: Option<TradingStats>,
    pub header: HeaderStats,
    pub bot_status: BotStatus,
    pub current_scanning: Option<Symbol>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the gainers list wholesale; returns whether anything visible changed.
    pub fn replace_gainers(&mut self, gainers: Vec<GainerSnapshot>) -> bool {
        let changed = self.gainers != gainers || self.gainers_phase != LoadPhase::Ready;
        self.gainers = gainers;
        self.gainers_phase = LoadPhase::Ready;
        changed
    }

    /// Record a failed gainers load. Once a list has been shown, it is kept.
    pub fn mark_gainers_failed(&mut self, reason: impl Into<String>) -> bool {
        match self.gainers_phase {
            LoadPhase::Ready => false,
            LoadPhase::Loading | LoadPhase::Failed(_) => {
                let next = LoadPhase::Failed(reason.into());
                let changed = self.gainers_phase != next;
                self.gainers_phase = next;
                changed
            }
        }
    }

    /// Merge a status payload into the cache and report which regions changed.
    ///
    /// Scan entries are upserted and never removed. The scanning flag is
    /// re-derived on every call: it is set only for the backend's
    /// `current_scanning` symbol.
    pub fn apply_status(&mut self, update: StatusUpdate) -> Vec<Region> {
        let mut regions = Vec::new();

        let bot_changed = self.bot_status.transition(BotStatus::from_running(update.header.running));
        if self.header != update.header || bot_changed {
            self.header = update.header;
            regions.push(Region::Header);
        }

        let previous_scans = self.scans.clone();
        for scan in self.scans.values_mut() {
            scan.scanning = false;
        }
        for scan in update.opportunities {
            self.scans.insert(scan.symbol.clone(), scan);
        }
        self.current_scanning = update.current_scanning.as_deref().and_then(Symbol::from_scan_marker);
        if let Some(symbol) = &self.current_scanning {
            self.scans
                .entry(symbol.clone())
                .or_insert_with(|| ScanSnapshot::pending(symbol.clone()))
                .scanning = true;
        }
        if self.scans != previous_scans {
            regions.push(Region::Coins);
        }

        if let Some(positions) = update.positions {
            if self.positions != positions {
                self.positions = positions;
                regions.push(Region::Positions);
            }
        }

        if self.alerts != update.alerts {
            self.alerts = update.alerts;
            regions.push(Region::Signals);
        }

        if update.stats.is_some() && self.stats != update.stats {
            self.stats = update.stats;
            regions.push(Region::Stats);
        }

        regions
    }

    pub fn scan_for(&self, symbol: &Symbol) -> ScanLookup<'_> {
        ScanLookup(self.scans.get(symbol))
    }

    /// Gainers joined with their scan entries, in backend order
    pub fn coin_rows(&self) -> Vec<CoinRow> {
        self.gainers
            .iter()
            .map(|gainer| CoinRow::new(gainer.clone(), self.scans.get(&gainer.symbol).cloned()))
            .collect()
    }
}
