//! Scan snapshots: the backend's per-symbol strategy evaluation as last reported.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString, IntoEnumIterator};

use crate::domain::market_data::Symbol;

/// Number of strategy conditions the backend evaluates per symbol.
pub const CONDITION_COUNT: u8 = 8;

/// The eight named strategy conditions. The wire names are shared with the backend
/// and must not change.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter, EnumString, AsRefStr,
    Serialize, Deserialize,
)]
pub enum ConditionKey {
    #[strum(serialize = "bb_touch")]
    #[serde(rename = "bb_touch")]
    BbTouch,

    #[strum(serialize = "rsi_5m")]
    #[serde(rename = "rsi_5m")]
    Rsi5m,

    #[strum(serialize = "rsi_15m")]
    #[serde(rename = "rsi_15m")]
    Rsi15m,

    #[strum(serialize = "rsi_1h")]
    #[serde(rename = "rsi_1h")]
    Rsi1h,

    #[strum(serialize = "volume_decline")]
    #[serde(rename = "volume_decline")]
    VolumeDecline,

    #[strum(serialize = "weekly_support")]
    #[serde(rename = "weekly_support")]
    WeeklySupport,

    #[strum(serialize = "ema_stack")]
    #[serde(rename = "ema_stack")]
    EmaStack,

    #[strum(serialize = "daily_trend")]
    #[serde(rename = "daily_trend")]
    DailyTrend,
}

impl ConditionKey {
    /// Short label printed on the card indicator
    pub fn label(&self) -> &'static str {
        match self {
            Self::BbTouch => "BB",
            Self::Rsi5m => "RSI5",
            Self::Rsi15m => "RSI15",
            Self::Rsi1h => "RSI1H",
            Self::VolumeDecline => "VOL",
            Self::WeeklySupport => "WSUP",
            Self::EmaStack => "EMA",
            Self::DailyTrend => "TREND",
        }
    }

    /// Tooltip describing what the backend checks
    pub fn hint(&self) -> &'static str {
        match self {
            Self::BbTouch => "Price touching lower Bollinger Band",
            Self::Rsi5m => "RSI 5m < 50",
            Self::Rsi15m => "RSI 15m oversold",
            Self::Rsi1h => "RSI 1h oversold",
            Self::VolumeDecline => "Volume declining into support",
            Self::WeeklySupport => "Near weekly support",
            Self::EmaStack => "EMA 9 > EMA 21 on 15m",
            Self::DailyTrend => "Daily trend above EMA 50",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

/// Met / not-met flags for the eight conditions, indexed by `ConditionKey`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConditionSet([bool; CONDITION_COUNT as usize]);

impl ConditionSet {
    pub fn all_met() -> Self {
        Self([true; CONDITION_COUNT as usize])
    }

    /// Build from `(wire name, flag)` pairs; unknown names are ignored and missing ones stay unmet.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, bool)>,
    {
        let mut set = Self::default();
        for (name, met) in pairs {
            if let Ok(key) = name.parse::<ConditionKey>() {
                set.set(key, met);
            }
        }
        set
    }

    pub fn get(&self, key: ConditionKey) -> bool {
        self.0[key.index()]
    }

    pub fn set(&mut self, key: ConditionKey, met: bool) {
        self.0[key.index()] = met;
    }

    /// Flags in display order
    pub fn iter(&self) -> impl Iterator<Item = (ConditionKey, bool)> + '_ {
        ConditionKey::iter().map(move |key| (key, self.get(key)))
    }

    pub fn met_count(&self) -> u8 {
        self.0.iter().filter(|met| **met).count() as u8
    }
}

/// Optional indicator readings attached to a scan entry
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct IndicatorReadings {
    pub rsi_5m: Option<f64>,
    pub rsi_15m: Option<f64>,
    pub rsi_1h: Option<f64>,
    pub atr: Option<f64>,
    pub order_book_imbalance: Option<f64>,
}

impl IndicatorReadings {
    pub fn is_empty(&self) -> bool {
        self.rsi_5m.is_none()
            && self.rsi_15m.is_none()
            && self.rsi_1h.is_none()
            && self.atr.is_none()
            && self.order_book_imbalance.is_none()
    }
}

/// Domain entity - last reported scan result for one symbol.
///
/// `conditions_met` is the backend's count and is kept as reported (clamped to 0..=8);
/// the client never recounts it from the flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanSnapshot {
    pub symbol: Symbol,
    pub scanning: bool,
    pub conditions_met: u8,
    pub conditions: ConditionSet,
    pub indicators: IndicatorReadings,
}

impl ScanSnapshot {
    pub fn new(symbol: Symbol, conditions_met: u32, conditions: ConditionSet, indicators: IndicatorReadings) -> Self {
        Self {
            symbol,
            scanning: false,
            conditions_met: conditions_met.min(CONDITION_COUNT as u32) as u8,
            conditions,
            indicators,
        }
    }

    /// Placeholder for a symbol the backend is scanning but has not scored yet
    pub fn pending(symbol: Symbol) -> Self {
        Self {
            symbol,
            scanning: true,
            conditions_met: 0,
            conditions: ConditionSet::default(),
            indicators: IndicatorReadings::default(),
        }
    }

    pub fn is_signal(&self) -> bool {
        self.conditions_met >= CONDITION_COUNT
    }
}

/// Read-only view of the scan cache entry for a gainer; absent entries read as
/// "0 conditions, not scanning".
#[derive(Debug, Clone, Copy)]
pub struct ScanLookup<'a>(pub Option<&'a ScanSnapshot>);

impl ScanLookup<'_> {
    pub fn conditions_met(&self) -> u8 {
        self.0.map_or(0, |scan| scan.conditions_met)
    }

    pub fn scanning(&self) -> bool {
        self.0.is_some_and(|scan| scan.scanning)
    }

    pub fn is_signal(&self) -> bool {
        self.0.is_some_and(ScanSnapshot::is_signal)
    }

    pub fn conditions(&self) -> ConditionSet {
        self.0.map(|scan| scan.conditions).unwrap_or_default()
    }

    pub fn indicators(&self) -> IndicatorReadings {
        self.0.map(|scan| scan.indicators).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn condition_keys_keep_wire_names_in_order() {
        let names: Vec<String> = ConditionKey::iter().map(|key| key.as_ref().to_string()).collect();
        assert_eq!(
            names,
            [
                "bb_touch",
                "rsi_5m",
                "rsi_15m",
                "rsi_1h",
                "volume_decline",
                "weekly_support",
                "ema_stack",
                "daily_trend"
            ]
        );
    }

    #[test]
    fn condition_set_ignores_unknown_names() {
        let set = ConditionSet::from_pairs([("bb_touch", true), ("macd_momentum", true), ("daily_trend", true)]);
        assert!(set.get(ConditionKey::BbTouch));
        assert!(set.get(ConditionKey::DailyTrend));
        assert!(!set.get(ConditionKey::Rsi5m));
        assert_eq!(set.met_count(), 2);
    }

    #[test]
    fn reported_count_is_clamped() {
        let scan = ScanSnapshot::new(Symbol::from("ETHUSDT"), 11, ConditionSet::default(), IndicatorReadings::default());
        assert_eq!(scan.conditions_met, CONDITION_COUNT);
        assert!(scan.is_signal());
    }

    #[test]
    fn missing_entry_reads_as_idle() {
        let lookup = ScanLookup(None);
        assert_eq!(lookup.conditions_met(), 0);
        assert!(!lookup.scanning());
        assert!(!lookup.is_signal());
    }
}
