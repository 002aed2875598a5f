use derive_more::{Constructor, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Quote currency every gainer symbol is listed against
pub const QUOTE_ASSET: &str = "USDT";

/// Value Object - last traded price
#[derive(Debug, Clone, Copy, PartialEq, Default, From, Into, Deref, Constructor, Serialize, Deserialize)]
pub struct Price(f64);

impl Price {
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

/// Value Object - 24h quote volume (USDT)
#[derive(Debug, Clone, Copy, PartialEq, Default, From, Into, Deref, Constructor, Serialize, Deserialize)]
pub struct Volume(f64);

impl Volume {
    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Value Object - trading pair symbol, e.g. `BTCUSDT`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Deref, Display, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
pub struct Symbol(String);

impl Symbol {
    pub fn value(&self) -> &str {
        &self.0
    }

    /// Base asset with the quote suffix stripped (`BTCUSDT` -> `BTC`)
    pub fn base_asset(&self) -> &str {
        self.0.strip_suffix(QUOTE_ASSET).filter(|base| !base.is_empty()).unwrap_or(&self.0)
    }

    /// Resolve a backend "currently scanning" marker, which may be either a bare coin
    /// (`BTC`) or a full pair (`BTCUSDT`).
    pub fn from_scan_marker(marker: &str) -> Option<Self> {
        let marker = marker.trim().to_uppercase();
        if marker.is_empty() {
            return None;
        }
        if marker.ends_with(QUOTE_ASSET) && marker.len() > QUOTE_ASSET.len() {
            Some(Self(marker))
        } else {
            Some(Self(format!("{}{}", marker, QUOTE_ASSET)))
        }
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self(value.trim().to_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_normalizes_case_and_strips_quote() {
        let symbol = Symbol::from("pepeusdt");
        assert_eq!(symbol.value(), "PEPEUSDT");
        assert_eq!(symbol.base_asset(), "PEPE");
        assert_eq!(Symbol::from("USDT").base_asset(), "USDT");
    }

    #[test]
    fn scan_marker_accepts_coin_or_pair() {
        assert_eq!(Symbol::from_scan_marker("sol"), Some(Symbol::from("SOLUSDT")));
        assert_eq!(Symbol::from_scan_marker("SOLUSDT"), Some(Symbol::from("SOLUSDT")));
        assert_eq!(Symbol::from_scan_marker(""), None);
    }
}
