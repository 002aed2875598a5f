pub use super::value_objects::{Price, Symbol, Volume};
use serde::{Deserialize, Serialize};

/// Domain entity - one row of the backend's top-gainers list.
///
/// Replaced wholesale on every `/api/gainers` response; the client never edits it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GainerSnapshot {
    pub symbol: Symbol,
    /// Display name (base asset)
    pub coin: String,
    pub price: Price,
    /// 24h change in percent
    pub change_24h: f64,
    /// 24h quote volume in USDT
    pub volume_usdt: Volume,
    pub high_24h: Option<Price>,
    pub low_24h: Option<Price>,
    pub trades: Option<u64>,
}

impl GainerSnapshot {
    pub fn new(symbol: Symbol, coin: impl Into<String>, price: f64, change_24h: f64, volume_usdt: f64) -> Self {
        Self {
            symbol,
            coin: coin.into(),
            price: Price::from(price),
            change_24h,
            volume_usdt: Volume::from(volume_usdt),
            high_24h: None,
            low_24h: None,
            trades: None,
        }
    }

    /// Case-insensitive substring match against the display name
    pub fn name_contains(&self, term: &str) -> bool {
        self.coin.to_lowercase().contains(&term.to_lowercase())
    }
}
