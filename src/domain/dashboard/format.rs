use crate::domain::scanning::{CONDITION_COUNT, ScanLookup};

/// Tiered precision: 6 decimals below 0.001, 4 below 1, 2 below 100, none above.
pub fn format_price(price: f64) -> String {
    if price < 0.001 {
        format!("{:.6}", price)
    } else if price < 1.0 {
        format!("{:.4}", price)
    } else if price < 100.0 {
        format!("{:.2}", price)
    } else {
        format!("{:.0}", price)
    }
}

/// Quote volume with a B/M/K suffix.
///
/// The suffix is picked on the rounded figure, so `999_999` reads `1.0M`, not `1000.0K`.
pub fn format_volume(volume: f64) -> String {
    let tenths = |value: f64| (value * 10.0).round() / 10.0;
    if tenths(volume / 1e6) >= 1000.0 {
        format!("{:.1}B", volume / 1e9)
    } else if tenths(volume / 1e3) >= 1000.0 {
        format!("{:.1}M", volume / 1e6)
    } else if volume.round() >= 1000.0 {
        format!("{:.1}K", volume / 1e3)
    } else {
        format!("{:.0}", volume)
    }
}

pub fn format_change(change: f64) -> String {
    format!("{:+.2}%", change)
}

pub fn format_pnl(pnl: f64) -> String {
    format!("{:+.2}%", pnl)
}

/// Indicator reading, or a dash when the backend did not send one
pub fn format_reading(value: Option<f64>, decimals: usize) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{:.*}", decimals, v))
}

pub fn change_class(change: f64) -> &'static str {
    if change >= 0.0 { "positive" } else { "negative" }
}

pub fn scan_status_text(scan: ScanLookup<'_>) -> String {
    if scan.is_signal() {
        "Signal Generated!".to_string()
    } else if scan.scanning() {
        "Scanning...".to_string()
    } else {
        format!("{}/{} conditions", scan.conditions_met(), CONDITION_COUNT)
    }
}

/// Progress bar width, 0..=100
pub fn progress_percent(conditions_met: u8) -> f64 {
    f64::from(conditions_met.min(CONDITION_COUNT)) / f64::from(CONDITION_COUNT) * 100.0
}
