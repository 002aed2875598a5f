use quickcheck_macros::quickcheck;
use signal_dashboard_wasm::domain::dashboard::format::{
    change_class, format_change, format_price, format_reading, format_volume, scan_status_text,
};
use signal_dashboard_wasm::domain::scanning::{ConditionSet, IndicatorReadings, ScanLookup, ScanSnapshot};

#[test]
fn price_precision_depends_on_magnitude() {
    assert_eq!(format_price(0.00012345), "0.000123");
    assert_eq!(format_price(0.5), "0.5000");
    assert_eq!(format_price(50.0), "50.00");
    assert_eq!(format_price(500.0), "500");
    assert_eq!(format_price(64_231.4), "64231");
    let tiny = format_price(0.0000005);
    assert_eq!(tiny.split('.').nth(1).map(str::len), Some(6));
}

#[test]
fn price_tier_boundaries() {
    assert_eq!(format_price(0.001), "0.0010");
    assert_eq!(format_price(1.0), "1.00");
    assert_eq!(format_price(100.0), "100");
}

#[test]
fn volume_uses_suffixes() {
    assert_eq!(format_volume(2_500_000_000.0), "2.5B");
    assert_eq!(format_volume(2_500_000.0), "2.5M");
    assert_eq!(format_volume(2_500.0), "2.5K");
    assert_eq!(format_volume(250.0), "250");
}

#[test]
fn volume_suffix_follows_rounded_value() {
    assert_eq!(format_volume(999_999.0), "1.0M");
    assert_eq!(format_volume(999_999_999.0), "1.0B");
    assert_eq!(format_volume(999.6), "1.0K");
    assert_eq!(format_volume(999.4), "999");
    assert_eq!(format_volume(999_940.0), "999.9K");
}

#[test]
fn change_sign_and_class() {
    assert_eq!(format_change(7.5), "+7.50%");
    assert_eq!(change_class(7.5), "positive");
    assert_eq!(change_class(0.0), "positive");
    assert_eq!(change_class(-0.01), "negative");
}

#[test]
fn missing_readings_show_a_dash() {
    assert_eq!(format_reading(None, 1), "-");
    assert_eq!(format_reading(Some(42.26), 1), "42.3");
}

#[test]
fn scan_status_prefers_signal_over_scanning() {
    let mut full = ScanSnapshot::new("BTCUSDT".into(), 8, ConditionSet::all_met(), IndicatorReadings::default());
    full.scanning = true;
    assert_eq!(scan_status_text(ScanLookup(Some(&full))), "Signal Generated!");

    let pending = ScanSnapshot::pending("ETHUSDT".into());
    assert_eq!(scan_status_text(ScanLookup(Some(&pending))), "Scanning...");

    let partial = ScanSnapshot::new("SOLUSDT".into(), 5, ConditionSet::default(), IndicatorReadings::default());
    assert_eq!(scan_status_text(ScanLookup(Some(&partial))), "5/8 conditions");
    assert_eq!(scan_status_text(ScanLookup(None)), "0/8 conditions");
}

#[test]
fn reported_count_is_clamped() {
    let over = ScanSnapshot::new("XRPUSDT".into(), 12, ConditionSet::default(), IndicatorReadings::default());
    assert_eq!(over.conditions_met, 8);
    assert!(over.is_signal());
}

#[quickcheck]
fn small_volumes_print_as_integers(volume: u16) -> bool {
    let volume = volume % 1000;
    format_volume(f64::from(volume)) == volume.to_string()
}

#[quickcheck]
fn change_always_carries_a_sign(hundredths: i32) -> bool {
    let text = format_change(f64::from(hundredths) / 100.0);
    (text.starts_with('+') || text.starts_with('-')) && text.ends_with('%')
}
