mod common;

use common::{gainer, scan};
use quickcheck_macros::quickcheck;
use signal_dashboard_wasm::domain::dashboard::{
    CoinRow, FilterCriteria, QuickFilter, SortOrder, apply_filters, filtered_view, sort_gainers,
};
use signal_dashboard_wasm::domain::scanning::ScanSnapshot;

const COINS: [&str; 8] = ["BTC", "ETH", "SOL", "PEPE", "DOGE", "BONK", "WIF", "ARB"];

/// Deterministic rows from arbitrary seeds: (name index, conditions met, change)
fn rows_from(seeds: &[(u8, u8, i16)]) -> Vec<CoinRow> {
    seeds
        .iter()
        .enumerate()
        .map(|(i, &(name, met, change))| {
            let symbol = format!("{}{}USDT", COINS[name as usize % COINS.len()], i);
            let entry = (met % 10 != 9).then(|| scan(&symbol, u32::from(met % 9)));
            CoinRow::new(gainer(&symbol, f64::from(change) / 10.0, f64::from(i as u32) * 1e5), entry)
        })
        .collect()
}

fn symbols(rows: &[CoinRow]) -> Vec<&str> {
    rows.iter().map(|row| row.gainer.symbol.value()).collect()
}

#[quickcheck]
fn signals_filter_keeps_only_full_matches(seeds: Vec<(u8, u8, i16)>) -> bool {
    let rows = rows_from(&seeds);
    let criteria = FilterCriteria { quick: QuickFilter::Signals, ..FilterCriteria::default() };
    let visible = filtered_view(&rows, &criteria);
    let expected = rows.iter().filter(|row| row.lookup().conditions_met() == 8).count();
    visible.len() == expected && visible.iter().all(|row| row.lookup().is_signal())
}

#[quickcheck]
fn search_result_is_a_subset_of_all(seeds: Vec<(u8, u8, i16)>, term: u8) -> bool {
    let rows = rows_from(&seeds);
    let search = COINS[term as usize % COINS.len()].to_lowercase();
    let all = filtered_view(&rows, &FilterCriteria::default());
    let searched = filtered_view(&rows, &FilterCriteria { search: search.clone(), ..FilterCriteria::default() });
    searched.iter().all(|row| all.contains(row) && row.gainer.coin.to_lowercase().contains(&search))
}

#[quickcheck]
fn default_order_ranks_conditions_then_change(seeds: Vec<(u8, u8, i16)>) -> bool {
    let rows = rows_from(&seeds);
    let sorted = filtered_view(&rows, &FilterCriteria::default());
    sorted.windows(2).all(|pair| {
        let (a, b) = (&pair[0], &pair[1]);
        let (met_a, met_b) = (a.lookup().conditions_met(), b.lookup().conditions_met());
        met_a > met_b || (met_a == met_b && a.gainer.change_24h >= b.gainer.change_24h)
    })
}

#[quickcheck]
fn high_change_uses_strict_threshold(seeds: Vec<(u8, u8, i16)>) -> bool {
    let rows = rows_from(&seeds);
    let criteria = FilterCriteria { quick: QuickFilter::HighChange, ..FilterCriteria::with_threshold(5.0) };
    apply_filters(&rows, &criteria).iter().all(|row| row.gainer.change_24h > 5.0)
}

#[test]
fn missing_scan_entry_reads_as_zero_conditions() {
    let rows = vec![
        CoinRow::new(gainer("AAAUSDT", 50.0, 1.0), None),
        CoinRow::new(gainer("BBBUSDT", 1.0, 1.0), Some(scan("BBBUSDT", 1))),
    ];
    let sorted = filtered_view(&rows, &FilterCriteria { sort: SortOrder::Conditions, ..FilterCriteria::default() });
    assert_eq!(symbols(&sorted), vec!["BBBUSDT", "AAAUSDT"]);
    assert_eq!(rows[0].lookup().conditions_met(), 0);
    assert!(!rows[0].lookup().scanning());
}

#[test]
fn explicit_sort_keys_override_default_ranking() {
    let rows = vec![
        CoinRow::new(gainer("LOWUSDT", 2.0, 9e9), Some(scan("LOWUSDT", 8))),
        CoinRow::new(gainer("MIDUSDT", 15.0, 5e6), Some(scan("MIDUSDT", 3))),
        CoinRow::new(gainer("TOPUSDT", 40.0, 1e3), None),
    ];

    let by_change = filtered_view(&rows, &FilterCriteria { sort: SortOrder::Change, ..FilterCriteria::default() });
    assert_eq!(symbols(&by_change), vec!["TOPUSDT", "MIDUSDT", "LOWUSDT"]);

    let by_volume = filtered_view(&rows, &FilterCriteria { sort: SortOrder::Volume, ..FilterCriteria::default() });
    assert_eq!(symbols(&by_volume), vec!["LOWUSDT", "MIDUSDT", "TOPUSDT"]);

    let default = filtered_view(&rows, &FilterCriteria::default());
    assert_eq!(symbols(&default), vec!["LOWUSDT", "MIDUSDT", "TOPUSDT"]);
}

#[test]
fn equal_keys_keep_backend_order() {
    let rows = vec![
        CoinRow::new(gainer("FIRSTUSDT", 3.0, 1.0), Some(scan("FIRSTUSDT", 2))),
        CoinRow::new(gainer("SECONDUSDT", 3.0, 1.0), Some(scan("SECONDUSDT", 2))),
    ];
    let mut refs: Vec<&CoinRow> = rows.iter().collect();
    sort_gainers(&mut refs, SortOrder::Default);
    assert_eq!(refs[0].gainer.symbol.value(), "FIRSTUSDT");
}

#[test]
fn scanning_filter_follows_the_scanning_flag() {
    let mut scanning = scan("SOLUSDT", 4);
    scanning.scanning = true;
    let rows = vec![
        CoinRow::new(gainer("SOLUSDT", 1.0, 1.0), Some(scanning)),
        CoinRow::new(gainer("ETHUSDT", 1.0, 1.0), Some(ScanSnapshot::pending("ETHUSDT".into()))),
        CoinRow::new(gainer("BTCUSDT", 1.0, 1.0), Some(scan("BTCUSDT", 8))),
    ];
    let criteria = FilterCriteria { quick: QuickFilter::Scanning, ..FilterCriteria::default() };
    assert_eq!(symbols(&filtered_view(&rows, &criteria)), vec!["SOLUSDT", "ETHUSDT"]);
}

#[test]
fn search_and_quick_filter_combine() {
    let rows = vec![
        CoinRow::new(gainer("PEPEUSDT", 30.0, 1.0), None),
        CoinRow::new(gainer("PEOPLEUSDT", 2.0, 1.0), None),
        CoinRow::new(gainer("BTCUSDT", 30.0, 1.0), None),
    ];
    let criteria = FilterCriteria {
        search: "pe".to_string(),
        quick: QuickFilter::HighChange,
        ..FilterCriteria::default()
    };
    assert_eq!(symbols(&filtered_view(&rows, &criteria)), vec!["PEPEUSDT"]);
}

#[test]
fn filter_and_sort_names_parse_from_controls() {
    assert_eq!("high-change".parse::<QuickFilter>().ok(), Some(QuickFilter::HighChange));
    assert_eq!("volume".parse::<SortOrder>().ok(), Some(SortOrder::Volume));
    assert!("sideways".parse::<SortOrder>().is_err());
}
