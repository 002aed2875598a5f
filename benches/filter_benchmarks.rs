use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use signal_dashboard_wasm::domain::{
    dashboard::{
        CoinRow, DashboardState, FilterCriteria, QuickFilter, SortOrder, StatusUpdate, filtered_view,
    },
    market_data::{GainerSnapshot, Symbol},
    scanning::{ConditionSet, IndicatorReadings, ScanSnapshot},
    trading::HeaderStats,
};
use signal_dashboard_wasm::presentation::view_model::coin_grid;
use std::hint::black_box;
use std::time::Duration;

/// Gainer rows with a scan entry on two out of three symbols
fn generate_rows(count: usize) -> Vec<CoinRow> {
    (0..count)
        .map(|i| {
            let symbol = Symbol::from(format!("COIN{}USDT", i).as_str());
            let change = ((i as f64 * 0.37).sin() + 1.0) * 25.0;
            let volume = 1e4 + (i as f64 * 0.11).cos().abs() * 5e8;
            let gainer = GainerSnapshot::new(symbol.clone(), format!("COIN{}", i), 1.0 + i as f64, change, volume);
            let scan = (i % 3 != 0).then(|| {
                ScanSnapshot::new(symbol, (i % 9) as u32, ConditionSet::default(), IndicatorReadings::default())
            });
            CoinRow::new(gainer, scan)
        })
        .collect()
}

fn bench_filtered_view(c: &mut Criterion) {
    let mut group = c.benchmark_group("filtered_view");
    group.measurement_time(Duration::from_secs(10));

    let cases = [
        ("default", FilterCriteria::default()),
        ("signals", FilterCriteria { quick: QuickFilter::Signals, ..FilterCriteria::default() }),
        ("search_volume", FilterCriteria { search: "coin1".to_string(), sort: SortOrder::Volume, ..FilterCriteria::default() }),
    ];

    for count in [50, 200, 1000, 5000].iter() {
        let rows = generate_rows(*count);
        for (name, criteria) in &cases {
            group.bench_with_input(BenchmarkId::new(*name, count), count, |b, _| {
                b.iter(|| filtered_view(black_box(&rows), black_box(criteria)));
            });
        }
    }
    group.finish();
}

fn bench_status_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("status_merge");

    for count in [20, 100, 500].iter() {
        let rows = generate_rows(*count);
        let update = StatusUpdate {
            header: HeaderStats { total_symbols: *count as u64, signals_count: 1, alert_count: 0, running: true },
            current_scanning: Some("COIN7".to_string()),
            opportunities: rows.iter().filter_map(|row| row.scan.clone()).collect(),
            ..StatusUpdate::default()
        };

        group.bench_with_input(BenchmarkId::new("apply_and_render", count), count, |b, _| {
            b.iter(|| {
                let mut state = DashboardState::default();
                state.replace_gainers(rows.iter().map(|row| row.gainer.clone()).collect());
                state.apply_status(update.clone());
                coin_grid(&state, &FilterCriteria::default())
            });
        });
    }
    group.finish();
}

criterion_group!(filter_benches, bench_filtered_view, bench_status_merge);
criterion_main!(filter_benches);
