#![cfg(target_arch = "wasm32")]

mod common;

use std::rc::Rc;
use std::time::Duration;

use common::{FakeApi, position, status};
use gloo_timers::future::sleep;
use signal_dashboard_wasm::application::{DashboardConfig, DashboardController, Poller};
use signal_dashboard_wasm::domain::dashboard::Region;
use signal_dashboard_wasm::global_state::{self, globals};
use signal_dashboard_wasm::time_utils::clock_label;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn clock_label_is_zero_padded() {
    let morning = js_sys::Date::new_with_year_month_day_hr_min_sec(2024, 0, 5, 7, 3, 9);
    assert_eq!(clock_label(morning.get_time()), "07:03:09");
}

#[wasm_bindgen_test(async)]
async fn poller_fetches_until_stopped() {
    let controller = Rc::new(DashboardController::new(FakeApi::default(), DashboardConfig::default()));
    for total in 1..=10 {
        controller.api().status.push(Ok(status(total, true, Vec::new())));
    }

    let mut poller = Poller::new();
    poller.start(Rc::clone(&controller), 100);
    assert!(poller.is_running());

    sleep(Duration::from_millis(350)).await;
    poller.stop();
    let calls = controller.api().status.calls();
    assert!(calls >= 2, "expected at least two polls, got {}", calls);

    sleep(Duration::from_millis(300)).await;
    assert_eq!(controller.api().status.calls(), calls);
    assert!(!poller.is_running());
}

#[wasm_bindgen_test(async)]
async fn state_changes_bump_only_their_regions() {
    let controller = DashboardController::new(FakeApi::default(), DashboardConfig::default());
    global_state::bind(&controller, 1000);
    controller.api().status.push(Ok(status(40, false, vec![position("BTCUSDT", 1.5)])));
    let g = globals();
    let before: Vec<u64> = [Region::Positions, Region::Stats, Region::Signals].map(|region| g.revision(region)).to_vec();

    controller.refresh_status().await;

    assert_eq!(g.revision(Region::Positions), before[0] + 1);
    assert_eq!(g.revision(Region::Stats), before[1]);
    assert_eq!(g.revision(Region::Signals), before[2]);
    assert_eq!(g.with_regions(&[Region::Positions], |state| state.positions.len()), 1);
}
