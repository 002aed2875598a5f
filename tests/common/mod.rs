#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::Mutex;

use futures::channel::oneshot;
use signal_dashboard_wasm::application::{ActionReply, DashboardApi};
use signal_dashboard_wasm::domain::{
    dashboard::StatusUpdate,
    errors::{InfrastructureError, NetworkError, NetworkResult},
    events::DashboardEvent,
    logging::{LogEntry, Logger, init_logger},
    market_data::{GainerSnapshot, Price, Symbol},
    scanning::{ConditionSet, IndicatorReadings, ScanSnapshot},
    trading::{HeaderStats, Position, PositionStatus},
};

enum Scripted<T> {
    Ready(NetworkResult<T>),
    Deferred(oneshot::Receiver<NetworkResult<T>>),
}

/// Queue of canned responses for one endpoint
pub struct Script<T> {
    queue: RefCell<VecDeque<Scripted<T>>>,
    calls: Cell<usize>,
}

impl<T> Default for Script<T> {
    fn default() -> Self {
        Self { queue: RefCell::new(VecDeque::new()), calls: Cell::new(0) }
    }
}

impl<T> Script<T> {
    pub fn push(&self, result: NetworkResult<T>) {
        self.queue.borrow_mut().push_back(Scripted::Ready(result));
    }

    /// Queue a response the test completes later through the returned sender
    pub fn defer(&self) -> oneshot::Sender<NetworkResult<T>> {
        let (tx, rx) = oneshot::channel();
        self.queue.borrow_mut().push_back(Scripted::Deferred(rx));
        tx
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    async fn next(&self) -> NetworkResult<T> {
        self.calls.set(self.calls.get() + 1);
        let next = self.queue.borrow_mut().pop_front();
        match next {
            Some(Scripted::Ready(result)) => result,
            Some(Scripted::Deferred(rx)) => rx.await.unwrap_or_else(|_| Err(network_error("cancelled"))),
            None => Err(network_error("no scripted response")),
        }
    }
}

/// In-memory backend driven by per-endpoint scripts
#[derive(Default)]
pub struct FakeApi {
    pub status: Script<StatusUpdate>,
    pub gainers: Script<Vec<GainerSnapshot>>,
    pub start: Script<ActionReply>,
    pub stop: Script<ActionReply>,
    pub test_bot: Script<ActionReply>,
    pub test_telegram: Script<ActionReply>,
    pub close: Script<ActionReply>,
    pub closed_symbols: RefCell<Vec<Symbol>>,
}

impl DashboardApi for FakeApi {
    async fn fetch_status(&self) -> NetworkResult<StatusUpdate> {
        self.status.next().await
    }

    async fn fetch_gainers(&self) -> NetworkResult<Vec<GainerSnapshot>> {
        self.gainers.next().await
    }

    async fn start_bot(&self) -> NetworkResult<ActionReply> {
        self.start.next().await
    }

    async fn stop_bot(&self) -> NetworkResult<ActionReply> {
        self.stop.next().await
    }

    async fn test_bot(&self) -> NetworkResult<ActionReply> {
        self.test_bot.next().await
    }

    async fn test_telegram(&self) -> NetworkResult<ActionReply> {
        self.test_telegram.next().await
    }

    async fn close_position(&self, symbol: &Symbol) -> NetworkResult<ActionReply> {
        self.closed_symbols.borrow_mut().push(symbol.clone());
        self.close.next().await
    }
}

pub fn network_error(message: &str) -> InfrastructureError {
    NetworkError::HttpRequestFailed(message.to_string()).into()
}

static CAPTURED: Mutex<Vec<String>> = Mutex::new(Vec::new());

struct CaptureLogger;

impl Logger for CaptureLogger {
    fn log(&self, entry: LogEntry) {
        let line = format!("{} {} {}", entry.level, entry.component, entry.message);
        CAPTURED.lock().unwrap().push(line);
    }
}

/// Route the global logger into memory. Safe to call from every test.
pub fn capture_logs() {
    init_logger(Box::new(CaptureLogger));
}

pub fn logged(fragment: &str) -> bool {
    CAPTURED.lock().unwrap().iter().any(|line| line.contains(fragment))
}

pub type EventLog = Rc<RefCell<Vec<DashboardEvent>>>;

pub fn record_events<A: DashboardApi>(
    controller: &signal_dashboard_wasm::application::DashboardController<A>,
) -> EventLog {
    let log: EventLog = Rc::default();
    let sink = Rc::clone(&log);
    controller.subscribe(move |event| sink.borrow_mut().push(event.clone()));
    log
}

pub fn gainer(symbol: &str, change: f64, volume: f64) -> GainerSnapshot {
    let symbol = Symbol::from(symbol);
    let coin = symbol.base_asset().to_string();
    GainerSnapshot::new(symbol, coin, 1.25, change, volume)
}

pub fn scan(symbol: &str, met: u32) -> ScanSnapshot {
    ScanSnapshot::new(Symbol::from(symbol), met, ConditionSet::default(), IndicatorReadings::default())
}

pub fn position(symbol: &str, pnl_percent: f64) -> Position {
    let symbol = Symbol::from(symbol);
    Position {
        coin: symbol.base_asset().to_string(),
        symbol,
        entry_price: Price::from(100.0),
        current_price: Price::from(100.0 + pnl_percent),
        status: PositionStatus::Active,
        remaining_size: Some(100.0),
        realized_pnl: None,
        unrealized_pnl: None,
        pnl_percent: Some(pnl_percent),
        tp1: Some(Price::from(100.5)),
        tp2: Some(Price::from(101.0)),
        stop_loss: Some(Price::from(99.5)),
        entry_time: Some("12:00:00".to_string()),
        last_update: None,
        tp1_hit: false,
        entry_level: Some(1),
    }
}

pub fn status(total_symbols: u64, running: bool, positions: Vec<Position>) -> StatusUpdate {
    StatusUpdate {
        header: HeaderStats { total_symbols, signals_count: 0, alert_count: 0, running },
        positions: Some(positions),
        ..StatusUpdate::default()
    }
}
