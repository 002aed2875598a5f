use std::cell::{Cell, RefCell};

use super::config::DashboardConfig;
use super::gateway::DashboardApi;
use crate::domain::{
    dashboard::{DashboardState, Region},
    events::{DashboardEvent, EventDispatcher, InMemoryEventDispatcher, Notification, NotificationKind},
    logging::{LogComponent, get_logger},
    trading::BotStatus,
};
use crate::{log_debug, log_error, log_info, log_trace};

/// Result of a status or gainers fetch
#[derive(Debug, Clone, PartialEq)]
pub enum PollOutcome {
    /// Response merged; lists the regions that actually changed
    Applied(Vec<Region>),
    /// A newer response was already applied
    Stale,
    Failed(String),
}

/// Issues increasing sequence numbers and remembers the newest one applied
#[derive(Debug, Default)]
struct SequenceGuard {
    issued: Cell<u64>,
    applied: Cell<u64>,
}

impl SequenceGuard {
    fn issue(&self) -> u64 {
        let next = self.issued.get() + 1;
        self.issued.set(next);
        next
    }

    /// Accepts `seq` unless something at least as new was applied already.
    fn accept(&self, seq: u64) -> bool {
        if seq <= self.applied.get() {
            return false;
        }
        self.applied.set(seq);
        true
    }
}

/// Single owner of the dashboard state.
///
/// Every fetch goes through here; results are merged into the state cache and
/// announced to subscribers. Borrows of the state never span an `.await`.
pub struct DashboardController<A: DashboardApi> {
    pub(crate) api: A,
    config: DashboardConfig,
    state: RefCell<DashboardState>,
    dispatcher: RefCell<InMemoryEventDispatcher>,
    status_seq: SequenceGuard,
    gainers_seq: SequenceGuard,
    notification_seq: Cell<u64>,
}

impl<A: DashboardApi> DashboardController<A> {
    pub fn new(api: A, config: DashboardConfig) -> Self {
        Self {
            api,
            config,
            state: RefCell::new(DashboardState::new()),
            dispatcher: RefCell::new(InMemoryEventDispatcher::new()),
            status_seq: SequenceGuard::default(),
            gainers_seq: SequenceGuard::default(),
            notification_seq: Cell::new(0),
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Register an event handler. Must not be called from inside a handler.
    pub fn subscribe<F>(&self, handler: F)
    where
        F: Fn(&DashboardEvent) + 'static,
    {
        self.dispatcher.borrow_mut().subscribe(handler);
    }

    pub fn snapshot(&self) -> DashboardState {
        self.state.borrow().clone()
    }

    pub fn bot_status(&self) -> BotStatus {
        self.state.borrow().bot_status
    }

    /// Fetch `/api/status` and merge it. Failures leave the cache untouched.
    pub async fn refresh_status(&self) -> PollOutcome {
        let seq = self.status_seq.issue();
        let update = match self.api.fetch_status().await {
            Ok(update) => update,
            Err(e) => {
                log_error!(LogComponent::Application("Controller"), "❌ Status refresh #{} failed: {}", seq, e);
                return PollOutcome::Failed(e.to_string());
            }
        };

        if !self.status_seq.accept(seq) {
            log_debug!(LogComponent::Application("Controller"), "⏭️ Dropping stale status response #{}", seq);
            return PollOutcome::Stale;
        }

        let (regions, status_before, status_after) = {
            let mut state = self.state.borrow_mut();
            let before = state.bot_status;
            let regions = state.apply_status(update);
            (regions, before, state.bot_status)
        };

        if status_before != status_after {
            log_info!(
                LogComponent::Application("Controller"),
                "🤖 Bot reported {} (was {})",
                status_after.label(),
                status_before.label()
            );
            self.publish(DashboardEvent::BotStatusChanged(status_after));
        }
        self.publish_state(&regions);
        PollOutcome::Applied(regions)
    }

    /// Fetch `/api/gainers` and replace the list wholesale.
    pub async fn load_gainers(&self) -> PollOutcome {
        let seq = self.gainers_seq.issue();
        let result = self.api.fetch_gainers().await;

        if !self.gainers_seq.accept(seq) {
            log_debug!(LogComponent::Application("Controller"), "⏭️ Dropping stale gainers response #{}", seq);
            return PollOutcome::Stale;
        }

        match result {
            Ok(gainers) => {
                let count = gainers.len();
                let changed = self.state.borrow_mut().replace_gainers(gainers);
                get_logger().info(
                    LogComponent::Application("Controller"),
                    &format!("📈 Loaded {} gainers", count),
                );
                let regions = if changed { vec![Region::Coins] } else { Vec::new() };
                self.publish_state(&regions);
                PollOutcome::Applied(regions)
            }
            Err(e) => {
                log_error!(LogComponent::Application("Controller"), "❌ Failed to load gainers: {}", e);
                let changed = self.state.borrow_mut().mark_gainers_failed(e.to_string());
                if changed {
                    self.publish_state(&[Region::Coins]);
                }
                PollOutcome::Failed(e.to_string())
            }
        }
    }

    /// Manual refresh: status and gainers concurrently
    pub async fn refresh_all(&self) -> (PollOutcome, PollOutcome) {
        futures::join!(self.refresh_status(), self.load_gainers())
    }

    pub(crate) fn apply_bot_status(&self, next: BotStatus) {
        let changed = self.state.borrow_mut().bot_status.transition(next);
        if changed {
            self.publish(DashboardEvent::BotStatusChanged(next));
            self.publish_state(&[Region::Header]);
        }
    }

    pub(crate) fn notify(&self, kind: NotificationKind, text: impl Into<String>) {
        let id = self.notification_seq.get() + 1;
        self.notification_seq.set(id);
        self.publish(DashboardEvent::Notification(Notification { id, kind, text: text.into() }));
    }

    pub(crate) fn publish(&self, event: DashboardEvent) {
        log_trace!(
            LogComponent::Application("Controller"),
            "📣 {}",
            crate::domain::events::DomainEvent::event_type(&event)
        );
        self.dispatcher.borrow().publish(event);
    }

    fn publish_state(&self, regions: &[Region]) {
        if regions.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        self.publish(DashboardEvent::StateChanged { regions: regions.to_vec(), snapshot });
    }
}
