use std::collections::HashSet;

use gloo_timers::callback::Timeout;
use leptos::*;
use once_cell::sync::OnceCell;

use crate::application::{DashboardApi, DashboardController};
use crate::domain::{
    dashboard::{DashboardState, FilterCriteria, Region},
    events::{DashboardEvent, Notification},
    logging::{LogComponent, get_logger},
    trading::BotAction,
};
use crate::time_utils::now_label;

/// One counter per page region, bumped when a `StateChanged` names it
pub struct RegionRevisions {
    header: RwSignal<u64>,
    coins: RwSignal<u64>,
    positions: RwSignal<u64>,
    signals: RwSignal<u64>,
    stats: RwSignal<u64>,
}

impl RegionRevisions {
    fn new() -> Self {
        Self {
            header: create_rw_signal(0),
            coins: create_rw_signal(0),
            positions: create_rw_signal(0),
            signals: create_rw_signal(0),
            stats: create_rw_signal(0),
        }
    }

    fn signal(&self, region: Region) -> RwSignal<u64> {
        match region {
            Region::Header => self.header,
            Region::Coins => self.coins,
            Region::Positions => self.positions,
            Region::Signals => self.signals,
            Region::Stats => self.stats,
        }
    }
}

/// Reactive mirror of the controller state plus view-only inputs.
///
/// The snapshot itself is stored untracked; readers subscribe to the regions
/// they render through [`Globals::with_regions`].
pub struct Globals {
    state: RwSignal<DashboardState>,
    revisions: RegionRevisions,
    pub criteria: RwSignal<FilterCriteria>,
    pub pending: RwSignal<HashSet<BotAction>>,
    pub notification: RwSignal<Option<Notification>>,
    pub last_update: RwSignal<String>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals {
        state: create_rw_signal(DashboardState::default()),
        revisions: RegionRevisions::new(),
        criteria: create_rw_signal(FilterCriteria::default()),
        pending: create_rw_signal(HashSet::new()),
        notification: create_rw_signal(None),
        last_update: create_rw_signal("--:--:--".to_string()),
    })
}

impl Globals {
    /// Read the cached state, re-running the caller only when one of `regions` changes.
    pub fn with_regions<O>(&self, regions: &[Region], f: impl FnOnce(&DashboardState) -> O) -> O {
        for region in regions {
            self.revisions.signal(*region).track();
        }
        self.state.with_untracked(f)
    }

    pub fn revision(&self, region: Region) -> u64 {
        self.revisions.signal(region).get_untracked()
    }

    fn apply_snapshot(&self, regions: &[Region], snapshot: &DashboardState) {
        self.state.set_untracked(snapshot.clone());
        for region in regions {
            self.revisions.signal(*region).update(|revision| *revision += 1);
        }
        self.last_update.set(now_label());
    }

    pub fn is_pending(&self, action: &BotAction) -> bool {
        self.pending.with(|pending| pending.contains(action))
    }
}

/// Subscribe the signals to controller events. Call once per controller.
pub fn bind<A: DashboardApi>(controller: &DashboardController<A>, notification_ms: u32) {
    let globals = globals();

    controller.subscribe(move |event| match event {
        DashboardEvent::StateChanged { regions, snapshot } => {
            get_logger().trace(
                LogComponent::Presentation("Store"),
                &format!("🔄 Re-rendering {:?}", regions),
            );
            globals.apply_snapshot(regions, snapshot);
        }
        DashboardEvent::Notification(notification) => {
            let id = notification.id;
            globals.notification.set(Some(notification.clone()));
            Timeout::new(notification_ms, move || {
                globals.notification.update(|current| {
                    if current.as_ref().is_some_and(|shown| shown.id == id) {
                        *current = None;
                    }
                });
            })
            .forget();
        }
        DashboardEvent::BlockingMessage(text) => gloo::dialogs::alert(text),
        DashboardEvent::ActionPending { action, pending } => {
            globals.pending.update(|set| {
                if *pending {
                    set.insert(action.clone());
                } else {
                    set.remove(action);
                }
            });
        }
        DashboardEvent::BotStatusChanged(status) => {
            get_logger().info(
                LogComponent::Presentation("Store"),
                &format!("🤖 Bot status: {}", status.label()),
            );
        }
    });
}
