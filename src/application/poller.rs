use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen_futures::spawn_local;

use super::controller::DashboardController;
use super::gateway::DashboardApi;
use crate::domain::logging::{LogComponent, get_logger};

/// Fixed-cadence status poller.
///
/// Stopping drops the timer only; requests already in flight still complete and
/// are filtered by the controller's sequence guard.
#[derive(Default)]
pub struct Poller {
    interval: Option<Interval>,
}

impl Poller {
    pub fn new() -> Self {
        Self::default()
    }

    /// (Re)start polling every `period_ms`. A previous timer is cancelled first.
    pub fn start<A>(&mut self, controller: Rc<DashboardController<A>>, period_ms: u32)
    where
        A: DashboardApi + 'static,
    {
        self.stop();
        get_logger().info(
            LogComponent::Application("Poller"),
            &format!("⏱️ Polling status every {} ms", period_ms),
        );

        let interval = Interval::new(period_ms, move || {
            let controller = Rc::clone(&controller);
            spawn_local(async move {
                controller.refresh_status().await;
            });
        });
        self.interval = Some(interval);
    }

    pub fn stop(&mut self) {
        if let Some(interval) = self.interval.take() {
            drop(interval);
            get_logger().info(LogComponent::Application("Poller"), "⏹️ Polling stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.interval.is_some()
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.stop();
    }
}
