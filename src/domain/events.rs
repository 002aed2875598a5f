use crate::domain::dashboard::{DashboardState, Region};
use crate::domain::trading::{BotAction, BotStatus};
use std::fmt::Debug;

/// Base trait for all domain events
pub trait DomainEvent: Debug + Clone {
    fn event_type(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Success => "notification success",
            Self::Error => "notification error",
            Self::Info => "notification info",
        }
    }
}

/// Transient toast. `id` lets the view dismiss exactly the toast it scheduled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub text: String,
}

/// Events published by the dashboard controller
#[derive(Debug, Clone)]
pub enum DashboardEvent {
    StateChanged {
        regions: Vec<Region>,
        snapshot: DashboardState,
    },
    Notification(Notification),
    /// Message that must be acknowledged by the user (test actions)
    BlockingMessage(String),
    ActionPending {
        action: BotAction,
        pending: bool,
    },
    BotStatusChanged(BotStatus),
}

impl DomainEvent for DashboardEvent {
    fn event_type(&self) -> &'static str {
        match self {
            DashboardEvent::StateChanged { .. } => "StateChanged",
            DashboardEvent::Notification(_) => "Notification",
            DashboardEvent::BlockingMessage(_) => "BlockingMessage",
            DashboardEvent::ActionPending { .. } => "ActionPending",
            DashboardEvent::BotStatusChanged(_) => "BotStatusChanged",
        }
    }
}

/// Event dispatcher for publishing events
pub trait EventDispatcher {
    fn publish(&self, event: DashboardEvent);
}

/// Simple in-memory event dispatcher
#[derive(Default)]
pub struct InMemoryEventDispatcher {
    handlers: Vec<Box<dyn Fn(&DashboardEvent)>>,
}

impl InMemoryEventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, handler: F)
    where
        F: Fn(&DashboardEvent) + 'static,
    {
        self.handlers.push(Box::new(handler));
    }
}

impl EventDispatcher for InMemoryEventDispatcher {
    fn publish(&self, event: DashboardEvent) {
        for handler in &self.handlers {
            handler(&event);
        }
    }
}
