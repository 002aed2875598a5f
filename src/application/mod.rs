pub mod actions;
pub mod config;
pub mod controller;
pub mod gateway;
pub mod poller;

pub use actions::ActionOutcome;
pub use config::DashboardConfig;
pub use controller::{DashboardController, PollOutcome};
pub use gateway::{ActionReply, DashboardApi};
pub use poller::Poller;
