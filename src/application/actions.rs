//! User-triggered commands. Each one issues a single request, flags its control as
//! pending while in flight, and reports back through notifications or a blocking
//! message. No deduplication, no optimistic updates.

use super::controller::DashboardController;
use super::gateway::{ActionReply, DashboardApi};
use crate::domain::{
    errors::{ApplicationError, NetworkResult},
    events::{DashboardEvent, NotificationKind},
    logging::LogComponent,
    market_data::Symbol,
    trading::{BotAction, BotStatus},
};
use crate::{log_error, log_info, log_warn};

#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    Succeeded(String),
    /// Backend answered with a non-success status
    Rejected(String),
    /// Transport, HTTP status or decode failure
    Failed(String),
}

impl ActionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded(_))
    }
}

impl<A: DashboardApi> DashboardController<A> {
    /// Start the bot; on acknowledgment also reloads gainers.
    pub async fn start_bot(&self) -> ActionOutcome {
        let outcome = self.toggle_bot(BotAction::Start, BotStatus::Online).await;
        if outcome.is_success() {
            self.refresh_all().await;
        }
        outcome
    }

    pub async fn stop_bot(&self) -> ActionOutcome {
        let outcome = self.toggle_bot(BotAction::Stop, BotStatus::Offline).await;
        if outcome.is_success() {
            self.refresh_status().await;
        }
        outcome
    }

    pub async fn test_bot(&self) -> ActionOutcome {
        let action = BotAction::TestBot;
        self.set_pending(&action, true);
        let result = self.api.test_bot().await;
        let outcome = self.report_test(&action, result);
        self.set_pending(&action, false);

        if outcome.is_success() {
            self.refresh_status().await;
        }
        outcome
    }

    pub async fn test_telegram(&self) -> ActionOutcome {
        let action = BotAction::TestTelegram;
        self.set_pending(&action, true);
        let result = self.api.test_telegram().await;
        let outcome = self.report_test(&action, result);
        self.set_pending(&action, false);
        outcome
    }

    /// Ask the backend to close a position. Confirmation is the caller's job.
    ///
    /// The cached position list is never edited here; a successful close is followed
    /// by a status fetch that brings the authoritative list.
    pub async fn close_position(&self, symbol: Symbol) -> ActionOutcome {
        let action = BotAction::ClosePosition(symbol.clone());
        self.set_pending(&action, true);

        let outcome = match self.api.close_position(&symbol).await {
            Ok(reply) if reply.is_success() => {
                let message = reply.message_or(&format!("Position {} closed", symbol.base_asset()));
                log_info!(LogComponent::Application("Actions"), "✅ Closed {}: {}", symbol, message);
                self.notify(NotificationKind::Success, message.clone());
                ActionOutcome::Succeeded(message)
            }
            Ok(reply) => {
                let message = reply.message_or("Failed to close position");
                let error = ApplicationError::ActionRejected { action: action.name().to_string(), message: message.clone() };
                log_error!(LogComponent::Application("Actions"), "❌ Close {} failed: {}", symbol, error);
                self.notify(NotificationKind::Error, format!("Error: {}", message));
                ActionOutcome::Rejected(message)
            }
            Err(e) => {
                log_error!(LogComponent::Application("Actions"), "❌ Close {} failed: {}", symbol, e);
                self.notify(NotificationKind::Error, "Failed to close position");
                ActionOutcome::Failed(e.to_string())
            }
        };

        self.set_pending(&action, false);
        if outcome.is_success() {
            self.refresh_status().await;
        }
        outcome
    }

    async fn toggle_bot(&self, action: BotAction, target: BotStatus) -> ActionOutcome {
        let verb = if target.is_online() { "start" } else { "stop" };
        self.set_pending(&action, true);

        let result = if target.is_online() { self.api.start_bot().await } else { self.api.stop_bot().await };
        let outcome = match result {
            Ok(reply) if reply.is_acknowledged() => {
                self.apply_bot_status(target);
                let text = if target.is_online() { "Bot started successfully" } else { "Bot stopped" };
                log_info!(LogComponent::Application("Actions"), "🤖 {}", text);
                self.notify(NotificationKind::Success, text);
                ActionOutcome::Succeeded(text.to_string())
            }
            Ok(reply) => {
                let message = reply.message_or(&format!("Failed to {} bot", verb));
                log_warn!(LogComponent::Application("Actions"), "⚠️ Backend refused {}: {}", verb, message);
                self.notify(NotificationKind::Error, message.clone());
                ActionOutcome::Rejected(message)
            }
            Err(e) => {
                log_error!(LogComponent::Application("Actions"), "❌ Failed to {} bot: {}", verb, e);
                self.notify(NotificationKind::Error, format!("Failed to {} bot", verb));
                ActionOutcome::Failed(e.to_string())
            }
        };

        self.set_pending(&action, false);
        outcome
    }

    /// Test actions answer with a blocking message, whatever the result.
    fn report_test(&self, action: &BotAction, result: NetworkResult<ActionReply>) -> ActionOutcome {
        let (outcome, text) = match result {
            Ok(reply) if reply.is_success() => {
                let message = reply.message_or("Test completed");
                let text = match &reply.test_signal {
                    Some(signal) => format!("✅ {}\n\n{}", message, signal),
                    None => format!("✅ {}", message),
                };
                (ActionOutcome::Succeeded(message), text)
            }
            Ok(reply) => {
                let message = reply.message_or("Test failed");
                log_warn!(LogComponent::Application("Actions"), "⚠️ {} rejected: {}", action.name(), message);
                let text = format!("❌ Error: {}", message);
                (ActionOutcome::Rejected(message), text)
            }
            Err(e) => {
                log_error!(LogComponent::Application("Actions"), "❌ {} failed: {}", action.name(), e);
                let text = format!("❌ Failed to run {}: {}", action.name(), e);
                (ActionOutcome::Failed(e.to_string()), text)
            }
        };

        self.publish(DashboardEvent::BlockingMessage(text));
        outcome
    }

    fn set_pending(&self, action: &BotAction, pending: bool) {
        self.publish(DashboardEvent::ActionPending { action: action.clone(), pending });
    }
}
