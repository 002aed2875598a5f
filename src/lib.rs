use leptos::*;
use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::application::DashboardConfig;
use crate::domain::errors::{AppError, ApplicationError};
use crate::domain::logging::{LogComponent, get_logger};

pub mod app;
pub mod application;
pub mod domain;
pub mod global_state;
pub mod infrastructure;
pub mod presentation;
pub mod time_utils;

/// WASM entry point: logging, configuration, then mount the dashboard.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let (config, warnings) = DashboardConfig::from_window();

    let console_logger = Box::new(infrastructure::services::ConsoleLogger::new(config.log_level));
    domain::logging::init_logger(console_logger);
    domain::logging::init_time_provider(Box::new(infrastructure::services::BrowserTimeProvider));

    for warning in warnings {
        let error = AppError::from(ApplicationError::from(warning));
        get_logger().warn(
            LogComponent::Presentation("Initialize"),
            &format!("⚠️ Ignoring query override. {}", error),
        );
    }
    get_logger().info(
        LogComponent::Presentation("Initialize"),
        &format!(
            "🚀 Dashboard starting (api: '{}', poll every {} ms)",
            config.api_base, config.poll_interval_ms
        ),
    );

    mount_to_body(move || view! { <App config=config/> });
}
