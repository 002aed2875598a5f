//! Browser-facing adapters: the HTTP gateway, wire DTOs and console services.

pub mod dto;
pub mod http;
pub mod services;

pub use http::{GlooHttpClient, HttpDashboardApi, endpoints};
pub use services::{BrowserTimeProvider, ConsoleLogger};
