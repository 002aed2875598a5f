use gloo_net::http::{Request, RequestBuilder, Response};
use serde::{Serialize, de::DeserializeOwned};

use super::dto::{ActionDto, ClosePositionRequest, GainersDto, StatusDto};
use crate::application::gateway::{ActionReply, DashboardApi};
use crate::domain::{
    dashboard::StatusUpdate,
    errors::{InfrastructureError, NetworkError, NetworkResult},
    logging::{LogComponent, LogLevel, get_logger},
    market_data::{GainerSnapshot, Symbol},
};
use crate::log_debug;

/// Backend endpoint paths
pub mod endpoints {
    pub const STATUS: &str = "/api/status";
    pub const GAINERS: &str = "/api/gainers";
    pub const START: &str = "/api/start";
    pub const STOP: &str = "/api/stop";
    pub const TEST_BOT: &str = "/api/test-bot";
    pub const TEST_TELEGRAM: &str = "/api/test-telegram";
    pub const CLOSE_POSITION: &str = "/api/close-position";
}

/// gloo-based JSON client bound to one API base
#[derive(Debug, Clone)]
pub struct GlooHttpClient {
    base_url: String,
    default_headers: Vec<(&'static str, &'static str)>,
}

impl GlooHttpClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            default_headers: vec![("Accept", "application/json")],
        }
    }

    pub fn url(&self, endpoint: &str) -> String {
        if endpoint.starts_with("http") {
            endpoint.to_string()
        } else {
            format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
        }
    }

    /// GET with JSON decoding
    pub async fn get_json<T>(&self, endpoint: &str) -> NetworkResult<T>
    where
        T: DeserializeOwned,
    {
        let url = self.url(endpoint);
        log_debug!(LogComponent::Infrastructure("HTTP"), "🌐 GET: {}", url);

        let response = self.with_headers(Request::get(&url)).send().await.map_err(request_failed)?;
        Self::decode(&url, response).await
    }

    /// POST without a body, JSON reply
    pub async fn post_empty<R>(&self, endpoint: &str) -> NetworkResult<R>
    where
        R: DeserializeOwned,
    {
        let url = self.url(endpoint);
        log_debug!(LogComponent::Infrastructure("HTTP"), "🌐 POST: {}", url);

        let response = self.with_headers(Request::post(&url)).send().await.map_err(request_failed)?;
        Self::decode(&url, response).await
    }

    /// POST a JSON body, JSON reply
    pub async fn post_json<T, R>(&self, endpoint: &str, body: &T) -> NetworkResult<R>
    where
        T: Serialize,
        R: DeserializeOwned,
    {
        let url = self.url(endpoint);
        log_debug!(LogComponent::Infrastructure("HTTP"), "🌐 POST JSON: {}", url);

        let response = self
            .with_headers(Request::post(&url))
            .json(body)
            .map_err(|e| NetworkError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(request_failed)?;
        Self::decode(&url, response).await
    }

    fn with_headers(&self, mut request: RequestBuilder) -> RequestBuilder {
        for (key, value) in &self.default_headers {
            request = request.header(key, value);
        }
        request
    }

    async fn decode<R>(url: &str, response: Response) -> NetworkResult<R>
    where
        R: DeserializeOwned,
    {
        if !response.ok() {
            let error = NetworkError::HttpStatus { status: response.status(), status_text: response.status_text() };
            get_logger().log_with_metadata(
                LogLevel::Warn,
                LogComponent::Infrastructure("HTTP"),
                &error.to_string(),
                url,
            );
            return Err(error.into());
        }

        response
            .json::<R>()
            .await
            .map_err(|e| InfrastructureError::from(NetworkError::Deserialization(e.to_string())))
    }
}

fn request_failed(error: gloo_net::Error) -> InfrastructureError {
    NetworkError::HttpRequestFailed(error.to_string()).into()
}

/// `DashboardApi` over HTTP
#[derive(Debug, Clone)]
pub struct HttpDashboardApi {
    client: GlooHttpClient,
}

impl HttpDashboardApi {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self { client: GlooHttpClient::new(api_base) }
    }

    async fn command(&self, endpoint: &str) -> NetworkResult<ActionReply> {
        let dto: ActionDto = self.client.post_empty(endpoint).await?;
        Ok(dto.into())
    }
}

impl DashboardApi for HttpDashboardApi {
    async fn fetch_status(&self) -> NetworkResult<StatusUpdate> {
        let dto: StatusDto = self.client.get_json(endpoints::STATUS).await?;
        Ok(dto.into())
    }

    async fn fetch_gainers(&self) -> NetworkResult<Vec<GainerSnapshot>> {
        let dto: GainersDto = self.client.get_json(endpoints::GAINERS).await?;
        Ok(dto.into_domain())
    }

    async fn start_bot(&self) -> NetworkResult<ActionReply> {
        self.command(endpoints::START).await
    }

    async fn stop_bot(&self) -> NetworkResult<ActionReply> {
        self.command(endpoints::STOP).await
    }

    async fn test_bot(&self) -> NetworkResult<ActionReply> {
        self.command(endpoints::TEST_BOT).await
    }

    async fn test_telegram(&self) -> NetworkResult<ActionReply> {
        self.command(endpoints::TEST_TELEGRAM).await
    }

    async fn close_position(&self, symbol: &Symbol) -> NetworkResult<ActionReply> {
        let body = ClosePositionRequest { symbol: symbol.value().to_string() };
        let dto: ActionDto = self.client.post_json(endpoints::CLOSE_POSITION, &body).await?;
        Ok(dto.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_join_base_and_endpoint() {
        assert_eq!(GlooHttpClient::new("").url(endpoints::STATUS), "/api/status");
        assert_eq!(
            GlooHttpClient::new("http://localhost:5000/").url(endpoints::CLOSE_POSITION),
            "http://localhost:5000/api/close-position"
        );
        assert_eq!(GlooHttpClient::new("/bot").url("https://other/api"), "https://other/api");
    }
}
