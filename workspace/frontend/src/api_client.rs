use async_trait::async_trait;
use common::{Coordinates, FetchError, RawResponse, TemperatureSource};
use gloo_net::http::Request;

use crate::settings::{self, AppSettings};

/// Browser client for the temperature backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    settings: AppSettings,
}

impl ApiClient {
    pub fn new(settings: AppSettings) -> Self {
        Self { settings }
    }

    pub fn from_settings() -> Self {
        Self::new(settings::get_settings())
    }

    pub fn temperatures_url(&self, coordinates: &Coordinates) -> String {
        self.settings.api_url(&coordinates.query_path())
    }
}

#[async_trait(?Send)]
impl TemperatureSource for ApiClient {
    async fn get(&self, coordinates: &Coordinates) -> Result<RawResponse, FetchError> {
        let url = self.temperatures_url(coordinates);
        log::debug!("GET request to: {}", url);

        let response = Request::get(&url).send().await.map_err(|e| {
            let error_msg = format!("Request failed: {}", e);
            log::error!("GET {} - {}", url, error_msg);
            FetchError::Transport(error_msg)
        })?;

        let status = response.status();
        if !response.ok() {
            log::warn!("GET {} - Non-OK response: {}", url, status);
        }

        log::trace!("GET {} - Response received, reading body", url);
        let body = response.text().await.map_err(|e| {
            let error_msg = format!("Failed to read response: {}", e);
            log::error!("GET {} - {}", url, error_msg);
            FetchError::Transport(error_msg)
        })?;

        Ok(RawResponse { status, body })
    }
}
