use reqwest::Client;
use serde_json::Value;

use crate::config;

/// Seam between the session manager and the auth backend's
/// `/refresh_token` endpoint, so tests can substitute a canned exchange.
#[allow(async_fn_in_trait)]
pub trait RefreshExchange {
    async fn exchange(&self, refresh_token: &str) -> Result<String, String>;
}

/// Exchange backed by the companion auth backend over HTTP.
pub struct HttpRefresh;

impl HttpRefresh {
    pub fn new() -> Self {
        HttpRefresh
    }
}

impl Default for HttpRefresh {
    fn default() -> Self {
        Self::new()
    }
}

impl RefreshExchange for HttpRefresh {
    async fn exchange(&self, refresh_token: &str) -> Result<String, String> {
        let api_url = format!("{uri}/refresh_token", uri = &config::auth_server_url());

        let client = Client::new();
        let res = client
            .get(&api_url)
            .query(&[("refresh_token", refresh_token)])
            .send()
            .await
            .map_err(|e| e.to_string())?
            .error_for_status()
            .map_err(|e| e.to_string())?;

        let json: Value = res.json().await.map_err(|e| e.to_string())?;

        json["access_token"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| "refresh response carried no access_token".to_string())
    }
}
